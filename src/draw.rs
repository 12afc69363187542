// Window + on-frame rendering.
// Visual effects provided here:
// 1) A window that shows the live camera image.
// 2) The tool palette strip, dwell indicator, and shape previews.
// 3) A crosshair that follows the cursor.
// 4) A tiny 5x7 bitmap font for the HUD and slot labels.

use crate::raster::{DrawOp, plot_op};
use crate::select::Indicator;
use crate::tool::{Palette, Tool};
use crate::types::{CursorSample, FrameBuffer, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the camera feed.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, crate::error::Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| crate::error::Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), crate::error::Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| crate::error::Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Visual: when pressed, all committed strokes vanish (canvas cleared).
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// One cursor observation for this frame, from the mouse. The mouse
    /// stands in for the fingertip tracker: left button held = pen active.
    /// A fingertip source would produce the same `CursorSample`s.
    pub fn cursor_sample(&self) -> Option<CursorSample> {
        self.window.get_mouse_pos(MouseMode::Clamp).map(|(x, y)| {
            CursorSample::new(
                x.max(0.0) as i32,
                y.max(0.0) as i32,
                self.window.get_mouse_down(MouseButton::Left),
            )
        })
    }
}

/* ---------- Software drawing: pixels, ops, palette, crosshair, font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    plot_op(
        &DrawOp::Line { from: Point::new(x0, y0), to: Point::new(x1, y1) },
        1,
        |x, y| put_pixel(fb, x, y, color),
    );
}

/// Rasterize one engine op onto the live frame. Visual: the transient
/// preview (or eraser footprint) for this frame only; nothing persists.
pub fn render_op(fb: &mut FrameBuffer, op: &DrawOp, color: u32, thickness: i32) {
    plot_op(op, thickness, |x, y| put_pixel(fb, x, y, color));
}

/// Overlay color for each tool's preview; the eraser shows its footprint
/// in black, matching the ink it removes.
pub fn preview_color(tool: Tool) -> u32 {
    match tool {
        Tool::Line => 0x00FF9832,
        Tool::Rectangle => 0x00FFFF00,
        Tool::Circle => 0x0000FFFF,
        Tool::Erase => 0x00000000,
        Tool::Freehand | Tool::None => 0x00FFFFFF,
    }
}

/// Draw the tool strip: one outlined box per slot with its label, the
/// current tool highlighted. Visual: a row of labeled boxes along the top.
pub fn draw_palette(fb: &mut FrameBuffer, palette: &Palette, current: Tool) {
    for (i, &tool) in palette.tools.iter().enumerate() {
        let o = palette.slot_origin(i);
        let (x0, y0) = (o.x, o.y);
        let (x1, y1) = (o.x + palette.slot_width - 1, o.y + palette.slot_height - 1);
        let color = if tool == current { 0x0000FF00 } else { 0x00FFFFFF };
        draw_line(fb, x0, y0, x1, y0, color);
        draw_line(fb, x1, y0, x1, y1, color);
        draw_line(fb, x1, y1, x0, y1, color);
        draw_line(fb, x0, y1, x0, y0, color);
        draw_text_5x7(fb, x0 + 6, y0 + palette.slot_height / 2 - 3, tool.label(), color);
    }
}

/// Draw the dwell feedback circle over the candidate slot.
pub fn draw_indicator(fb: &mut FrameBuffer, indicator: &Indicator) {
    render_op(
        fb,
        &DrawOp::Circle { center: indicator.center, radius: indicator.radius },
        0x00FFFF00,
        2,
    );
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a "+" shape (with a tiny gap at the center) follows the cursor.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    draw_line(fb, cx - size, cy, cx - 2, cy, color);
    draw_line(fb, cx + 2, cy, cx + size, cy, color);
    draw_line(fb, cx, cy - size, cx, cy - 2, color);
    draw_line(fb, cx, cy + 2, cx, cy + size, color);
    put_pixel(fb, cx, cy, color);
}

/* ---------- 5x7 bitmap font (ASCII subset for labels + HUD) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters for tool labels + HUD
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),

        // Punctuation: space, vertical bar, colon, dot
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
