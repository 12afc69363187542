// Core types shared by the drawing engine and the window/camera shell.

use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A solid-color buffer, mostly useful as a blank base in tests.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }
}

/// A pixel position. Signed so intermediate geometry can go off-frame;
/// every plot is bounds-checked at the raster layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, rounded to the nearest pixel.
    /// Visual: this is the radius of a circle anchored here and dragged to `other`.
    pub fn distance_to(self, other: Point) -> i32 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt().round() as i32
    }

    /// Clamp into a width×height frame so the canvas is never indexed outside.
    pub fn clamped(self, width: usize, height: usize) -> Self {
        Self {
            x: self.x.clamp(0, width.max(1) as i32 - 1),
            y: self.y.clamp(0, height.max(1) as i32 - 1),
        }
    }
}

/// One pointer observation per processed frame. The position is the tracked
/// fingertip (or the mouse in the demo shell); `pen_active` is the raised
/// index-finger signal, analogous to "mouse button down".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSample {
    pub x: i32,
    pub y: i32,
    pub pen_active: bool,
}

impl CursorSample {
    pub const fn new(x: i32, y: i32, pen_active: bool) -> Self {
        Self { x, y, pen_active }
    }

    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}
