// The persistent drawing surface.
//
// A single-channel raster the size of the video frame: 255 means "untouched,
// show the live camera pixel", 0 means "drawn, show ink". Committed strokes
// accumulate here for the life of the process; only an explicit clear ever
// rebuilds it.

use crate::raster::{DrawOp, plot_op};
use crate::types::FrameBuffer;

/// Cell value for pixels the user has never drawn on.
pub const UNTOUCHED: u8 = 255;
/// Cell value for permanently drawn pixels.
pub const DRAWN: u8 = 0;

pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Canvas {
    /// A fresh canvas with every cell untouched.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![UNTOUCHED; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at (x, y); out-of-bounds reads as untouched.
    pub fn value_at(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return UNTOUCHED;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Read-only snapshot of the raw cells, for rendering or telemetry.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Rasterize `op` into the canvas at `value` (DRAWN to commit a stroke,
    /// UNTOUCHED to erase). Plots falling outside the canvas are dropped.
    pub fn apply(&mut self, op: &DrawOp, value: u8, thickness: i32) {
        let (w, h) = (self.width as i32, self.height as i32);
        plot_op(op, thickness, |x, y| {
            if x >= 0 && y >= 0 && x < w && y < h {
                self.cells[y as usize * self.width + x as usize] = value;
            }
        });
    }

    /// Reset every cell to untouched. Visual: all strokes disappear and the
    /// raw camera image shows through everywhere again.
    pub fn clear(&mut self) {
        self.cells.fill(UNTOUCHED);
    }

    /// True if nothing has been drawn (or everything was erased).
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == UNTOUCHED)
    }

    /// Merge the canvas into the live frame: drawn cells force the ink
    /// color, untouched cells leave the camera pixel alone.
    pub fn composite(&self, frame: &mut FrameBuffer, ink: u32) {
        debug_assert_eq!(frame.width, self.width);
        debug_assert_eq!(frame.height, self.height);
        let len = frame.pixels.len().min(self.cells.len());
        for i in 0..len {
            if self.cells[i] == DRAWN {
                frame.pixels[i] = ink;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn starts_blank() {
        let canvas = Canvas::new(8, 8);
        assert!(canvas.is_blank());
        assert_eq!(canvas.value_at(3, 3), UNTOUCHED);
    }

    #[test]
    fn apply_marks_cells_and_clear_resets_them() {
        let mut canvas = Canvas::new(16, 16);
        let op = DrawOp::Line { from: Point::new(0, 0), to: Point::new(15, 15) };
        canvas.apply(&op, DRAWN, 1);
        assert_eq!(canvas.value_at(0, 0), DRAWN);
        assert_eq!(canvas.value_at(15, 15), DRAWN);
        assert!(!canvas.is_blank());

        canvas.clear();
        assert!(canvas.is_blank());
    }

    #[test]
    fn erase_restores_untouched_regardless_of_prior_value() {
        let mut canvas = Canvas::new(32, 32);
        canvas.apply(
            &DrawOp::Disk { center: Point::new(16, 16), radius: 8 },
            DRAWN,
            1,
        );
        assert_eq!(canvas.value_at(16, 16), DRAWN);

        canvas.apply(
            &DrawOp::Disk { center: Point::new(16, 16), radius: 8 },
            UNTOUCHED,
            1,
        );
        assert!(canvas.is_blank());
    }

    #[test]
    fn out_of_bounds_plots_are_dropped() {
        let mut canvas = Canvas::new(8, 8);
        canvas.apply(
            &DrawOp::Line { from: Point::new(-10, 4), to: Point::new(20, 4) },
            DRAWN,
            1,
        );
        // The visible span is marked; nothing panicked off the edges.
        assert_eq!(canvas.value_at(0, 4), DRAWN);
        assert_eq!(canvas.value_at(7, 4), DRAWN);
        assert_eq!(canvas.value_at(7, 5), UNTOUCHED);
    }

    #[test]
    fn composite_forces_ink_only_where_drawn() {
        let mut canvas = Canvas::new(4, 1);
        canvas.apply(
            &DrawOp::Line { from: Point::new(1, 0), to: Point::new(2, 0) },
            DRAWN,
            1,
        );
        let mut frame = FrameBuffer::filled(4, 1, 0x00AABBCC);
        canvas.composite(&mut frame, 0);
        assert_eq!(frame.pixels, vec![0x00AABBCC, 0, 0, 0x00AABBCC]);
    }
}
