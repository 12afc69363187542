// The per-frame drawing engine.
//
// One owned value holds everything with state: the current tool, the shape
// in progress, the persistent canvas, and the dwell selector. The shell
// feeds it one `CursorSample` per frame (or `None` when no hand was
// detected) and renders whatever `FrameOutput` asks for. Nothing in here
// touches a window, a camera, or the clock.

use tracing::{debug, info};

use crate::canvas::{Canvas, DRAWN, UNTOUCHED};
use crate::config::EngineConfig;
use crate::raster::DrawOp;
use crate::select::{DwellSelector, Indicator};
use crate::tool::Tool;
use crate::types::{CursorSample, Point};

/// Shape-in-progress state. "No anchor" is a variant, never a stale
/// coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShapeState {
    Idle,
    /// Two-point shapes (line/rectangle/circle): the gesture-down position.
    Anchored(Point),
    /// Freehand: the previous pen position, tail of the next segment.
    Stroking(Point),
}

/// What one call to `process` produced. The shell draws `preview` onto the
/// live frame only; committed work is already on the canvas when
/// `canvas_mutated` is true.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameOutput {
    /// Tool in effect after this frame (selection applies immediately).
    pub tool: Tool,
    /// Set on the single frame a dwell completes.
    pub selected: Option<Tool>,
    /// Dwell feedback circle, while a candidate is being counted.
    pub indicator: Option<Indicator>,
    /// Transient overlay for this frame: shape preview or eraser footprint.
    pub preview: Option<DrawOp>,
    /// True when this frame wrote to the canvas.
    pub canvas_mutated: bool,
}

pub struct DrawingEngine {
    config: EngineConfig,
    tool: Tool,
    shape: ShapeState,
    canvas: Canvas,
    selector: DwellSelector,
}

impl DrawingEngine {
    pub fn new(config: EngineConfig) -> Self {
        let canvas = Canvas::new(config.width, config.height);
        let selector = DwellSelector::new(config.dwell_frames, config.indicator_radius);
        Self { config, tool: Tool::None, shape: ShapeState::Idle, canvas, selector }
    }

    pub fn current_tool(&self) -> Tool {
        self.tool
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Wipe the canvas and any shape in progress. The next pen-down starts
    /// a fresh anchor, never a continuation.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.shape = ShapeState::Idle;
        info!("canvas cleared");
    }

    /// Advance one frame. `None` means no hand was detected: the dwell
    /// selector resets as if the cursor left the strip, but an in-progress
    /// shape is paused, not aborted — only an explicit pen-up commits.
    pub fn process(&mut self, sample: Option<CursorSample>) -> FrameOutput {
        let mut out = FrameOutput { tool: self.tool, ..FrameOutput::default() };

        let Some(sample) = sample else {
            self.selector.reset();
            return out;
        };

        // Never index the canvas outside the frame, whatever the tracker says.
        let pos = sample.position().clamped(self.config.width, self.config.height);

        // 1) Dwell selection. Hover only; pen state plays no part.
        let picked = self.selector.observe(pos, &self.config.palette);
        out.indicator = picked.indicator;
        if let Some(tool) = picked.selected {
            out.selected = Some(tool);
            if tool != self.tool {
                // A half-finished shape is abandoned, never committed.
                if self.shape != ShapeState::Idle {
                    debug!(tool = ?self.tool, "tool change discards shape in progress");
                }
                self.shape = ShapeState::Idle;
                self.tool = tool;
                info!(tool = tool.label(), "tool selected");
            }
        }
        out.tool = self.tool;

        // 2) Shape state machine for the (possibly just-changed) tool.
        match self.tool {
            Tool::None => {}

            Tool::Freehand => {
                if sample.pen_active {
                    // First pen frame only seeds the previous point; each one
                    // after commits a segment straight onto the canvas.
                    if let ShapeState::Stroking(prev) = self.shape {
                        let op = DrawOp::Line { from: prev, to: pos };
                        self.canvas.apply(&op, DRAWN, self.config.stroke_thickness);
                        out.canvas_mutated = true;
                    }
                    self.shape = ShapeState::Stroking(pos);
                } else {
                    self.shape = ShapeState::Idle;
                }
            }

            Tool::Line | Tool::Rectangle | Tool::Circle => {
                if sample.pen_active {
                    let anchor = match self.shape {
                        ShapeState::Anchored(a) => a,
                        // Gesture-down (or leftover freehand state): capture here.
                        _ => pos,
                    };
                    self.shape = ShapeState::Anchored(anchor);
                    out.preview = Some(self.two_point_op(anchor, pos));
                } else if let ShapeState::Anchored(anchor) = self.shape {
                    // Pen-up edge: exactly one commit, then back to idle.
                    let op = self.two_point_op(anchor, pos);
                    self.canvas.apply(&op, DRAWN, self.config.stroke_thickness);
                    self.shape = ShapeState::Idle;
                    out.canvas_mutated = true;
                    debug!(?op, "shape committed");
                }
            }

            Tool::Erase => {
                if sample.pen_active {
                    let op = DrawOp::Disk { center: pos, radius: self.config.eraser_radius };
                    self.canvas.apply(&op, UNTOUCHED, 1);
                    // The same footprint is shown on the live frame.
                    out.preview = Some(op);
                    out.canvas_mutated = true;
                }
            }
        }

        out
    }

    fn two_point_op(&self, anchor: Point, far: Point) -> DrawOp {
        match self.tool {
            Tool::Line => DrawOp::Line { from: anchor, to: far },
            Tool::Rectangle => DrawOp::Rect { a: anchor, b: far },
            Tool::Circle => DrawOp::Circle { center: anchor, radius: anchor.distance_to(far) },
            // Only called for the three two-point tools.
            _ => unreachable!("two_point_op outside line/rect/circle"),
        }
    }

    #[cfg(test)]
    fn force_tool(&mut self, tool: Tool) {
        self.shape = ShapeState::Idle;
        self.tool = tool;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> DrawingEngine {
        DrawingEngine::new(EngineConfig::default())
    }

    fn pen(x: i32, y: i32) -> Option<CursorSample> {
        Some(CursorSample::new(x, y, true))
    }

    fn hover(x: i32, y: i32) -> Option<CursorSample> {
        Some(CursorSample::new(x, y, false))
    }

    #[test]
    fn default_tool_draws_nothing() {
        let mut eng = engine();
        for _ in 0..20 {
            let out = eng.process(pen(300, 300));
            assert!(!out.canvas_mutated);
            assert!(out.preview.is_none());
        }
        assert!(eng.canvas().is_blank());
    }

    #[test]
    fn line_commits_once_on_pen_release() {
        let mut eng = engine();
        eng.force_tool(Tool::Line);

        let out = eng.process(pen(100, 200));
        assert!(out.preview.is_some());
        assert!(!out.canvas_mutated);

        eng.process(pen(150, 220));
        let out = eng.process(hover(200, 240));
        assert!(out.canvas_mutated);
        assert_eq!(eng.canvas().value_at(100, 200), DRAWN);
        assert_eq!(eng.canvas().value_at(200, 240), DRAWN);

        // Further pen-up frames commit nothing more.
        let out = eng.process(hover(200, 240));
        assert!(!out.canvas_mutated);
    }

    #[test]
    fn preview_tracks_the_cursor_without_touching_the_canvas() {
        let mut eng = engine();
        eng.force_tool(Tool::Rectangle);
        eng.process(pen(100, 100));
        let out = eng.process(pen(180, 160));
        assert_eq!(
            out.preview,
            Some(DrawOp::Rect { a: Point::new(100, 100), b: Point::new(180, 160) })
        );
        assert!(eng.canvas().is_blank());
    }

    #[test]
    fn circle_radius_is_rounded_euclidean_distance() {
        let mut eng = engine();
        eng.force_tool(Tool::Circle);
        eng.process(pen(100, 100));
        eng.process(pen(130, 140));
        let out = eng.process(hover(130, 140));
        assert!(out.canvas_mutated);
        // Anchor (100,100), release (130,140): radius 50. The rightmost
        // outline pixel sits at (150, 100).
        assert_eq!(eng.canvas().value_at(150, 100), DRAWN);
        assert_eq!(eng.canvas().value_at(100, 100), UNTOUCHED); // center stays clear
    }

    #[test]
    fn pen_never_active_commits_nothing() {
        let mut eng = engine();
        eng.force_tool(Tool::Circle);
        for _ in 0..30 {
            let out = eng.process(hover(250, 250));
            assert!(!out.canvas_mutated);
        }
        assert!(eng.canvas().is_blank());
    }

    #[test]
    fn freehand_commits_one_segment_per_following_pen_frame() {
        let mut eng = engine();
        eng.force_tool(Tool::Freehand);

        let samples = [(100, 300), (110, 305), (120, 310), (130, 315)];
        let mut mutations = 0;
        for (i, &(x, y)) in samples.iter().enumerate() {
            let out = eng.process(pen(x, y));
            if out.canvas_mutated {
                mutations += 1;
            }
            // The very first pen frame only seeds the previous point.
            assert_eq!(out.canvas_mutated, i > 0);
        }
        assert_eq!(mutations, samples.len() - 1);

        let out = eng.process(hover(130, 315));
        assert!(!out.canvas_mutated);
    }

    #[test]
    fn freehand_run_after_pen_up_starts_fresh() {
        let mut eng = engine();
        eng.force_tool(Tool::Freehand);
        eng.process(pen(100, 300));
        eng.process(pen(120, 300));
        eng.process(hover(120, 300));
        // New run far away: the first frame must not connect to (120,300).
        let out = eng.process(pen(400, 300));
        assert!(!out.canvas_mutated);
        assert_eq!(eng.canvas().value_at(260, 300), UNTOUCHED);
    }

    #[test]
    fn erase_restores_canvas_under_the_disk() {
        let mut eng = engine();
        eng.force_tool(Tool::Freehand);
        eng.process(pen(200, 300));
        eng.process(pen(260, 300));
        assert_eq!(eng.canvas().value_at(230, 300), DRAWN);

        eng.force_tool(Tool::Erase);
        let out = eng.process(pen(230, 300));
        assert!(out.canvas_mutated);
        assert_eq!(out.preview, Some(DrawOp::Disk { center: Point::new(230, 300), radius: 30 }));
        assert_eq!(eng.canvas().value_at(230, 300), UNTOUCHED);
        // Pixels beyond the eraser radius survive (the stroke's thickness
        // stamp reaches one pixel past its endpoint at x=199).
        assert_eq!(eng.canvas().value_at(199, 300), DRAWN);
    }

    #[test]
    fn tool_switch_mid_shape_abandons_the_anchor() {
        let mut cfg = EngineConfig::default();
        cfg.dwell_frames = 2;
        let mut eng = DrawingEngine::new(cfg);
        eng.force_tool(Tool::Line);
        eng.process(pen(300, 300));
        eng.process(pen(350, 350));

        // Drag (pen still down) onto the Circle slot and dwell until it
        // fires. The pen never goes up, so the line gets no release edge.
        let slot = eng.config().palette.slot_center(Tool::Circle);
        eng.process(pen(slot.x, slot.y));
        let out = eng.process(pen(slot.x, slot.y));
        assert_eq!(out.selected, Some(Tool::Circle));
        assert_eq!(out.tool, Tool::Circle);

        // The abandoned line never reached the canvas.
        let mut committed = false;
        for y in 295..=355 {
            for x in 295..=355 {
                if eng.canvas().value_at(x, y) == DRAWN {
                    committed = true;
                }
            }
        }
        assert!(!committed, "abandoned shape was committed");

        // The new tool began a fresh capture the moment it was selected:
        // releasing right on the slot commits a tiny circle there, not a
        // line back to (300,300).
        eng.process(hover(slot.x, slot.y));
        assert!(!committed_in(&eng, 295, 355, 295, 355));

        // And a normal gesture afterwards anchors wherever the pen drops.
        eng.process(pen(100, 100));
        let out = eng.process(hover(110, 100));
        assert!(out.canvas_mutated);
        assert_eq!(eng.canvas().value_at(110, 100), DRAWN); // radius-10 circle edge
    }

    fn committed_in(eng: &DrawingEngine, x0: i32, x1: i32, y0: i32, y1: i32) -> bool {
        for y in y0..=y1 {
            for x in x0..=x1 {
                if eng.canvas().value_at(x, y) == DRAWN {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn missed_detection_pauses_but_keeps_the_anchor() {
        let mut eng = engine();
        eng.force_tool(Tool::Line);
        eng.process(pen(100, 100));
        // Hand lost for a few frames: nothing commits, nothing is discarded.
        for _ in 0..3 {
            let out = eng.process(None);
            assert!(!out.canvas_mutated);
        }
        let out = eng.process(hover(200, 100));
        assert!(out.canvas_mutated);
        assert_eq!(eng.canvas().value_at(100, 100), DRAWN);
        assert_eq!(eng.canvas().value_at(200, 100), DRAWN);
    }

    #[test]
    fn out_of_bounds_samples_are_clamped() {
        let mut eng = engine();
        eng.force_tool(Tool::Line);
        eng.process(pen(-50, 200));
        let out = eng.process(hover(10_000, 200));
        assert!(out.canvas_mutated);
        assert_eq!(eng.canvas().value_at(0, 200), DRAWN);
        assert_eq!(eng.canvas().value_at(639, 200), DRAWN);
    }

    #[test]
    fn clear_wipes_canvas_and_shape_state() {
        let mut eng = engine();
        eng.force_tool(Tool::Line);
        eng.process(pen(100, 100)); // anchored
        eng.process(pen(150, 150));
        eng.clear();
        assert!(eng.canvas().is_blank());

        // The old anchor is gone: releasing now commits nothing.
        let out = eng.process(hover(150, 150));
        assert!(!out.canvas_mutated);

        // And the next pen-down anchors fresh.
        eng.process(pen(400, 400));
        eng.process(hover(420, 400));
        assert_eq!(eng.canvas().value_at(400, 400), DRAWN);
    }

    #[test]
    fn selection_requires_the_full_dwell() {
        let mut cfg = EngineConfig::default();
        cfg.dwell_frames = 10;
        let mut eng = DrawingEngine::new(cfg);
        let slot = eng.config().palette.slot_center(Tool::Freehand);
        for frame in 1..=9 {
            let out = eng.process(hover(slot.x, slot.y));
            assert_eq!(out.selected, None, "selected early on frame {frame}");
            assert_eq!(out.tool, Tool::None);
        }
        let out = eng.process(hover(slot.x, slot.y));
        assert_eq!(out.selected, Some(Tool::Freehand));
        assert_eq!(eng.current_tool(), Tool::Freehand);
    }
}
