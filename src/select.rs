// Dwell-based tool selection.
//
// A fingertip sweeping across the palette strip must not change tools; only
// holding still over one slot does. The selector debounces by counting
// consecutive frames on the same candidate and fires once when the streak
// reaches the threshold. Frame counting (rather than wall-clock time) keeps
// the behavior deterministic under test; the trade-off is that perceived
// dwell time scales with frame rate.

use crate::tool::{Palette, Tool};
use crate::types::Point;

/// Feedback circle shown over the candidate slot while the streak builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    pub center: Point,
    pub radius: i32,
}

/// Per-frame selector result. `selected` is set on at most one frame per
/// completed dwell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorOutput {
    pub selected: Option<Tool>,
    pub indicator: Option<Indicator>,
}

pub struct DwellSelector {
    threshold: u32,
    indicator_radius: i32,
    candidate: Option<Tool>,
    streak: u32,
}

impl DwellSelector {
    /// `threshold` is the number of consecutive frames the cursor must sit
    /// on one slot. Floored at 2: a selection must persist past the frame
    /// the candidate is first observed on.
    pub fn new(threshold: u32, indicator_radius: i32) -> Self {
        Self {
            threshold: threshold.max(2),
            indicator_radius,
            candidate: None,
            streak: 0,
        }
    }

    /// Feed one cursor position. Pen state is irrelevant here; dwell
    /// selection is pure pointer hover.
    pub fn observe(&mut self, position: Point, palette: &Palette) -> SelectorOutput {
        let Some(tool) = palette.tool_at(position.x, position.y) else {
            // Left the strip (or an unmapped gap): all progress is discarded.
            self.reset();
            return SelectorOutput::default();
        };

        if self.candidate == Some(tool) {
            self.streak += 1;
        } else {
            // New candidate: restart the count, no credit carries over.
            self.candidate = Some(tool);
            self.streak = 1;
        }

        let indicator = Indicator {
            center: palette.slot_center(tool),
            radius: self.indicator_radius,
        };

        if self.streak >= self.threshold {
            self.reset();
            return SelectorOutput { selected: Some(tool), indicator: Some(indicator) };
        }

        SelectorOutput { selected: None, indicator: Some(indicator) }
    }

    /// Discard any accumulated dwell progress. Called on a missing sample
    /// (no hand this frame), which counts as leaving the strip.
    pub fn reset(&mut self) {
        self.candidate = None;
        self.streak = 0;
    }
}
