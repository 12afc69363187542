// Drawing tools and the on-screen palette that selects them.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// The closed set of drawing tools. Exactly one is current at any time;
/// `None` draws nothing. Adding a tool is a compile-checked match arm, not
/// a string comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    None,
    Line,
    Rectangle,
    Freehand,
    Circle,
    Erase,
}

impl Tool {
    /// Short label for the palette strip and HUD (5x7 font, so keep it tiny).
    pub fn label(self) -> &'static str {
        match self {
            Tool::None => "NONE",
            Tool::Line => "LINE",
            Tool::Rectangle => "RECT",
            Tool::Freehand => "DRAW",
            Tool::Circle => "CIRC",
            Tool::Erase => "ERAS",
        }
    }
}

/// Static layout of the tool strip: a row of equally sized slots starting at
/// `origin`. Pure configuration; hit-testing lives in `tool_at`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub origin: Point,
    pub slot_width: i32,
    pub slot_height: i32,
    pub tools: Vec<Tool>,
}

impl Default for Palette {
    fn default() -> Self {
        // Matches the classic layout: five 50x50 slots along the top edge,
        // starting 150 px in from the left.
        Self {
            origin: Point::new(150, 0),
            slot_width: 50,
            slot_height: 50,
            tools: vec![Tool::Line, Tool::Rectangle, Tool::Freehand, Tool::Circle, Tool::Erase],
        }
    }
}

impl Palette {
    /// Number of slots in the strip.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// True when (x, y) falls inside the strip's bounding rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let w = self.slot_width * self.tools.len() as i32;
        x >= self.origin.x
            && x < self.origin.x + w
            && y >= self.origin.y
            && y < self.origin.y + self.slot_height
    }

    /// The tool under (x, y), or `None` outside the strip. The vertical
    /// bound is checked first; a position past the last slot maps to no tool.
    pub fn tool_at(&self, x: i32, y: i32) -> Option<Tool> {
        if !self.contains(x, y) {
            return None;
        }
        let slot = ((x - self.origin.x) / self.slot_width) as usize;
        self.tools.get(slot).copied()
    }

    /// Top-left corner of slot `index`.
    pub fn slot_origin(&self, index: usize) -> Point {
        Point::new(
            self.origin.x + self.slot_width * index as i32,
            self.origin.y,
        )
    }

    /// Center of the slot holding `tool`, for the dwell indicator. Falls
    /// back to the strip origin if the tool is not in the strip.
    pub fn slot_center(&self, tool: Tool) -> Point {
        match self.tools.iter().position(|&t| t == tool) {
            Some(i) => {
                let o = self.slot_origin(i);
                Point::new(o.x + self.slot_width / 2, o.y + self.slot_height / 2)
            }
            None => self.origin,
        }
    }
}
