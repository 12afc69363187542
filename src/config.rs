// Engine settings, loadable from a JSON file.
//
// Every field has a default so a partial config file only overrides what it
// names. The defaults match the classic 640x480 layout.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tool::Palette;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Frame width in pixels; fixed for the process lifetime.
    pub width: usize,
    /// Frame height in pixels; fixed for the process lifetime.
    pub height: usize,
    /// Consecutive frames the cursor must dwell on one palette slot before
    /// the tool changes. 24 frames is roughly 0.8 s at 30 FPS.
    pub dwell_frames: u32,
    /// Radius of the feedback circle shown while a dwell is counting.
    pub indicator_radius: i32,
    /// Stroke width for line/rectangle/circle/freehand, in pixels.
    pub stroke_thickness: i32,
    /// Radius of the eraser footprint, in pixels.
    pub eraser_radius: i32,
    /// Tool strip layout.
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            dwell_frames: 24,
            indicator_radius: 25,
            stroke_thickness: 4,
            eraser_radius: 30,
            palette: Palette::default(),
        }
    }
}

impl EngineConfig {
    /// Load settings from a JSON file; missing fields fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
