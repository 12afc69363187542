//! Draw on a live video feed with bare-hand gestures.
//!
//! The fingertip is the cursor, a raised-index-finger gesture is the pen,
//! and dwelling over a palette slot picks the tool. The stateful core is
//! [`engine::DrawingEngine`]: a dwell-time tool-selection debouncer, a
//! shape-commit state machine, and a persistent canvas mask composited
//! onto every output frame. Camera capture, the window, and pointer
//! sampling live at the edges and feed the engine one
//! [`types::CursorSample`] per frame.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod raster;
pub mod select;
pub mod tool;
pub mod types;

pub use canvas::Canvas;
pub use config::EngineConfig;
pub use engine::{DrawingEngine, FrameOutput};
pub use error::Error;
pub use raster::DrawOp;
pub use tool::{Palette, Tool};
pub use types::{CursorSample, Point};
