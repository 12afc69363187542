// Errors from the I/O shell. Every variant states *where* things went
// wrong; the engine itself has no failure modes (it clamps and defaults).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),

    #[error("camera init error: {0}")]
    CameraInit(String),

    #[error("camera frame error: {0}")]
    CameraFrame(String),

    #[error("config read error: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
