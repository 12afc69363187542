// Opens the default camera and converts frames into a buffer suitable for
// the window. Frames come back mirrored (flipped horizontally) so moving
// your hand right moves the cursor right, like a mirror.

use crate::error::Error;
use crate::types::FrameBuffer;

use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

/// A small wrapper around nokhwa::Camera so the main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
    mirror: bool,
}

impl CameraCapture {
    /// Open camera `index` at a target resolution (falls back if not exact).
    pub fn new(index: u32, width: u32, height: u32, mirror: bool) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,
        );
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("open stream: {e}")))?;

        // The stream may have chosen a slightly different resolution.
        let actual = cam.resolution();

        Ok(Self {
            cam,
            width: actual.width(),
            height: actual.height(),
            mirror,
        })
    }

    /// Grab one frame and convert it to 0x00RRGGBB pixels, mirrored if
    /// requested. Blocks until the camera has a new frame.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("fetch frame: {e}")))?;

        let rgb_img = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("decode RGB: {e}")))?;

        let (w, h) = rgb_img.dimensions();
        let (w, h) = (w as usize, h as usize);
        let mut out = vec![0u32; w * h];
        for (x, y, pixel) in rgb_img.enumerate_pixels() {
            let r = pixel[0] as u32;
            let g = pixel[1] as u32;
            let b = pixel[2] as u32;
            let x = if self.mirror { w - 1 - x as usize } else { x as usize };
            out[y as usize * w + x] = (r << 16) | (g << 8) | b;
        }

        Ok(FrameBuffer { width: w, height: h, pixels: out })
    }

    /// The resolution the camera is actually delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
