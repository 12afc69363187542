// What you SEE:
// • Live (mirrored) camera is always the base image.
// • Hold Left Mouse: the pen is down — draw with the current tool.
// • Hover a palette slot to select a tool (a circle counts down the dwell).
// • C clears the canvas. ESC quits.

use std::env;
use std::time::{Duration, Instant};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use air_sketch::camera::CameraCapture;
use air_sketch::config::EngineConfig;
use air_sketch::draw::{
    Drawer, draw_crosshair, draw_indicator, draw_palette, draw_text_5x7, preview_color, render_op,
};
use air_sketch::engine::DrawingEngine;
use air_sketch::error::Error;
use air_sketch::types::FrameBuffer;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    /* --- Settings ---
       Optional JSON config path as the first argument; defaults otherwise. */
    let config = match env::args().nth(1) {
        Some(path) => EngineConfig::from_file(&path)?,
        None => EngineConfig::default(),
    };

    /* --- Camera + window setup ---
       Visual: window opens with the mirrored live camera feed. */
    let mut cam = CameraCapture::new(0, config.width as u32, config.height as u32, true)?;
    let (w, h) = cam.resolution();
    let (w, h) = (w as usize, h as usize);
    let mut drawer = Drawer::new("Air Sketch — Gesture Drawing", w, h)?;

    // The engine's frame size must match what the camera actually delivers.
    let config = EngineConfig { width: w, height: h, ..config };
    let mut engine = DrawingEngine::new(config);
    info!(width = w, height = h, "air-sketch started");

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer { width: w, height: h, pixels: vec![0u32; w * h] };

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Grab a fresh live frame. Visual: the raw base we start from. */
        let live = cam.next_frame()?;
        screen.pixels.copy_from_slice(&live.pixels);

        /* 2) Inputs */
        if drawer.c_pressed_once() {
            engine.clear(); // visual: every committed stroke disappears
        }

        /* 3) One engine step: dwell selection, then the shape machine. */
        let sample = drawer.cursor_sample();
        let out = engine.process(sample);

        /* 4) Composite the persistent canvas onto the live frame.
           Visual: everything ever committed stays visible, in black ink. */
        engine.canvas().composite(&mut screen, 0x00000000);

        /* 5) Transient overlays for this frame only. */
        if let Some(op) = &out.preview {
            let thickness = engine.config().stroke_thickness;
            render_op(&mut screen, op, preview_color(out.tool), thickness);
        }
        draw_palette(&mut screen, &engine.config().palette, out.tool);
        if let Some(ind) = &out.indicator {
            draw_indicator(&mut screen, ind);
        }
        if let Some(s) = sample {
            let color = if s.pen_active { 0x0000FF00 } else { 0x00FFCC33 };
            draw_crosshair(&mut screen, s.x, s.y, 12, color);
        }

        /* 6) HUD: current tool + FPS. */
        let hud = format!("TOOL: {} | C: CLEAR | {}", out.tool.label(), hud_fps_text);
        draw_text_5x7(&mut screen, 8, h as i32 - 16, &hud, 0x00FFFFFF);

        /* 7) Present to the window. */
        drawer.present(&screen)?;

        /* 8) FPS counter, recomputed once per second. */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            debug!(fps, "frame rate");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
