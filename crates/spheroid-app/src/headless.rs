//! Render frames off-screen and log what was drawn.

use std::time::Instant;

use spheroid_common::Result;
use spheroid_renderer::{FrameStats, FrameTimer, PixelCanvas};
use tracing::{debug, info};

use crate::app::App;

/// Totals for a headless run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadlessSummary {
    pub frames: u32,
    pub drawn: usize,
    pub culled: usize,
    pub avg_frame_ms: f64,
}

/// Render `frames` frames at the configured display size.
///
/// Time advances by exactly one frame interval per frame, so runs are
/// reproducible regardless of how fast the machine renders.
pub fn run(app: &mut App, frames: u32) -> Result<HeadlessSummary> {
    let display = &app.config().display;
    let (width, height, fps) = (display.width, display.height, display.fps);
    let mut canvas = PixelCanvas::new(width, height);
    let mut timer = FrameTimer::new(fps);
    let step = timer.target().as_secs_f64();
    info!(frames, width, height, "headless render started");

    let mut summary = HeadlessSummary::default();
    for frame in 0..frames {
        let started = Instant::now();
        let stats: FrameStats = app.render(&mut canvas)?;
        timer.record(started.elapsed());
        debug!(frame, total = stats.total, culled = stats.culled, drawn = stats.drawn, "frame");

        summary.frames += 1;
        summary.drawn += stats.drawn;
        summary.culled += stats.culled;
        app.advance(step);
    }
    summary.avg_frame_ms = timer.frame_time_ms();

    info!(
        frames = summary.frames,
        drawn = summary.drawn,
        culled = summary.culled,
        avg_ms = summary.avg_frame_ms,
        "headless render finished"
    );
    Ok(summary)
}
