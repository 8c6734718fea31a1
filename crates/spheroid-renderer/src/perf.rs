//! Frame pacing and rolling frame-time statistics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Samples kept for the rolling averages.
const WINDOW: usize = 120;

/// Paces a fixed-rate frame loop and tracks how long frames take.
pub struct FrameTimer {
    target: Duration,
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    frames: u64,
}

impl FrameTimer {
    /// Timer aiming for `fps` frames per second. 0 is treated as 1.
    pub fn new(fps: u32) -> Self {
        Self {
            target: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            frame_times: VecDeque::with_capacity(WINDOW),
            last_frame: Instant::now(),
            frames: 0,
        }
    }

    /// Target duration of one frame.
    pub fn target(&self) -> Duration {
        self.target
    }

    /// Mark a frame boundary and return the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.record(dt);
        dt
    }

    /// Add one frame duration to the window.
    pub fn record(&mut self, dt: Duration) {
        self.frames += 1;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }
    }

    /// Time left in the current frame's budget, if any.
    pub fn remaining(&self) -> Duration {
        self.target.saturating_sub(self.last_frame.elapsed())
    }

    /// Sleep out the rest of the current frame.
    pub fn wait(&self) {
        let left = self.remaining();
        if !left.is_zero() {
            std::thread::sleep(left);
        }
    }

    /// Average frames per second over the window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(Duration::as_secs_f64).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(Duration::as_secs_f64).sum();
        total / self.frame_times.len() as f64 * 1000.0
    }

    /// Frames recorded since creation.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
