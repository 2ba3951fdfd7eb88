//! Frame timing statistics for the simulator loop.

use std::time::{Duration, Instant};

use log::info;

/// Frame timing statistics.
pub struct FrameStats {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub update_time_us: u32,
    pub draw_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    pub total_frames: u64,

    start_time: Instant,
}

impl FrameStats {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            update_time_us: 0,
            draw_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one frame: chart updates, compositing and the total
    /// before sleeping.
    pub fn record_frame(
        &mut self,
        update_time: Duration,
        draw_time: Duration,
        total_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.update_time_us = update_time.as_micros() as u32;
        self.draw_time_us = draw_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Smoothed frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Frames per second since creation, including sleep time.
    pub fn fps(&self) -> f32 {
        let secs = self.uptime().as_secs_f32();
        if secs > 0.0 { self.total_frames as f32 / secs } else { 0.0 }
    }

    /// Log a one-line summary.
    pub fn report(&self) {
        if self.total_frames == 0 {
            info!("no frames rendered");
            return;
        }
        info!(
            "frames={} fps={:.1} frame_us avg={} min={} max={} last: total={} update={} draw={}",
            self.total_frames,
            self.fps(),
            self.frame_time_avg_us(),
            self.frame_time_min_us,
            self.frame_time_max_us,
            self.frame_time_us,
            self.update_time_us,
            self.draw_time_us,
        );
    }
}

impl Default for FrameStats {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
