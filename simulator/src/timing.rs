//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time. The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(10);

/// Frames between frame-time reports in the log.
pub const REPORT_INTERVAL: u64 = 500;
