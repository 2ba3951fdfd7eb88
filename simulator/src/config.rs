//! Display and demo layout constants.
//!
//! Mirrors the classic three-chart sparkline demo on a 320x240 panel:
//!
//! | Chart | Size | Position | Items | Range | Data |
//! |-------|------|----------|-------|-------|------|
//! | Fixed | 50x50 | (10, 10) | 40 | -1 .. 1.25 | 0 .. 1 |
//! | Clipping | 100x100 | (150, 10) | 10 | 0 .. 1 | -1 .. 2 |
//! | Autorange | 290x100 | (0, 120) | 10 | auto | 0 .. 1, then 0 .. 10 |

use core::ops::Range;

use embedded_graphics::pixelcolor::Rgb565;
use sparkline_common::colors::{BLUE, MAGENTA, SPRING_GREEN, WHITE};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341-class panel in landscape).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Baseline chart edge length in pixels.
pub const CHART_SIZE: u32 = 50;

/// Sample storage per chart; the largest `max_items` of the three charts.
pub const CHART_CAPACITY: usize = 40;

/// Maximum number of layers in the display group.
pub const GROUP_SIZE: usize = 20;

/// Maximum characters in a range label.
pub const LABEL_LEN: usize = 20;

// =============================================================================
// Chart 1: fixed range, all data visible
// =============================================================================

pub const FIXED_X: i32 = 10;
pub const FIXED_Y: i32 = 10;
pub const FIXED_WIDTH: u32 = CHART_SIZE;
pub const FIXED_HEIGHT: u32 = CHART_SIZE;
pub const FIXED_ITEMS: usize = 40;
pub const FIXED_Y_MIN: f32 = -1.0;
pub const FIXED_Y_MAX: f32 = 1.25;
pub const FIXED_LINE: Rgb565 = WHITE;
pub const FIXED_LABEL: Rgb565 = WHITE;
pub const FIXED_SAMPLES: Range<f32> = 0.0..1.0;

// =============================================================================
// Chart 2: fixed range, data overshoots and gets clipped
// =============================================================================

pub const CLIPPING_X: i32 = 150;
pub const CLIPPING_Y: i32 = 10;
pub const CLIPPING_WIDTH: u32 = CHART_SIZE * 2;
pub const CLIPPING_HEIGHT: u32 = CHART_SIZE * 2;
pub const CLIPPING_ITEMS: usize = 10;
pub const CLIPPING_Y_MIN: f32 = 0.0;
pub const CLIPPING_Y_MAX: f32 = 1.0;
pub const CLIPPING_LINE: Rgb565 = MAGENTA;
pub const CLIPPING_BACKDROP: Rgb565 = BLUE;
pub const CLIPPING_SAMPLES: Range<f32> = -1.0..2.0;

// =============================================================================
// Chart 3: both edges autoranged
// =============================================================================

pub const AUTORANGE_X: i32 = 0;
pub const AUTORANGE_Y: i32 = 120;
pub const AUTORANGE_WIDTH: u32 = SCREEN_WIDTH - 30;
pub const AUTORANGE_HEIGHT: u32 = CHART_SIZE * 2;
pub const AUTORANGE_ITEMS: usize = 10;
pub const AUTORANGE_LINE: Rgb565 = WHITE;
pub const AUTORANGE_BACKDROP: Rgb565 = SPRING_GREEN;
pub const AUTORANGE_LABEL: Rgb565 = SPRING_GREEN;
pub const AUTORANGE_SMALL_SAMPLES: Range<f32> = 0.0..1.0;
pub const AUTORANGE_LARGE_SAMPLES: Range<f32> = 0.0..10.0;

/// Iterations drawing from the small range before switching to the large one.
pub const AUTORANGE_SMALL_ITERATIONS: u32 = 15;

/// Iteration counter wraps back to zero once it exceeds this value.
pub const AUTORANGE_CYCLE: u32 = 30;
