//! Scrolling sparkline engine for small indexed-color displays.
//!
//! This crate contains the platform-agnostic sparkline pipeline shared between
//! the desktop simulator and embedded targets:
//!
//! - [`samples`]: Bounded FIFO of samples (oldest evicted first)
//! - [`range`]: Fixed or autoranging vertical bounds
//! - [`geometry`]: Sample-to-pixel projection and clipping
//! - [`bitmap`]: Indexed-color drawing surfaces
//! - [`palette`]: Color index to RGB565 mapping
//! - [`widget`]: Rendering bitmaps onto any RGB565 `DrawTarget`
//! - [`sparkline`]: The engine tying the above together
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and never allocates. Sample storage is sized by a
//! const generic and the drawing surface is supplied by the caller.
//!
//! # Testing
//!
//! Tests run on the host with `std` enabled (via `cfg_attr`):
//! ```bash
//! cargo test -p sparkline-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod fmt;

pub mod bitmap;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod range;
pub mod samples;
pub mod sparkline;
pub mod widget;

// Re-export commonly used items
pub use bitmap::{Bitmap, BitmapView, ColorIndex, IndexCanvas, IndexedBitmap};
pub use config::{BACKGROUND_INDEX, LINE_INDEX, SparklineConfig};
pub use error::{BitmapError, ConfigError, SparklineError};
pub use palette::Palette;
pub use range::{Bound, Extent, VerticalRange};
pub use sparkline::{Sparkline, SparklineState};
pub use widget::{SolidTile, Tile, Widget};
