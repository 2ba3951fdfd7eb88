//! Error types for sparkline construction and drawing.

use thiserror::Error;

/// Invalid sparkline construction parameters.
///
/// Returned from [`Sparkline::new`](crate::Sparkline::new); no sparkline is
/// produced when this is raised.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("sparkline width must be greater than zero")]
    ZeroWidth,
    #[error("sparkline height must be greater than zero")]
    ZeroHeight,
    #[error("sparkline must hold at least one sample")]
    ZeroCapacity,
    #[error("max_items {requested} exceeds sample storage of {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
    #[error("y_min {min} must be below y_max {max}")]
    InvertedRange { min: f32, max: f32 },
    #[error("fixed vertical bounds must be finite")]
    NonFiniteBound,
    #[error("bitmap is {actual_width}x{actual_height}, sparkline needs {width}x{height}")]
    SurfaceMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// Failure of a sparkline operation.
///
/// `E` is the error type of the underlying [`Bitmap`](crate::Bitmap).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SparklineError<E> {
    /// Construction parameters were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The drawing surface rejected a write.
    ///
    /// Sample and range state are already committed when this is returned.
    #[error("drawing surface write failed: {0:?}")]
    Draw(E),
}

/// Errors raised by the bitmaps shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    #[error("pixel ({col}, {row}) is outside the bitmap")]
    OutOfBounds { col: u32, row: u32 },
    #[error("bitmap storage holds {actual} pixels, {needed} required")]
    BufferTooSmall { needed: usize, actual: usize },
}
