//! Sparkline engine: bounded samples, vertical range, and polyline redraw.
//!
//! # Update Cycle
//!
//! Every [`Sparkline::add_value`] runs the same pipeline:
//!
//! 1. Append the sample, evicting the oldest at `max_items`
//! 2. Resolve the effective bounds (autoranged edges rescan the buffer)
//! 3. Clear the bitmap to [`BACKGROUND_INDEX`]
//! 4. Draw a line between each pair of neighbouring in-range samples
//!
//! Eviction shifts every sample one column left and autoranging can move every
//! row, so the whole polyline is redrawn on each call.
//!
//! # Caller Contract
//!
//! The engine only writes its own bitmap. Suspending display refresh around a
//! burst of updates, and pushing the bitmap to the screen afterwards, is up to
//! the caller.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::bitmap::{Bitmap, ColorIndex, IndexCanvas};
use crate::config::{BACKGROUND_INDEX, SparklineConfig};
use crate::error::{ConfigError, SparklineError};
use crate::geometry::Projection;
use crate::palette::Palette;
use crate::range::{Extent, VerticalRange};
use crate::samples::SampleBuffer;
use crate::widget::Tile;

/// Whether the sparkline holds any samples.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SparklineState {
    /// No samples; bounds are the fallback values.
    Empty,
    /// At least one sample buffered.
    Populated,
}

/// Scrolling line chart drawn into an indexed bitmap.
///
/// `N` is the sample storage capacity; the configured `max_items` may be
/// smaller. `B` is the drawing surface, owned or borrowed (`&mut B` is also a
/// [`Bitmap`]).
pub struct Sparkline<B: Bitmap, const N: usize> {
    samples: SampleBuffer<N>,
    range: VerticalRange,
    extent: Extent,
    size: Size,
    origin: Point,
    color: u8,
    bitmap: B,
}

impl<B: Bitmap, const N: usize> Sparkline<B, N> {
    /// Create a sparkline drawing into `bitmap`.
    ///
    /// The bitmap must match the configured size; it is cleared to the
    /// background index.
    pub fn new(
        config: SparklineConfig,
        mut bitmap: B,
    ) -> Result<Self, SparklineError<B::Error>> {
        let range = config.validate(N)?;
        let size = Size::new(config.width, config.height);
        let actual = bitmap.size();
        if actual != size {
            return Err(ConfigError::SurfaceMismatch {
                width: size.width,
                height: size.height,
                actual_width: actual.width,
                actual_height: actual.height,
            }
            .into());
        }
        let samples = SampleBuffer::new(config.max_items)?;

        bitmap.clear_region(BACKGROUND_INDEX).map_err(SparklineError::Draw)?;

        debug!(
            "sparkline {}x{} at ({}, {}) created, max_items {}",
            size.width, size.height, config.x, config.y, config.max_items
        );

        Ok(Self {
            samples,
            range,
            extent: range.fallback(),
            size,
            origin: Point::new(config.x, config.y),
            color: config.color,
            bitmap,
        })
    }

    /// Add a sample and redraw.
    ///
    /// Any value is accepted; values outside the effective range are clipped
    /// when drawing. On a draw error the sample and bounds are still updated.
    pub fn add_value(
        &mut self,
        value: f32,
    ) -> Result<(), SparklineError<B::Error>> {
        if self.samples.push(value).is_some() {
            trace!("sparkline evicted oldest sample");
        }
        self.update_extent();
        trace!(
            "sparkline add {} -> len {}, bounds {}..{}",
            value,
            self.samples.len(),
            self.extent.bottom,
            self.extent.top
        );
        self.redraw()
    }

    /// Redraw the polyline from the current samples.
    ///
    /// Used to retry after a draw error.
    pub fn redraw(&mut self) -> Result<(), SparklineError<B::Error>> {
        let projection = self.projection();
        let result = draw_polyline(&mut self.bitmap, &self.samples, projection, self.color);
        if result.is_err() {
            warn!("sparkline redraw failed, {} samples kept", self.samples.len());
        }
        result.map_err(SparklineError::Draw)
    }

    /// Drop all samples and clear the bitmap.
    ///
    /// Bounds return to the fallback values.
    pub fn clear_values(&mut self) -> Result<(), SparklineError<B::Error>> {
        self.samples.clear();
        self.extent = self.range.fallback();
        self.bitmap.clear_region(BACKGROUND_INDEX).map_err(SparklineError::Draw)
    }

    /// Change the line color index. Applies from the next redraw.
    pub fn set_color(
        &mut self,
        color: u8,
    ) {
        self.color = color;
    }

    fn update_extent(&mut self) { self.extent = self.range.extent(self.samples.iter()); }

    /// Current sample-to-pixel mapping.
    pub fn projection(&self) -> Projection { Projection::new(self.size, self.samples.limit(), self.extent) }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Effective upper bound (fixed or autoranged).
    #[inline]
    pub fn y_top(&self) -> f32 { self.extent.top }

    /// Effective lower bound (fixed or autoranged).
    #[inline]
    pub fn y_bottom(&self) -> f32 { self.extent.bottom }

    /// Effective bounds.
    #[inline]
    pub const fn extent(&self) -> Extent { self.extent }

    /// Configured range policy.
    #[inline]
    pub const fn range(&self) -> VerticalRange { self.range }

    /// Drawing region width.
    #[inline]
    pub const fn width(&self) -> u32 { self.size.width }

    /// Drawing region height.
    #[inline]
    pub const fn height(&self) -> u32 { self.size.height }

    /// Left edge on the display.
    #[inline]
    pub const fn x(&self) -> i32 { self.origin.x }

    /// Top edge on the display.
    #[inline]
    pub const fn y(&self) -> i32 { self.origin.y }

    /// Maximum number of samples shown.
    #[inline]
    pub const fn max_items(&self) -> usize { self.samples.limit() }

    /// Line color index.
    #[inline]
    pub const fn color(&self) -> u8 { self.color }

    /// Number of buffered samples.
    #[inline]
    pub fn len(&self) -> usize { self.samples.len() }

    /// Check if no samples are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Empty or populated.
    pub fn state(&self) -> SparklineState {
        if self.samples.is_empty() {
            SparklineState::Empty
        } else {
            SparklineState::Populated
        }
    }

    /// Buffered samples, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ { self.samples.iter() }

    /// Pixel of the buffered sample at `index`, or `None` if clipped or absent.
    pub fn point(
        &self,
        index: usize,
    ) -> Option<Point> {
        self.projection().point(index, self.samples.get(index)?)
    }

    /// The drawing surface.
    #[inline]
    pub const fn bitmap(&self) -> &B { &self.bitmap }

    /// Mutable access to the drawing surface.
    ///
    /// Pixels written here are overwritten by the next redraw.
    #[inline]
    pub fn bitmap_mut(&mut self) -> &mut B { &mut self.bitmap }

    /// Give the drawing surface back.
    pub fn into_bitmap(self) -> B { self.bitmap }

    /// Widget placing the bitmap at the sparkline origin, colored by `palette`.
    pub const fn tile<'a, const P: usize>(
        &'a self,
        palette: &'a Palette<P>,
    ) -> Tile<'a, B, P> {
        Tile::new(&self.bitmap, palette, self.origin)
    }
}

/// Clear `bitmap` and draw a line between each pair of neighbouring in-range
/// samples.
fn draw_polyline<B: Bitmap, const N: usize>(
    bitmap: &mut B,
    samples: &SampleBuffer<N>,
    projection: Projection,
    color: u8,
) -> Result<(), B::Error> {
    bitmap.clear_region(BACKGROUND_INDEX)?;

    let style = PrimitiveStyle::with_stroke(ColorIndex(color), 1);
    let mut canvas = IndexCanvas::new(bitmap);
    let mut prev: Option<Point> = None;
    for (index, value) in samples.iter().enumerate() {
        let point = projection.point(index, value);
        if let (Some(start), Some(end)) = (prev, point) {
            Line::new(start, end).into_styled(style).draw(&mut canvas)?;
        }
        prev = point;
    }
    Ok(())
}

impl<B: Bitmap, const N: usize> Dimensions for Sparkline<B, N> {
    fn bounding_box(&self) -> Rectangle { Rectangle::new(self.origin, self.size) }
}

// =============================================================================
// Tests
// =============================================================================
