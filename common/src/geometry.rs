//! Sample-to-pixel projection.
//!
//! Columns interpolate the buffer index over `[0, max_items - 1]` onto
//! `[0, width - 1]`. Rows interpolate the value over `[bottom, top]` onto
//! `[height - 1, 0]` (row 0 is the top of the bitmap). Both truncate toward
//! zero, which is a floor since every projected offset is non-negative.
//!
//! Values outside the extent are clipped (no point), never clamped to an edge.
//! A zero span puts every in-range value on the middle row. Row math runs in
//! `f64` so extents wider than `f32::MAX` still interpolate.

use embedded_graphics::prelude::*;

use crate::range::Extent;

/// Mapping from (buffer index, value) to a bitmap pixel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Projection {
    size: Size,
    max_items: usize,
    extent: Extent,
}

impl Projection {
    /// Project onto a bitmap of `size` holding up to `max_items` samples.
    pub const fn new(
        size: Size,
        max_items: usize,
        extent: Extent,
    ) -> Self {
        Self {
            size,
            max_items,
            extent,
        }
    }

    /// Effective vertical bounds in use.
    #[inline]
    pub const fn extent(&self) -> Extent { self.extent }

    /// Pixel column of the sample at buffer `index`.
    pub fn column(
        &self,
        index: usize,
    ) -> u32 {
        let last_col = u64::from(self.size.width.saturating_sub(1));
        if self.max_items <= 1 {
            return 0;
        }
        let col = index as u64 * last_col / (self.max_items as u64 - 1);
        col.min(last_col) as u32
    }

    /// Pixel row of `value`, or `None` if the value is clipped.
    pub fn row(
        &self,
        value: f32,
    ) -> Option<u32> {
        if !self.extent.contains(value) {
            return None;
        }
        let last_row = self.size.height.saturating_sub(1);
        let top = f64::from(self.extent.top);
        let span = top - f64::from(self.extent.bottom);
        if span <= 0.0 {
            return Some(last_row / 2);
        }
        let offset = (top - f64::from(value)) / span * f64::from(last_row);
        Some((offset as u32).min(last_row))
    }

    /// Pixel for the sample `value` at buffer `index`, or `None` if clipped.
    pub fn point(
        &self,
        index: usize,
        value: f32,
    ) -> Option<Point> {
        let row = self.row(value)?;
        Some(Point::new(self.column(index) as i32, row as i32))
    }
}

// =============================================================================
// Tests
// =============================================================================
