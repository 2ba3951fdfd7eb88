//! Sparkline construction parameters.
//!
//! [`SparklineConfig`] mirrors the widget's constructor arguments: size,
//! sample capacity, vertical bounds, origin and line color index. Defaults
//! match the common case of a fully autoranging chart at the origin.

use crate::error::ConfigError;
use crate::range::{Bound, VerticalRange};

/// Color index left in every bitmap pixel the line does not cover.
///
/// Palettes treat this index as transparent unless told otherwise.
pub const BACKGROUND_INDEX: u8 = 0;

/// Default color index for the polyline.
pub const LINE_INDEX: u8 = 1;

/// Construction parameters for a [`Sparkline`](crate::Sparkline).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklineConfig {
    /// Drawing region width in pixels.
    pub width: u32,
    /// Drawing region height in pixels.
    pub height: u32,
    /// Number of samples shown before the oldest scrolls off.
    pub max_items: usize,
    /// Lower vertical bound.
    pub y_min: Bound,
    /// Upper vertical bound.
    pub y_max: Bound,
    /// Left edge of the region on the display.
    pub x: i32,
    /// Top edge of the region on the display.
    pub y: i32,
    /// Color index the polyline is drawn with.
    pub color: u8,
}

impl SparklineConfig {
    /// Autoranging sparkline at the origin drawn with [`LINE_INDEX`].
    pub const fn new(
        width: u32,
        height: u32,
        max_items: usize,
    ) -> Self {
        Self {
            width,
            height,
            max_items,
            y_min: Bound::Auto,
            y_max: Bound::Auto,
            x: 0,
            y: 0,
            color: LINE_INDEX,
        }
    }

    /// Set both vertical bounds.
    pub const fn with_range(
        mut self,
        y_min: Bound,
        y_max: Bound,
    ) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    /// Place the region's top-left corner at (`x`, `y`).
    pub const fn at(
        mut self,
        x: i32,
        y: i32,
    ) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the polyline color index.
    pub const fn with_color(
        mut self,
        color: u8,
    ) -> Self {
        self.color = color;
        self
    }

    /// Check geometry and capacity against `capacity` sample slots and build
    /// the vertical range.
    pub fn validate(
        &self,
        capacity: usize,
    ) -> Result<VerticalRange, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.max_items == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_items > capacity {
            return Err(ConfigError::CapacityExceeded {
                requested: self.max_items,
                capacity,
            });
        }
        VerticalRange::new(self.y_min, self.y_max)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SparklineConfig::new(50, 50, 40);
        assert_eq!(config.y_min, Bound::Auto);
        assert_eq!(config.y_max, Bound::Auto);
        assert_eq!((config.x, config.y), (0, 0));
        assert_eq!(config.color, LINE_INDEX);
    }

    #[test]
    fn test_builder_chain() {
        let config = SparklineConfig::new(100, 100, 10)
            .with_range(Bound::Fixed(0.0), Bound::Fixed(1.0))
            .at(150, 10)
            .with_color(2);
        assert_eq!(config.y_min, Bound::Fixed(0.0));
        assert_eq!(config.y_max, Bound::Fixed(1.0));
        assert_eq!((config.x, config.y), (150, 10));
        assert_eq!(config.color, 2);
    }

    #[test]
    fn test_validate_rejects_zero_geometry() {
        assert_eq!(SparklineConfig::new(0, 10, 5).validate(8), Err(ConfigError::ZeroWidth));
        assert_eq!(SparklineConfig::new(10, 0, 5).validate(8), Err(ConfigError::ZeroHeight));
        assert_eq!(SparklineConfig::new(10, 10, 0).validate(8), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_validate_rejects_capacity_overflow() {
        assert_eq!(
            SparklineConfig::new(10, 10, 9).validate(8),
            Err(ConfigError::CapacityExceeded {
                requested: 9,
                capacity: 8
            })
        );
    }

    #[test]
    fn test_validate_builds_range() {
        let range = SparklineConfig::new(10, 10, 8)
            .with_range(Bound::Fixed(-1.0), Bound::Auto)
            .validate(8)
            .unwrap();
        assert_eq!(range.min(), Bound::Fixed(-1.0));
        assert_eq!(range.max(), Bound::Auto);
    }
}
