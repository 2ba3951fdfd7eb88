//! Vertical range policy: fixed or autoranging bounds.
//!
//! Each edge of the y-axis is independently either a fixed value or
//! autoranged from the samples currently buffered. [`VerticalRange::extent`]
//! resolves the policy against the samples into the effective bounds used for
//! projection and clipping.
//!
//! # Empty Buffer Fallback
//!
//! With no finite samples to range over, autoranged edges fall back to:
//!
//! | y_min | y_max | Effective bounds |
//! |-------|-------|------------------|
//! | Auto  | Auto  | `0.0 ..= 1.0` |
//! | Fixed(a) | Auto | `a ..= a + 1.0` |
//! | Auto | Fixed(b) | `b - 1.0 ..= b` |
//! | Fixed(a) | Fixed(b) | `a ..= b` |
//!
//! Non-finite samples (NaN, infinities) never take part in autoranging.

use crate::error::ConfigError;

/// Default effective bounds when autoranging over an empty buffer.
pub const FALLBACK_BOTTOM: f32 = 0.0;
pub const FALLBACK_TOP: f32 = 1.0;

/// One edge of the vertical range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bound {
    /// Edge follows the buffered samples.
    #[default]
    Auto,
    /// Edge pinned to a value.
    Fixed(f32),
}

impl Bound {
    /// Whether this edge is autoranged.
    #[inline]
    pub const fn is_auto(self) -> bool { matches!(self, Self::Auto) }

    /// The pinned value, if fixed.
    #[inline]
    pub const fn fixed(self) -> Option<f32> {
        match self {
            Self::Auto => None,
            Self::Fixed(v) => Some(v),
        }
    }
}

impl From<Option<f32>> for Bound {
    fn from(value: Option<f32>) -> Self { value.map_or(Self::Auto, Self::Fixed) }
}

/// Effective vertical bounds after resolving the range policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Extent {
    /// Effective lower bound.
    pub bottom: f32,
    /// Effective upper bound.
    pub top: f32,
}

impl Extent {
    /// Create an extent from its bounds.
    pub const fn new(
        bottom: f32,
        top: f32,
    ) -> Self {
        Self { bottom, top }
    }

    /// Distance between the bounds.
    #[inline]
    pub fn span(&self) -> f32 { self.top - self.bottom }

    /// Whether `value` is drawable: finite and inside `bottom ..= top`.
    #[inline]
    pub fn contains(
        &self,
        value: f32,
    ) -> bool {
        value.is_finite() && value >= self.bottom && value <= self.top
    }
}

/// Pair of vertical bounds, each fixed or autoranging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VerticalRange {
    min: Bound,
    max: Bound,
}

impl VerticalRange {
    /// Fully autoranging range.
    pub const AUTO: Self = Self {
        min: Bound::Auto,
        max: Bound::Auto,
    };

    /// Validate and build a range.
    ///
    /// Fixed bounds must be finite, and when both are fixed `min < max`.
    pub fn new(
        min: Bound,
        max: Bound,
    ) -> Result<Self, ConfigError> {
        let finite = |b: Bound| b.fixed().is_none_or(f32::is_finite);
        if !finite(min) || !finite(max) {
            return Err(ConfigError::NonFiniteBound);
        }
        if let (Bound::Fixed(lo), Bound::Fixed(hi)) = (min, max)
            && lo >= hi
        {
            return Err(ConfigError::InvertedRange { min: lo, max: hi });
        }
        Ok(Self { min, max })
    }

    /// Lower bound policy.
    #[inline]
    pub const fn min(&self) -> Bound { self.min }

    /// Upper bound policy.
    #[inline]
    pub const fn max(&self) -> Bound { self.max }

    /// Whether either edge follows the data.
    #[inline]
    pub const fn is_autoranging(&self) -> bool { self.min.is_auto() || self.max.is_auto() }

    /// Effective bounds when no samples are available.
    pub fn fallback(&self) -> Extent {
        match (self.min, self.max) {
            (Bound::Fixed(lo), Bound::Fixed(hi)) => Extent::new(lo, hi),
            (Bound::Fixed(lo), Bound::Auto) => Extent::new(lo, lo + 1.0),
            (Bound::Auto, Bound::Fixed(hi)) => Extent::new(hi - 1.0, hi),
            (Bound::Auto, Bound::Auto) => Extent::new(FALLBACK_BOTTOM, FALLBACK_TOP),
        }
    }

    /// Resolve the effective bounds over `samples`.
    ///
    /// Single O(n) pass; fixed ranges skip the scan entirely.
    pub fn extent<I>(
        &self,
        samples: I,
    ) -> Extent
    where
        I: IntoIterator<Item = f32>,
    {
        if !self.is_autoranging() {
            return self.fallback();
        }

        let mut lowest = f32::INFINITY;
        let mut highest = f32::NEG_INFINITY;
        for value in samples.into_iter().filter(|v| v.is_finite()) {
            if value < lowest {
                lowest = value;
            }
            if value > highest {
                highest = value;
            }
        }

        if lowest > highest {
            return self.fallback();
        }

        Extent::new(
            self.min.fixed().unwrap_or(lowest),
            self.max.fixed().unwrap_or(highest),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
