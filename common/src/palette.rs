//! Color index to RGB565 mapping.
//!
//! Entries are optional: an empty entry is transparent, so composing a bitmap
//! onto the display leaves whatever is underneath visible. Index 0 (the
//! bitmap background) is transparent unless set explicitly.

use embedded_graphics::pixelcolor::Rgb565;

/// Palette of `N` optional colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette<const N: usize> {
    entries: [Option<Rgb565>; N],
}

impl<const N: usize> Palette<N> {
    /// Fully transparent palette.
    pub const fn new() -> Self { Self { entries: [None; N] } }

    /// Set entry `index` to `color`. Indices past the end are ignored.
    pub const fn with_entry(
        mut self,
        index: u8,
        color: Rgb565,
    ) -> Self {
        if (index as usize) < N {
            self.entries[index as usize] = Some(color);
        }
        self
    }

    /// Color for `index`, or `None` if transparent or out of range.
    #[inline]
    pub fn get(
        &self,
        index: u8,
    ) -> Option<Rgb565> {
        self.entries.get(index as usize).copied().flatten()
    }

    /// Replace entry `index`. Indices past the end are ignored.
    pub fn set(
        &mut self,
        index: u8,
        color: Rgb565,
    ) {
        if let Some(slot) = self.entries.get_mut(index as usize) {
            *slot = Some(color);
        }
    }

    /// Make entry `index` transparent.
    pub fn make_transparent(
        &mut self,
        index: u8,
    ) {
        if let Some(slot) = self.entries.get_mut(index as usize) {
            *slot = None;
        }
    }

    /// Number of entries.
    #[inline]
    pub const fn len(&self) -> usize { N }

    /// Check if the palette has no entries at all.
    #[inline]
    pub const fn is_empty(&self) -> bool { N == 0 }
}

impl<const N: usize> Default for Palette<N> {
    fn default() -> Self { Self::new() }
}

impl Palette<2> {
    /// Single-color line palette: index 0 transparent, index 1 `color`.
    pub const fn with_color(color: Rgb565) -> Self { Self::new().with_entry(crate::LINE_INDEX, color) }
}

// =============================================================================
// Tests
// =============================================================================
