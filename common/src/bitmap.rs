//! Indexed-color drawing surfaces.
//!
//! A [`Bitmap`] stores one small color index per pixel; a
//! [`Palette`](crate::Palette) turns indices into RGB565 when the bitmap is
//! composed onto the display. The sparkline engine only ever writes indices.
//!
//! Two implementations are provided:
//! - [`IndexedBitmap`]: owned, sized at compile time
//! - [`BitmapView`]: sized at runtime over caller-owned byte storage
//!
//! [`IndexCanvas`] adapts any bitmap into an `embedded_graphics::DrawTarget` so
//! primitives such as `Line` can rasterize into it.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::pixelcolor::raw::RawU8;
use embedded_graphics::prelude::*;

use crate::error::BitmapError;

/// Indexed-color pixel surface.
pub trait Bitmap {
    /// Error raised when a write is rejected.
    type Error;

    /// Size in pixels.
    fn size(&self) -> Size;

    /// Color index at (`col`, `row`), or `None` outside the bitmap.
    fn pixel(
        &self,
        col: u32,
        row: u32,
    ) -> Option<u8>;

    /// Set the pixel at (`col`, `row`) to color `index`.
    fn write_pixel(
        &mut self,
        col: u32,
        row: u32,
        index: u8,
    ) -> Result<(), Self::Error>;

    /// Set every pixel to color `index`.
    fn clear_region(
        &mut self,
        index: u8,
    ) -> Result<(), Self::Error>;
}

impl<B: Bitmap + ?Sized> Bitmap for &mut B {
    type Error = B::Error;

    fn size(&self) -> Size { (**self).size() }

    fn pixel(
        &self,
        col: u32,
        row: u32,
    ) -> Option<u8> {
        (**self).pixel(col, row)
    }

    fn write_pixel(
        &mut self,
        col: u32,
        row: u32,
        index: u8,
    ) -> Result<(), Self::Error> {
        (**self).write_pixel(col, row, index)
    }

    fn clear_region(
        &mut self,
        index: u8,
    ) -> Result<(), Self::Error> {
        (**self).clear_region(index)
    }
}

// =============================================================================
// Owned Bitmap
// =============================================================================

/// Bitmap of `W` x `H` pixels stored inline.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IndexedBitmap<const W: usize, const H: usize> {
    pixels: [[u8; W]; H],
}

impl<const W: usize, const H: usize> IndexedBitmap<W, H> {
    /// Create a bitmap filled with index 0.
    pub const fn new() -> Self { Self { pixels: [[0; W]; H] } }

    /// Pixel rows, top first.
    pub const fn rows(&self) -> &[[u8; W]; H] { &self.pixels }
}

impl<const W: usize, const H: usize> Default for IndexedBitmap<W, H> {
    fn default() -> Self { Self::new() }
}

impl<const W: usize, const H: usize> Bitmap for IndexedBitmap<W, H> {
    type Error = BitmapError;

    fn size(&self) -> Size { Size::new(W as u32, H as u32) }

    fn pixel(
        &self,
        col: u32,
        row: u32,
    ) -> Option<u8> {
        self.pixels.get(row as usize)?.get(col as usize).copied()
    }

    fn write_pixel(
        &mut self,
        col: u32,
        row: u32,
        index: u8,
    ) -> Result<(), Self::Error> {
        let slot = self
            .pixels
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
            .ok_or(BitmapError::OutOfBounds { col, row })?;
        *slot = index;
        Ok(())
    }

    fn clear_region(
        &mut self,
        index: u8,
    ) -> Result<(), Self::Error> {
        for row in &mut self.pixels {
            row.fill(index);
        }
        Ok(())
    }
}

// =============================================================================
// Borrowed Bitmap
// =============================================================================

/// Row-major bitmap over externally owned storage.
///
/// The storage may be larger than `width * height`; only the leading pixels
/// are used.
#[derive(Debug)]
pub struct BitmapView<'a> {
    storage: &'a mut [u8],
    width: u32,
    height: u32,
    len: usize,
}

impl<'a> BitmapView<'a> {
    /// Wrap `storage` as a `width` x `height` bitmap.
    pub fn new(
        storage: &'a mut [u8],
        width: u32,
        height: u32,
    ) -> Result<Self, BitmapError> {
        let needed = (width as usize).checked_mul(height as usize);
        let len = match needed {
            Some(len) if len <= storage.len() => len,
            _ => {
                return Err(BitmapError::BufferTooSmall {
                    needed: needed.unwrap_or(usize::MAX),
                    actual: storage.len(),
                });
            }
        };
        Ok(Self {
            storage,
            width,
            height,
            len,
        })
    }

    /// Pixel storage in row-major order.
    pub fn as_bytes(&self) -> &[u8] { &self.storage[..self.len] }

    #[inline]
    fn offset(
        &self,
        col: u32,
        row: u32,
    ) -> Option<usize> {
        (col < self.width && row < self.height).then(|| row as usize * self.width as usize + col as usize)
    }
}

impl Bitmap for BitmapView<'_> {
    type Error = BitmapError;

    fn size(&self) -> Size { Size::new(self.width, self.height) }

    fn pixel(
        &self,
        col: u32,
        row: u32,
    ) -> Option<u8> {
        self.offset(col, row).map(|i| self.storage[i])
    }

    fn write_pixel(
        &mut self,
        col: u32,
        row: u32,
        index: u8,
    ) -> Result<(), Self::Error> {
        let i = self.offset(col, row).ok_or(BitmapError::OutOfBounds { col, row })?;
        self.storage[i] = index;
        Ok(())
    }

    fn clear_region(
        &mut self,
        index: u8,
    ) -> Result<(), Self::Error> {
        self.storage[..self.len].fill(index);
        Ok(())
    }
}

// =============================================================================
// DrawTarget Adapter
// =============================================================================

/// Palette index used as the "color" of embedded-graphics primitives drawn
/// into a [`Bitmap`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorIndex(pub u8);

impl PixelColor for ColorIndex {
    type Raw = RawU8;
}

/// `DrawTarget` over a mutable bitmap.
///
/// Pixels outside the bitmap are discarded, as the `DrawTarget` contract
/// requires. A write rejected by the bitmap aborts the draw with its error.
pub struct IndexCanvas<'a, B: Bitmap> {
    bitmap: &'a mut B,
}

impl<'a, B: Bitmap> IndexCanvas<'a, B> {
    /// Wrap `bitmap` for drawing.
    pub fn new(bitmap: &'a mut B) -> Self { Self { bitmap } }
}

impl<B: Bitmap> OriginDimensions for IndexCanvas<'_, B> {
    fn size(&self) -> Size { self.bitmap.size() }
}

impl<B: Bitmap> DrawTarget for IndexCanvas<'_, B> {
    type Color = ColorIndex;
    type Error = B::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let size = self.bitmap.size();
        for Pixel(point, ColorIndex(index)) in pixels {
            let (Ok(col), Ok(row)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if col < size.width && row < size.height {
                self.bitmap.write_pixel(col, row, index)?;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    use super::*;

    #[test]
    fn test_indexed_bitmap_starts_clear() {
        let bitmap = IndexedBitmap::<4, 3>::new();
        assert_eq!(bitmap.size(), Size::new(4, 3));
        assert!(bitmap.rows().iter().flatten().all(|&p| p == 0));
    }

    #[test]
    fn test_indexed_bitmap_write_and_read() {
        let mut bitmap = IndexedBitmap::<4, 3>::new();
        bitmap.write_pixel(3, 2, 5).unwrap();
        assert_eq!(bitmap.pixel(3, 2), Some(5));
        assert_eq!(bitmap.pixel(4, 2), None);
        assert_eq!(bitmap.write_pixel(4, 0, 1), Err(BitmapError::OutOfBounds { col: 4, row: 0 }));
    }

    #[test]
    fn test_indexed_bitmap_clear_region() {
        let mut bitmap = IndexedBitmap::<2, 2>::new();
        bitmap.clear_region(7).unwrap();
        assert!(bitmap.rows().iter().flatten().all(|&p| p == 7));
    }

    #[test]
    fn test_view_rejects_short_storage() {
        let mut storage = [0u8; 5];
        assert_eq!(
            BitmapView::new(&mut storage, 3, 2).unwrap_err(),
            BitmapError::BufferTooSmall { needed: 6, actual: 5 }
        );
    }

    #[test]
    fn test_view_rejects_oversized_dimensions() {
        let mut storage = [0u8; 4];
        let err = BitmapView::new(&mut storage, u32::MAX, u32::MAX).unwrap_err();
        let expected = (u32::MAX as usize).checked_mul(u32::MAX as usize).unwrap_or(usize::MAX);
        assert_eq!(err, BitmapError::BufferTooSmall { needed: expected, actual: 4 });
    }

    #[test]
    fn test_view_row_major_layout() {
        let mut storage = [0u8; 8];
        let mut view = BitmapView::new(&mut storage, 3, 2).unwrap();
        view.write_pixel(1, 1, 9).unwrap();
        assert_eq!(view.as_bytes(), &[0, 0, 0, 0, 9, 0]);
        assert_eq!(view.write_pixel(3, 0, 1), Err(BitmapError::OutOfBounds { col: 3, row: 0 }));

        view.clear_region(2).unwrap();
        // Trailing storage beyond width * height is left alone
        assert_eq!(storage, [2, 2, 2, 2, 2, 2, 0, 0]);
    }

    #[test]
    fn test_canvas_draws_line() {
        let mut bitmap = IndexedBitmap::<4, 4>::new();
        Line::new(Point::new(0, 0), Point::new(3, 3))
            .into_styled(PrimitiveStyle::with_stroke(ColorIndex(1), 1))
            .draw(&mut IndexCanvas::new(&mut bitmap))
            .unwrap();
        for i in 0..4 {
            assert_eq!(bitmap.pixel(i, i), Some(1));
        }
        assert_eq!(bitmap.rows().iter().flatten().filter(|&&p| p == 1).count(), 4);
    }

    #[test]
    fn test_canvas_discards_outside_pixels() {
        let mut bitmap = IndexedBitmap::<2, 2>::new();
        let pixels = [
            Pixel(Point::new(-1, 0), ColorIndex(1)),
            Pixel(Point::new(5, 5), ColorIndex(1)),
            Pixel(Point::new(1, 1), ColorIndex(3)),
        ];
        IndexCanvas::new(&mut bitmap).draw_iter(pixels).unwrap();
        assert_eq!(bitmap.rows(), &[[0, 0], [0, 3]]);
    }
}
