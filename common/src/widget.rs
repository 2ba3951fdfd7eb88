//! Composable display elements.
//!
//! A [`Widget`] knows where it sits on the display and how to render itself
//! onto any RGB565 `DrawTarget`. Applications compose widgets in draw order:
//! later widgets cover earlier ones.
//!
//! - [`Tile`]: an indexed bitmap placed at an origin and colored by a palette
//! - [`SolidTile`]: a filled rectangle, used as a background behind a chart

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::bitmap::Bitmap;
use crate::palette::Palette;

/// Something that can be placed on the display and drawn.
pub trait Widget {
    /// Area of the display this widget covers.
    fn bounding_box(&self) -> Rectangle;

    /// Draw the widget onto `target`.
    fn render<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}

// =============================================================================
// Bitmap Tile
// =============================================================================

/// Indexed bitmap positioned on the display.
///
/// Pixels whose index maps to a transparent palette entry are skipped.
pub struct Tile<'a, B, const N: usize> {
    bitmap: &'a B,
    palette: &'a Palette<N>,
    origin: Point,
}

impl<'a, B: Bitmap, const N: usize> Tile<'a, B, N> {
    /// Place `bitmap` with its top-left corner at `origin`.
    pub const fn new(
        bitmap: &'a B,
        palette: &'a Palette<N>,
        origin: Point,
    ) -> Self {
        Self {
            bitmap,
            palette,
            origin,
        }
    }

    /// Top-left corner on the display.
    pub const fn origin(&self) -> Point { self.origin }
}

impl<B: Bitmap, const N: usize> Widget for Tile<'_, B, N> {
    fn bounding_box(&self) -> Rectangle { Rectangle::new(self.origin, self.bitmap.size()) }

    fn render<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let size = self.bitmap.size();
        let pixels = (0..size.height)
            .flat_map(move |row| (0..size.width).map(move |col| (col, row)))
            .filter_map(|(col, row)| {
                let color = self.palette.get(self.bitmap.pixel(col, row)?)?;
                Some(Pixel(self.origin + Point::new(col as i32, row as i32), color))
            });
        target.draw_iter(pixels)
    }
}

impl<B: Bitmap, const N: usize> Drawable for Tile<'_, B, N> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.render(target)
    }
}

// =============================================================================
// Solid Tile
// =============================================================================

/// Rectangle filled with a single color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SolidTile {
    area: Rectangle,
    color: Rgb565,
}

impl SolidTile {
    /// Fill `area` with `color`.
    pub const fn new(
        area: Rectangle,
        color: Rgb565,
    ) -> Self {
        Self { area, color }
    }

    /// Fill color.
    pub const fn color(&self) -> Rgb565 { self.color }
}

impl Widget for SolidTile {
    fn bounding_box(&self) -> Rectangle { self.area }

    fn render<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.fill_solid(&self.area, self.color)
    }
}

// =============================================================================
// Tests
// =============================================================================
