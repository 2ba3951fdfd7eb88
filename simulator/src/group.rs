//! Ordered collection of display layers.
//!
//! Layers are drawn in insertion order, so later layers cover earlier ones.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use sparkline_common::{Bitmap, SolidTile, Tile, Widget};

use crate::label::ValueLabel;

/// One entry of a [`Group`].
pub enum Layer<'a, B> {
    /// Filled background rectangle.
    Backdrop(SolidTile),
    /// Sparkline bitmap with a two-entry palette.
    Chart(Tile<'a, B, 2>),
    /// Text label.
    Label(&'a ValueLabel),
}

impl<B: Bitmap> Widget for Layer<'_, B> {
    fn bounding_box(&self) -> Rectangle {
        match self {
            Self::Backdrop(tile) => tile.bounding_box(),
            Self::Chart(tile) => tile.bounding_box(),
            Self::Label(label) => label.bounding_box(),
        }
    }

    fn render<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            Self::Backdrop(tile) => tile.render(target),
            Self::Chart(tile) => tile.render(target),
            Self::Label(label) => label.render(target),
        }
    }
}

/// Fixed-capacity display group.
pub struct Group<'a, B, const N: usize> {
    layers: Vec<Layer<'a, B>, N>,
}

impl<'a, B: Bitmap, const N: usize> Group<'a, B, N> {
    pub const fn new() -> Self { Self { layers: Vec::new() } }

    /// Append `layer` on top of the existing ones.
    pub fn push(
        &mut self,
        layer: Layer<'a, B>,
    ) -> anyhow::Result<()> {
        self.layers
            .push(layer)
            .map_err(|_| anyhow::anyhow!("display group is full ({N} layers)"))
    }
}

impl<B: Bitmap, const N: usize> Default for Group<'_, B, N> {
    fn default() -> Self { Self::new() }
}

impl<B: Bitmap, const N: usize> Drawable for Group<'_, B, N> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        for layer in &self.layers {
            layer.render(target)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
