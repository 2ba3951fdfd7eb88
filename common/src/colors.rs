//! Color constants for sparkline palettes and backgrounds.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Most small SPI LCD controllers (ILI9341, ST7789) take this format natively.
//! [`from_rgb888`] converts the 24-bit `0xRRGGBB` values used in display
//! palettes by dropping the low bits of each channel.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Display background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default line and label color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure blue. Background tile of the second demo chart.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Magenta. Line color of the second demo chart.
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors
// =============================================================================

/// Bright green (`0x11FF44`). Background tile and labels of the autoranging chart.
pub const SPRING_GREEN: Rgb565 = from_rgb888(0x11FF44);

/// Convert a 24-bit `0xRRGGBB` color to RGB565.
#[inline]
pub const fn from_rgb888(rgb: u32) -> Rgb565 {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Tests
// =============================================================================
