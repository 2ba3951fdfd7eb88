//! Numeric range labels drawn beside a chart.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use heapless::String;
use profont::PROFONT_9_POINT;
use sparkline_common::Widget;

use crate::config::LABEL_LEN;

/// Anchored at the left edge, vertically centered on the label position.
const LABEL_TEXT_STYLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Single-line text label showing a chart bound.
#[derive(Clone, Debug)]
pub struct ValueLabel {
    text: String<LABEL_LEN>,
    position: Point,
    color: Rgb565,
}

impl ValueLabel {
    /// Empty label anchored at `position`.
    pub fn new(
        position: Point,
        color: Rgb565,
    ) -> Self {
        Self {
            text: String::new(),
            position,
            color,
        }
    }

    /// Replace the text with `value`'s shortest round-trip representation.
    ///
    /// Values too long for the label fall back to scientific notation.
    pub fn set_value(
        &mut self,
        value: f32,
    ) {
        self.text.clear();
        if write!(self.text, "{value}").is_err() {
            self.text.clear();
            write!(self.text, "{value:.3e}").ok();
        }
    }

    #[inline]
    pub fn text(&self) -> &str { &self.text }

    #[inline]
    pub const fn position(&self) -> Point { self.position }

    fn as_text(&self) -> Text<'_, MonoTextStyle<'static, Rgb565>> {
        Text::with_text_style(
            &self.text,
            self.position,
            MonoTextStyle::new(&PROFONT_9_POINT, self.color),
            LABEL_TEXT_STYLE,
        )
    }
}

impl Widget for ValueLabel {
    fn bounding_box(&self) -> Rectangle { self.as_text().bounding_box() }

    fn render<D>(
        &self,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.as_text().draw(target).map(|_| ())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    #[test]
    fn test_set_value_formats_shortest_form() {
        let mut label = ValueLabel::new(Point::new(60, 10), Rgb565::WHITE);
        label.set_value(1.25);
        assert_eq!(label.text(), "1.25");
        label.set_value(-1.0);
        assert_eq!(label.text(), "-1");
    }

    #[test]
    fn test_set_value_replaces_previous_text() {
        let mut label = ValueLabel::new(Point::zero(), Rgb565::WHITE);
        label.set_value(123.5);
        label.set_value(0.5);
        assert_eq!(label.text(), "0.5");
    }

    #[test]
    fn test_set_value_long_number_falls_back_to_scientific() {
        let mut label = ValueLabel::new(Point::zero(), Rgb565::WHITE);
        label.set_value(1.0e30);
        assert!(label.text().len() <= LABEL_LEN);
        assert!(label.text().contains('e'));
    }

    #[test]
    fn test_bounding_box_starts_at_anchor_and_is_centered() {
        let mut label = ValueLabel::new(Point::new(60, 60), Rgb565::WHITE);
        label.set_value(-1.0);
        let bbox = label.bounding_box();
        assert_eq!(bbox.top_left.x, 60);
        assert!(bbox.top_left.y < 60);
        assert!(bbox.top_left.y + bbox.size.height as i32 > 60);
    }

    #[test]
    fn test_render_stays_inside_bounding_box() {
        let mut label = ValueLabel::new(Point::new(20, 20), Rgb565::GREEN);
        label.set_value(0.75);

        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(80, 40));
        label.render(&mut display).unwrap();

        let bbox = label.bounding_box();
        let mut lit = 0;
        for y in 0..40 {
            for x in 0..80 {
                let point = Point::new(x, y);
                if display.get_pixel(point) == Rgb565::GREEN {
                    lit += 1;
                    assert!(bbox.contains(point), "{point:?} outside {bbox:?}");
                }
            }
        }
        assert!(lit > 0);
    }
}
