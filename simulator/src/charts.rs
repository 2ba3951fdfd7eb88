//! The three demo sparklines with their backdrops and range labels.

use anyhow::Context;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;
use sparkline_common::{BitmapView, Bound, Palette, SolidTile, Sparkline, SparklineConfig};

use crate::config::*;
use crate::feed::Samples;
use crate::group::{Group, Layer};
use crate::label::ValueLabel;

/// Sparkline drawing into a borrowed byte buffer.
pub type Chart<'s> = Sparkline<BitmapView<'s>, CHART_CAPACITY>;

/// Display group holding every demo layer.
pub type DemoGroup<'a, 's> = Group<'a, BitmapView<'s>, GROUP_SIZE>;

const FIXED_CONFIG: SparklineConfig = SparklineConfig::new(FIXED_WIDTH, FIXED_HEIGHT, FIXED_ITEMS)
    .with_range(Bound::Fixed(FIXED_Y_MIN), Bound::Fixed(FIXED_Y_MAX))
    .at(FIXED_X, FIXED_Y);

const CLIPPING_CONFIG: SparklineConfig = SparklineConfig::new(CLIPPING_WIDTH, CLIPPING_HEIGHT, CLIPPING_ITEMS)
    .with_range(Bound::Fixed(CLIPPING_Y_MIN), Bound::Fixed(CLIPPING_Y_MAX))
    .at(CLIPPING_X, CLIPPING_Y);

const AUTORANGE_CONFIG: SparklineConfig =
    SparklineConfig::new(AUTORANGE_WIDTH, AUTORANGE_HEIGHT, AUTORANGE_ITEMS).at(AUTORANGE_X, AUTORANGE_Y);

// =============================================================================
// Bitmap Storage
// =============================================================================

/// Pixel buffers backing the three charts.
pub struct ChartStorage {
    fixed: Vec<u8>,
    clipping: Vec<u8>,
    autorange: Vec<u8>,
}

impl ChartStorage {
    pub fn new() -> Self {
        Self {
            fixed: vec![0; pixel_count(&FIXED_CONFIG)],
            clipping: vec![0; pixel_count(&CLIPPING_CONFIG)],
            autorange: vec![0; pixel_count(&AUTORANGE_CONFIG)],
        }
    }
}

impl Default for ChartStorage {
    fn default() -> Self { Self::new() }
}

const fn pixel_count(config: &SparklineConfig) -> usize { config.width as usize * config.height as usize }

fn chart<'s>(
    config: SparklineConfig,
    storage: &'s mut [u8],
    name: &str,
) -> anyhow::Result<Chart<'s>> {
    let bitmap = BitmapView::new(storage, config.width, config.height)
        .with_context(|| format!("allocating {name} chart bitmap"))?;
    Sparkline::new(config, bitmap).with_context(|| format!("creating {name} chart"))
}

// =============================================================================
// Demo Charts
// =============================================================================

/// Demo scene state: charts, palettes, backdrops and labels.
pub struct DemoCharts<'s> {
    fixed: Chart<'s>,
    clipping: Chart<'s>,
    autorange: Chart<'s>,
    fixed_palette: Palette<2>,
    clipping_palette: Palette<2>,
    autorange_palette: Palette<2>,
    clipping_backdrop: SolidTile,
    autorange_backdrop: SolidTile,
    fixed_top: ValueLabel,
    fixed_bottom: ValueLabel,
    autorange_top: ValueLabel,
    autorange_bottom: ValueLabel,
}

impl<'s> DemoCharts<'s> {
    pub fn new(storage: &'s mut ChartStorage) -> anyhow::Result<Self> {
        let fixed = chart(FIXED_CONFIG, &mut storage.fixed, "fixed")?;
        let clipping = chart(CLIPPING_CONFIG, &mut storage.clipping, "clipping")?;
        let autorange = chart(AUTORANGE_CONFIG, &mut storage.autorange, "autorange")?;

        let mut fixed_top = ValueLabel::new(top_right(&fixed), FIXED_LABEL);
        let mut fixed_bottom = ValueLabel::new(bottom_right(&fixed), FIXED_LABEL);
        fixed_top.set_value(fixed.y_top());
        fixed_bottom.set_value(fixed.y_bottom());

        let mut autorange_top = ValueLabel::new(top_right(&autorange), AUTORANGE_LABEL);
        let mut autorange_bottom = ValueLabel::new(bottom_right(&autorange), AUTORANGE_LABEL);
        autorange_top.set_value(autorange.y_top());
        autorange_bottom.set_value(autorange.y_bottom());

        let charts = Self {
            clipping_backdrop: SolidTile::new(clipping.bounding_box(), CLIPPING_BACKDROP),
            autorange_backdrop: SolidTile::new(autorange.bounding_box(), AUTORANGE_BACKDROP),
            fixed,
            clipping,
            autorange,
            fixed_palette: Palette::with_color(FIXED_LINE),
            clipping_palette: Palette::with_color(CLIPPING_LINE),
            autorange_palette: Palette::with_color(AUTORANGE_LINE),
            fixed_top,
            fixed_bottom,
            autorange_top,
            autorange_bottom,
        };
        debug!("demo charts ready");
        Ok(charts)
    }

    /// Append one sample to each chart and refresh the autorange labels.
    pub fn update(
        &mut self,
        samples: Samples,
    ) -> anyhow::Result<()> {
        self.fixed.add_value(samples.fixed).context("updating fixed chart")?;
        self.clipping
            .add_value(samples.clipping)
            .context("updating clipping chart")?;
        self.autorange
            .add_value(samples.autorange)
            .context("updating autorange chart")?;

        self.autorange_top.set_value(self.autorange.y_top());
        self.autorange_bottom.set_value(self.autorange.y_bottom());
        Ok(())
    }

    /// Assemble the display group in draw order.
    pub fn compose(&self) -> anyhow::Result<DemoGroup<'_, 's>> {
        let mut group = Group::new();
        group.push(Layer::Chart(self.fixed.tile(&self.fixed_palette)))?;
        group.push(Layer::Label(&self.fixed_top))?;
        group.push(Layer::Label(&self.fixed_bottom))?;
        group.push(Layer::Backdrop(self.clipping_backdrop))?;
        group.push(Layer::Chart(self.clipping.tile(&self.clipping_palette)))?;
        group.push(Layer::Backdrop(self.autorange_backdrop))?;
        group.push(Layer::Chart(self.autorange.tile(&self.autorange_palette)))?;
        group.push(Layer::Label(&self.autorange_top))?;
        group.push(Layer::Label(&self.autorange_bottom))?;
        Ok(group)
    }

    #[inline]
    pub fn fixed(&self) -> &Chart<'s> { &self.fixed }

    #[inline]
    pub fn clipping(&self) -> &Chart<'s> { &self.clipping }

    #[inline]
    pub fn autorange(&self) -> &Chart<'s> { &self.autorange }

    /// Log sample counts and effective bounds of each chart.
    pub fn log_ranges(&self) {
        for (name, chart) in [("fixed", self.fixed()), ("clipping", self.clipping()), ("autorange", self.autorange())] {
            debug!(
                "{name}: {} samples, range {}..{}",
                chart.len(),
                chart.y_bottom(),
                chart.y_top()
            );
        }
    }
}

fn top_right(chart: &Chart<'_>) -> Point { Point::new(chart.x() + chart.width() as i32, chart.y()) }

fn bottom_right(chart: &Chart<'_>) -> Point {
    Point::new(chart.x() + chart.width() as i32, chart.y() + chart.height() as i32)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics_simulator::SimulatorDisplay;
    use sparkline_common::colors::BLACK;

    use super::*;

    fn samples(
        fixed: f32,
        clipping: f32,
        autorange: f32,
    ) -> Samples {
        Samples {
            fixed,
            clipping,
            autorange,
        }
    }

    #[test]
    fn test_fixed_labels_show_configured_bounds() {
        let mut storage = ChartStorage::new();
        let charts = DemoCharts::new(&mut storage).unwrap();
        let (top, bottom) = (&charts.fixed_top, &charts.fixed_bottom);
        assert_eq!(top.text(), "1.25");
        assert_eq!(bottom.text(), "-1");
        assert_eq!(top.position(), Point::new(60, 10));
        assert_eq!(bottom.position(), Point::new(60, 60));
    }

    #[test]
    fn test_autorange_labels_follow_data() {
        let mut storage = ChartStorage::new();
        let mut charts = DemoCharts::new(&mut storage).unwrap();
        assert_eq!(charts.autorange_top.text(), "1");
        assert_eq!(charts.autorange_bottom.text(), "0");

        charts.update(samples(0.5, 0.5, 2.0)).unwrap();
        charts.update(samples(0.5, 0.5, 7.5)).unwrap();
        let (top, bottom) = (&charts.autorange_top, &charts.autorange_bottom);
        assert_eq!(top.text(), "7.5");
        assert_eq!(bottom.text(), "2");
        assert_eq!(top.position(), Point::new(290, 120));
        assert_eq!(bottom.position(), Point::new(290, 220));
    }

    #[test]
    fn test_fixed_range_never_moves() {
        let mut storage = ChartStorage::new();
        let mut charts = DemoCharts::new(&mut storage).unwrap();
        for value in [5.0, -3.0, 0.5] {
            charts.update(samples(value, value, value)).unwrap();
        }
        assert_eq!(charts.fixed().y_top(), FIXED_Y_MAX);
        assert_eq!(charts.fixed().y_bottom(), FIXED_Y_MIN);
        assert_eq!(charts.clipping().y_top(), CLIPPING_Y_MAX);
        assert_eq!(charts.clipping().y_bottom(), CLIPPING_Y_MIN);
        assert_eq!(charts.fixed().len(), 3);
    }

    #[test]
    fn test_compose_layers_every_element() {
        let mut storage = ChartStorage::new();
        let charts = DemoCharts::new(&mut storage).unwrap();
        assert_eq!(charts.compose().unwrap().len(), 9);
    }

    #[test]
    fn test_compose_draws_backdrops_and_lines() {
        let mut storage = ChartStorage::new();
        let mut charts = DemoCharts::new(&mut storage).unwrap();
        charts.update(samples(0.0, 0.0, 0.0)).unwrap();
        charts.update(samples(0.0, 0.0, 1.0)).unwrap();

        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        display.clear(BLACK).unwrap();
        charts.compose().unwrap().draw(&mut display).unwrap();

        // Clipping chart: backdrop fills the region, the line sits on the
        // bottom row for value 0.
        assert_eq!(display.get_pixel(Point::new(CLIPPING_X + 50, CLIPPING_Y + 5)), CLIPPING_BACKDROP);
        assert_eq!(display.get_pixel(Point::new(CLIPPING_X, CLIPPING_Y + 99)), CLIPPING_LINE);

        // Autorange chart: first sample at the bottom, second at the top edge.
        assert_eq!(display.get_pixel(Point::new(AUTORANGE_X, AUTORANGE_Y + 99)), AUTORANGE_LINE);
        let last_col = AUTORANGE_X + (AUTORANGE_WIDTH as i32 - 1) / (AUTORANGE_ITEMS as i32 - 1);
        assert_eq!(display.get_pixel(Point::new(last_col, AUTORANGE_Y)), AUTORANGE_LINE);
        assert_eq!(display.get_pixel(Point::new(AUTORANGE_X + 200, AUTORANGE_Y + 50)), AUTORANGE_BACKDROP);

        // Fixed chart has no backdrop; the screen stays black around the line.
        assert_eq!(display.get_pixel(Point::new(FIXED_X + 40, FIXED_Y + 2)), BLACK);
    }
}
