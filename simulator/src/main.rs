//! Triple sparkline demo for desktop platforms.
//!
//! Renders three sparklines on a simulated 320x240 RGB565 display using the
//! embedded-graphics-simulator crate: a fixed-range chart, a fixed-range chart
//! whose data overshoots and gets clipped, and an autoranging chart with live
//! range labels. Runs headless by default; `--window` opens an SDL window when
//! built with the `window` feature, and `--png` saves the final frame.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod charts;
mod cli;
mod config;
mod feed;
mod group;
mod label;
mod profiling;
mod timing;

use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
#[cfg(feature = "window")]
use embedded_graphics_simulator::{SimulatorEvent, Window};
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay};
use log::{debug, info};
use sparkline_common::colors::BLACK;

use crate::charts::{ChartStorage, DemoCharts};
use crate::cli::Args;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::feed::DemoFeed;
use crate::profiling::FrameStats;
use crate::timing::{FRAME_TIME, REPORT_INTERVAL};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();

    let mut window = open_window(args, &output_settings)?;
    if args.frames.is_none() && !args.window {
        info!("running headless without --frames; stop with Ctrl-C");
    }

    let mut storage = ChartStorage::new();
    let mut charts = DemoCharts::new(&mut storage)?;
    let mut feed = DemoFeed::new(args.seed);
    let mut stats = FrameStats::new();

    display.clear(BLACK)?;

    let mut frame = 0u64;
    loop {
        if args.frames.is_some_and(|limit| frame >= limit) {
            break;
        }
        let frame_start = Instant::now();

        charts.update(feed.next_samples())?;
        let update_time = frame_start.elapsed();

        display.clear(BLACK)?;
        charts.compose()?.draw(&mut display)?;
        let draw_time = frame_start.elapsed() - update_time;

        if !present(&mut window, &display) {
            debug!("window closed");
            break;
        }

        let elapsed = frame_start.elapsed();
        stats.record_frame(update_time, draw_time, elapsed);
        frame += 1;
        if frame % REPORT_INTERVAL == 0 {
            stats.report();
            charts.log_ranges();
        }

        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }

    if let Some(path) = &args.png {
        display
            .to_rgb_output_image(&output_settings)
            .save_png(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("saved frame {frame} to {}", path.display());
    }

    stats.report();
    Ok(())
}

// =============================================================================
// Window Handling
// =============================================================================

#[cfg(feature = "window")]
type Screen = Option<Window>;

#[cfg(not(feature = "window"))]
type Screen = ();

#[cfg(feature = "window")]
fn open_window(
    args: &Args,
    output_settings: &OutputSettings,
) -> anyhow::Result<Screen> {
    Ok(args.window.then(|| Window::new("Sparkline Sim", output_settings)))
}

#[cfg(not(feature = "window"))]
fn open_window(
    args: &Args,
    _output_settings: &OutputSettings,
) -> anyhow::Result<Screen> {
    if args.window {
        anyhow::bail!("--window needs a build with the `window` feature");
    }
    Ok(())
}

/// Push the frame to the window, if any. Returns `false` once the user closes
/// it.
#[cfg(feature = "window")]
fn present(
    window: &mut Screen,
    display: &SimulatorDisplay<Rgb565>,
) -> bool {
    let Some(window) = window.as_mut() else {
        return true;
    };
    window.update(display);
    !window.events().any(|event| matches!(event, SimulatorEvent::Quit))
}

#[cfg(not(feature = "window"))]
fn present(
    _window: &mut Screen,
    _display: &SimulatorDisplay<Rgb565>,
) -> bool {
    true
}
