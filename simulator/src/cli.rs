//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

/// Triple sparkline demo on a simulated 320x240 RGB565 display.
#[derive(Parser, Debug)]
#[command(name = "simulator", version, about)]
pub struct Args {
    /// Stop after this many frames. Runs until the window closes when omitted.
    #[arg(short, long)]
    pub frames: Option<u64>,

    /// Seed for reproducible sample data.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pixel scale for the window and PNG output.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Write the final frame to this PNG file.
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Open an SDL window (needs the `window` feature).
    #[arg(short, long)]
    pub window: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_well_formed() { Args::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["simulator"]).unwrap();
        assert_eq!(args.frames, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.scale, 2);
        assert!(args.png.is_none());
        assert!(!args.window);
    }

    #[test]
    fn test_headless_run() {
        let args =
            Args::try_parse_from(["simulator", "--frames", "60", "--seed", "9", "--png", "out.png"]).unwrap();
        assert_eq!(args.frames, Some(60));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.png, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        assert!(Args::try_parse_from(["simulator", "--scale", "0"]).is_err());
    }
}
