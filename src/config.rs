// Fixed canvas/palette constants and the command-line options of the binary.

use clap::Parser;
use std::num::NonZeroUsize;

pub const CANVAS_WIDTH: usize = 640;
pub const CANVAS_HEIGHT: usize = 480;
pub const CENTER_X: f32 = CANVAS_WIDTH as f32 / 2.0;
pub const CENTER_Y: f32 = CANVAS_HEIGHT as f32 / 2.0;

/// Enlargement of the unit heart curve (outline and diffusion sets).
pub const HEART_ENLARGE: f32 = 11.0;
/// Slightly larger curve the halo is sampled from before being contracted.
pub const HALO_ENLARGE: f32 = 11.6;

// Palette, 0x00RRGGBB
pub const BACKGROUND: u32 = 0x00_05_02_0A;
pub const HEART_COLOR: u32 = 0x00_FF_3A_5C;
pub const GRID_COLOR: u32 = 0x00_1A_0C_22;
pub const HUD_COLOR: u32 = 0x00_FF_B0_C0;

pub const GRID_SPACING: usize = 40;
pub const SCANLINE_EVERY: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "heart-pulse", about = "A pulsing particle heart over a starfield")]
pub struct Args {
    /// Number of precomputed frames in one beat cycle
    #[arg(long, default_value = "120")]
    pub frames: NonZeroUsize,

    /// Seed for all randomness (random every run when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target refresh rate of the window
    #[arg(long, default_value_t = 60)]
    pub fps: usize,

    /// Number of background stars
    #[arg(long, default_value_t = 160)]
    pub stars: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["heart-pulse"]).unwrap();
        assert_eq!(args.frames.get(), 120);
        assert_eq!(args.seed, None);
        assert_eq!(args.fps, 60);
        assert_eq!(args.stars, 160);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-3")]
    #[case::text("many")]
    fn rejects_bad_frame_count(#[case] value: &str) {
        assert!(Args::try_parse_from(["heart-pulse", "--frames", value]).is_err());
    }

    #[test]
    fn parses_overrides() {
        let args =
            Args::try_parse_from(["heart-pulse", "--frames", "30", "--seed", "9", "--stars", "0"]).unwrap();
        assert_eq!(args.frames.get(), 30);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.stars, 0);
    }
}
