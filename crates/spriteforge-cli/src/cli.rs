use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use spriteforge_core::{AlphaPolicy, GeometryPolicy, Region, StripOrientation};

/// Region-based sprite extraction from still images and frame sequences.
#[derive(Parser, Debug)]
#[command(name = "spriteforge", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// JSON file with analysis settings
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Whether alpha takes part in color equality (`ignore` or `include`)
    #[arg(long, global = true, value_name = "POLICY")]
    pub alpha: Option<AlphaPolicy>,

    /// Which sibling frames a sequence diff accepts (`exact` or `covers-region`)
    #[arg(long, global = true, value_name = "POLICY")]
    pub geometry: Option<GeometryPolicy>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy a region into its own image
    Crop {
        input: PathBuf,
        /// Region as `x,y,width,height`
        #[arg(short, long)]
        region: Region,
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List colors that appear inside a region and nowhere else
    Unique {
        input: PathBuf,
        #[arg(short, long)]
        region: Region,
        /// Also write the colors as a palette strip PNG
        #[arg(long, value_name = "FILE")]
        strip: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Orientation::Horizontal)]
        orientation: Orientation,
        /// Sort colors from brightest to darkest instead of first-seen order
        #[arg(long)]
        sorted: bool,
    },

    /// Crop a region, keeping only the colors unique to it
    Highlight {
        input: PathBuf,
        #[arg(short, long)]
        region: Region,
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Crop a region, keeping only pixels that never change across frames
    Extract {
        /// Reference frame
        input: PathBuf,
        #[arg(short, long)]
        region: Region,
        #[arg(short, long)]
        output: PathBuf,
        /// Frames to compare against; defaults to same-format files next to INPUT
        #[arg(long = "with", value_name = "FILE", num_args = 1..)]
        with: Vec<PathBuf>,
    },

    /// Print image dimensions and, optionally, one pixel
    Info {
        input: PathBuf,
        /// Column to sample; clamped to the image
        #[arg(long, allow_negative_numbers = true, requires = "y")]
        x: Option<i64>,
        /// Row to sample; clamped to the image
        #[arg(long, allow_negative_numbers = true, requires = "x")]
        y: Option<i64>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl From<Orientation> for StripOrientation {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => StripOrientation::Horizontal,
            Orientation::Vertical => StripOrientation::Vertical,
        }
    }
}
