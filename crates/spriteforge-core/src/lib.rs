//! SpriteForge Core: domain layer for region-based sprite extraction.
//!
//! This crate contains region cropping, region-exclusive color analysis,
//! palette strip and masked sprite synthesis, and static-pixel extraction
//! across image sequences. No I/O, codecs, or logging: callers decode images,
//! pass every input explicitly, and decide what to do with the results.

pub mod analysis;
pub mod color;
pub mod config;
pub mod crop;
pub mod error;
pub mod hooks;
pub mod image;
pub mod region;
pub mod sequence;
pub mod synth;

// Re-exports for convenience.
pub use analysis::{ColorSets, UniqueColorList, extract_color_sets, unique_colors};
pub use color::ColorKey;
pub use config::{AlphaPolicy, AnalysisConfig, GeometryPolicy};
pub use crop::extract_region;
pub use error::{CoreError, RegionParseError, RegionViolation};
pub use hooks::Hooks;
pub use image::{PixelSample, RasterImage, Rgba};
pub use region::Region;
pub use sequence::{GeometryMismatch, SequenceDiff, transparent_sprite};
pub use synth::{StripOrientation, colors_strip, mask_sprite, unique_colors_strip, unique_sprite};
pub use tokio_util::sync::CancellationToken;
