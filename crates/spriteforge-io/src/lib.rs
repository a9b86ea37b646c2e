//! SpriteForge I/O: file boundary for the analysis core.
//!
//! Decodes images into `RasterImage`, encodes results as PNG, finds sibling
//! images for sequence diffs, and reports per-file problems with `tracing`.

mod error;
mod loader;
mod sequence;

pub use error::{ExcludedFrame, ExclusionReason, ImageLoadError, SequenceLoadError};
pub use loader::{load_image, save_png, sibling_images};
pub use sequence::{SpriteFromFiles, transparent_sprite_from_paths};
