//! Image synthesis from analysis results: palette strips and masked sprites.

pub mod mask;
pub mod strip;

pub use mask::{mask_sprite, unique_sprite};
pub use strip::{StripOrientation, colors_strip, unique_colors_strip};
