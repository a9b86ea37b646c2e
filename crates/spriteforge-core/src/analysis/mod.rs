//! Color analysis: inside/outside color sets and region-exclusive colors.

pub mod color_sets;
pub mod unique;

pub use color_sets::{ColorSets, extract_color_sets};
pub use unique::{UniqueColorList, difference, unique_colors};
