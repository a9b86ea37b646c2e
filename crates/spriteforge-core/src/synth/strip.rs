//! One-pixel-thin palette strips.

use serde::{Deserialize, Serialize};

use crate::analysis::UniqueColorList;
use crate::image::RasterImage;

/// Layout of a palette strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripOrientation {
    /// N × 1.
    #[default]
    Horizontal,
    /// 1 × N.
    Vertical,
}

/// Horizontal strip with one fully opaque pixel per color, in list order.
pub fn unique_colors_strip(colors: &UniqueColorList) -> RasterImage {
    colors_strip(colors, StripOrientation::Horizontal)
}

/// Render `colors` as a strip; pixel `i` is color `i` with alpha 255.
///
/// An empty list yields a zero-area image (0 × 1 or 1 × 0).
pub fn colors_strip(colors: &UniqueColorList, orientation: StripOrientation) -> RasterImage {
    let pixels: Vec<[u8; 4]> = colors.iter().map(|color| color.opaque()).collect();
    let len = pixels.len() as u32;
    let (width, height) = match orientation {
        StripOrientation::Horizontal => (len, 1),
        StripOrientation::Vertical => (1, len),
    };
    RasterImage::from_parts(width, height, pixels)
}
