//! Inside/outside color partitioning around a region.
//!
//! One streaming pass over the image, row by row. Rows that miss the region
//! feed the outside set whole; rows that cross it are split into a left span,
//! the inside span, and a right span. Memory grows with the number of
//! distinct colors only.
//!
//! # Complexity
//! O(W × H) time, O(distinct colors) space.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::color::ColorKey;
use crate::config::AnalysisConfig;
use crate::error::CoreError;
use crate::hooks::Hooks;
use crate::image::RasterImage;
use crate::region::Region;

/// Colors found inside a region and everywhere else in the same image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSets {
    /// Colors inside the region, in first row-major occurrence order.
    pub inside: IndexSet<ColorKey>,
    /// Colors anywhere outside the region.
    pub outside: HashSet<ColorKey>,
}

/// Partition the colors of `image` into those inside `region` and those
/// outside it.
///
/// Polls cancellation and reports progress once per image row.
pub fn extract_color_sets(
    image: &RasterImage,
    region: Region,
    config: &AnalysisConfig,
    hooks: &mut Hooks<'_>,
) -> Result<ColorSets, CoreError> {
    region.validate(image)?;

    let policy = config.alpha;
    let key = |px: &[u8; 4]| ColorKey::from_pixel(*px, policy);
    let left_len = region.x as usize;
    let inside_len = region.width as usize;
    let total = u64::from(image.height());

    let mut sets = ColorSets::default();
    for y in 0..image.height() {
        hooks.checkpoint()?;

        let row = image.row(y);
        if region.spans_row(y) {
            let (left, rest) = row.split_at(left_len);
            let (inside, right) = rest.split_at(inside_len);
            sets.outside.extend(left.iter().chain(right).map(key));
            sets.inside.extend(inside.iter().map(key));
        } else {
            sets.outside.extend(row.iter().map(key));
        }

        hooks.report((u64::from(y) + 1) as f32 / total as f32);
    }

    Ok(sets)
}
