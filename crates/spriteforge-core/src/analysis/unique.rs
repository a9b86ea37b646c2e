//! Region-exclusive ("unique") colors.
//!
//! A color is unique to a region when it occurs inside the region and
//! nowhere else in the image. The result keeps the order in which colors are
//! first met while scanning the region row by row, so repeated calls on the
//! same input always agree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::color_sets::{ColorSets, extract_color_sets};
use crate::color::ColorKey;
use crate::config::AnalysisConfig;
use crate::error::CoreError;
use crate::hooks::Hooks;
use crate::image::RasterImage;
use crate::region::Region;

/// Ordered list of region-exclusive colors. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueColorList(Vec<ColorKey>);

impl UniqueColorList {
    pub fn new(colors: Vec<ColorKey>) -> Self {
        Self(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorKey> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ColorKey] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ColorKey> {
        self.0
    }

    /// Hash set for O(1) membership tests.
    pub fn to_lookup(&self) -> HashSet<ColorKey> {
        self.0.iter().copied().collect()
    }

    /// Re-order brightest channel values first, `(r, g, b, a)` descending.
    pub fn sort_descending(&mut self) {
        self.0.sort_unstable_by(|a, b| b.cmp(a));
    }
}

impl FromIterator<ColorKey> for UniqueColorList {
    fn from_iter<I: IntoIterator<Item = ColorKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a UniqueColorList {
    type Item = &'a ColorKey;
    type IntoIter = std::slice::Iter<'a, ColorKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Inside colors that never occur outside, in inside-set order.
pub fn difference(sets: &ColorSets) -> UniqueColorList {
    sets.inside
        .iter()
        .filter(|color| !sets.outside.contains(*color))
        .copied()
        .collect()
}

/// Colors of `image` that appear inside `region` and nowhere else.
///
/// An empty list means "no unique colors" and is not an error.
pub fn unique_colors(
    image: &RasterImage,
    region: Region,
    config: &AnalysisConfig,
    hooks: &mut Hooks<'_>,
) -> Result<UniqueColorList, CoreError> {
    let sets = extract_color_sets(image, region, config, hooks)?;
    let unique = difference(&sets);
    hooks.finish();
    Ok(unique)
}
