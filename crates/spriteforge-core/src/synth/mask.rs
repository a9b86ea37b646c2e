//! Sprites that keep only region-exclusive colors visible.
//!
//! The region is cropped as-is, then each pixel's alpha is rewritten: 255
//! when its color is in the unique set, 0 otherwise. RGB is left untouched.
//! The rewrite is pixel-local, so row order does not affect the result.

use crate::analysis::{UniqueColorList, unique_colors};
use crate::color::ColorKey;
use crate::config::AnalysisConfig;
use crate::crop::copy_region;
use crate::error::CoreError;
use crate::hooks::Hooks;
use crate::image::RasterImage;
use crate::region::Region;

/// Share of the progress range spent finding unique colors in
/// [`unique_sprite`]; the mask pass gets the rest.
const SCAN_SHARE: f32 = 0.8;

/// Crop `region` and make every pixel whose color is not in `colors`
/// transparent.
pub fn mask_sprite(
    image: &RasterImage,
    region: Region,
    colors: &UniqueColorList,
    config: &AnalysisConfig,
    hooks: &mut Hooks<'_>,
) -> Result<RasterImage, CoreError> {
    region.validate(image)?;

    let lookup = colors.to_lookup();
    let policy = config.alpha;
    let total = u64::from(region.height);

    let mut sprite = copy_region(image, region);
    for (done, row) in (1u64..).zip(sprite.rows_mut()) {
        hooks.checkpoint()?;
        for px in row {
            let keep = lookup.contains(&ColorKey::from_pixel(*px, policy));
            px[3] = if keep { 255 } else { 0 };
        }
        hooks.report(done as f32 / total as f32);
    }

    hooks.finish();
    Ok(sprite)
}

/// Region sprite showing only the colors unique to `region`.
///
/// With no unique colors the sprite is fully transparent.
pub fn unique_sprite(
    image: &RasterImage,
    region: Region,
    config: &AnalysisConfig,
    hooks: &mut Hooks<'_>,
) -> Result<RasterImage, CoreError> {
    let colors = hooks.phase(0.0, SCAN_SHARE, |h| {
        unique_colors(image, region, config, h)
    })?;
    hooks.phase(SCAN_SHARE, 1.0, |h| {
        mask_sprite(image, region, &colors, config, h)
    })
}
