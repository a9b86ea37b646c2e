//! Rectangular sub-image extraction.
//!
//! Every region-sized output in the crate starts from [`copy_region`], so
//! sprites and diffs share the exact bounds-copy semantics of a plain crop.

use crate::error::CoreError;
use crate::image::RasterImage;
use crate::region::Region;

/// Copy `region` out of `image`, pixel for pixel.
///
/// The result is exactly `region.width × region.height`. Fails with
/// [`CoreError::InvalidRegion`] before touching any pixel if the region does
/// not fit.
pub fn extract_region(image: &RasterImage, region: Region) -> Result<RasterImage, CoreError> {
    region.validate(image)?;
    Ok(copy_region(image, region))
}

/// Crop without validation; `region` must already fit inside `image`.
pub(crate) fn copy_region(image: &RasterImage, region: Region) -> RasterImage {
    let mut pixels = Vec::with_capacity(region.area() as usize);
    for y in region.y..region.bottom() {
        pixels.extend_from_slice(image.span(y, region.x, region.right()));
    }
    RasterImage::from_parts(region.width, region.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionViolation;

    fn numbered(width: u32, height: u32) -> RasterImage {
        let pixels = (0..width * height)
            .map(|i| [i as u8, (i >> 8) as u8, 7, 255])
            .collect();
        RasterImage::from_pixels(width, height, pixels).expect("valid buffer")
    }

    #[test]
    fn test_extract_region_copies_window() {
        let image = numbered(5, 4);
        let crop = extract_region(&image, Region::new(1, 2, 3, 2)).expect("region fits");
        assert_eq!(crop.dimensions(), (3, 2));
        assert_eq!(crop.pixel(0, 0), image.pixel(1, 2));
        assert_eq!(crop.pixel(2, 1), image.pixel(3, 3));
    }

    #[test]
    fn test_extract_full_image_is_identity() {
        let image = numbered(3, 3);
        let crop = extract_region(&image, Region::new(0, 0, 3, 3)).expect("region fits");
        assert_eq!(crop, image);
    }

    #[test]
    fn test_extract_region_rejects_out_of_bounds() {
        let image = numbered(3, 3);
        let err = extract_region(&image, Region::new(2, 0, 2, 1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidRegion {
                violation: RegionViolation::OutOfBounds,
                ..
            }
        ));
    }
}
