//! Axis-aligned selection rectangles in image-pixel coordinates.
//!
//! Whatever shape the user drew, the analysis layer only ever sees its
//! bounding rectangle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, RegionParseError, RegionViolation};
use crate::image::RasterImage;

/// Rectangle `(x, y, width, height)` with its origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Number of pixels covered.
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when row `y` crosses the rectangle.
    pub const fn spans_row(&self, y: u32) -> bool {
        y >= self.y && y < self.bottom()
    }

    /// Check the region against a `width × height` canvas.
    pub fn check(&self, width: u32, height: u32) -> Result<(), RegionViolation> {
        if self.width == 0 || self.height == 0 {
            return Err(RegionViolation::Empty);
        }
        let right = u64::from(self.x) + u64::from(self.width);
        let bottom = u64::from(self.y) + u64::from(self.height);
        if right > u64::from(width) || bottom > u64::from(height) {
            return Err(RegionViolation::OutOfBounds);
        }
        Ok(())
    }

    /// Fail fast with [`CoreError::InvalidRegion`] unless the region lies
    /// fully inside `image`.
    pub fn validate(&self, image: &RasterImage) -> Result<(), CoreError> {
        self.check(image.width(), image.height())
            .map_err(|violation| CoreError::InvalidRegion {
                region: *self,
                image_width: image.width(),
                image_height: image.height(),
                violation,
            })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Parses `x,y,width,height`, e.g. `10,20,32,32`.
impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, width, height] = parts.as_slice() else {
            return Err(RegionParseError::Shape(s.to_string()));
        };
        let parse = |value: &str| {
            value
                .parse::<u32>()
                .map_err(|source| RegionParseError::Number {
                    value: value.to_string(),
                    source,
                })
        };
        Ok(Self::new(parse(x)?, parse(y)?, parse(width)?, parse(height)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_region_touching_edges() {
        assert_eq!(Region::new(0, 0, 4, 4).check(4, 4), Ok(()));
        assert_eq!(Region::new(3, 3, 1, 1).check(4, 4), Ok(()));
    }

    #[test]
    fn test_check_rejects_empty_and_overflowing() {
        assert_eq!(
            Region::new(0, 0, 0, 2).check(4, 4),
            Err(RegionViolation::Empty)
        );
        assert_eq!(
            Region::new(3, 0, 2, 1).check(4, 4),
            Err(RegionViolation::OutOfBounds)
        );
        assert_eq!(
            Region::new(u32::MAX, 0, 2, 1).check(4, 4),
            Err(RegionViolation::OutOfBounds)
        );
    }

    #[test]
    fn test_validate_carries_context() {
        let image = RasterImage::filled(4, 3, [0, 0, 0, 255]);
        let region = Region::new(2, 2, 3, 3);
        match region.validate(&image) {
            Err(CoreError::InvalidRegion {
                region: r,
                image_width,
                image_height,
                violation,
            }) => {
                assert_eq!(r, region);
                assert_eq!((image_width, image_height), (4, 3));
                assert_eq!(violation, RegionViolation::OutOfBounds);
            }
            other => panic!("expected InvalidRegion, got {other:?}"),
        }
    }

    #[test]
    fn test_contains_is_half_open() {
        let region = Region::new(1, 1, 2, 2);
        assert!(region.contains(1, 1));
        assert!(region.contains(2, 2));
        assert!(!region.contains(3, 2));
        assert!(!region.contains(0, 1));
    }

    #[test]
    fn test_parse_region() {
        let region: Region = "10, 20,32,8".parse().expect("valid region");
        assert_eq!(region, Region::new(10, 20, 32, 8));
        assert!(matches!(
            "1,2,3".parse::<Region>(),
            Err(RegionParseError::Shape(_))
        ));
        assert!(matches!(
            "1,2,-3,4".parse::<Region>(),
            Err(RegionParseError::Number { .. })
        ));
    }
}
