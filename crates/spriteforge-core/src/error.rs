use std::num::ParseIntError;

use crate::region::Region;
use crate::sequence::GeometryMismatch;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid region {region} for {image_width}x{image_height} image: {violation}")]
    InvalidRegion {
        region: Region,
        image_width: u32,
        image_height: u32,
        violation: RegionViolation,
    },
    #[error("pixel buffer of {len} entries does not match {width}x{height}")]
    InvalidBuffer { width: u32, height: u32, len: usize },
    #[error(
        "sequence needs at least 2 frames with matching geometry, {usable} usable ({} excluded)",
        .excluded.len()
    )]
    InsufficientSequence {
        usable: usize,
        excluded: Vec<GeometryMismatch>,
    },
    #[error("operation canceled")]
    Canceled,
}

/// Why a region was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegionViolation {
    /// Zero width or height.
    #[error("width and height must be positive")]
    Empty,
    /// Extends past the right or bottom edge.
    #[error("extends past the image bounds")]
    OutOfBounds,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionParseError {
    #[error("expected `x,y,width,height`, got {0:?}")]
    Shape(String),
    #[error("invalid region component {value:?}: {source}")]
    Number {
        value: String,
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}, expected one of: {expected}")]
pub struct ParsePolicyError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_region_message_names_violation() {
        let err = CoreError::InvalidRegion {
            region: Region::new(3, 3, 4, 4),
            image_width: 4,
            image_height: 4,
            violation: RegionViolation::OutOfBounds,
        };
        assert_eq!(
            err.to_string(),
            "invalid region 4x4 at (3, 3) for 4x4 image: extends past the image bounds"
        );
        assert_eq!(
            RegionViolation::Empty.to_string(),
            "width and height must be positive"
        );
    }
}
