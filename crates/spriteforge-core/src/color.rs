//! Color keys used for set membership and frame comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::AlphaPolicy;
use crate::image::Rgba;

/// Canonical color used as a hash-set key.
///
/// Build keys through [`ColorKey::from_pixel`] so that the alpha policy is
/// applied consistently: under [`AlphaPolicy::Ignore`] alpha is pinned to 255,
/// which makes colors that differ only in alpha equal.
///
/// Ordering is lexicographic over `(r, g, b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorKey {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorKey {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Key for `pixel` under `policy`.
    #[inline]
    pub const fn from_pixel(pixel: Rgba, policy: AlphaPolicy) -> Self {
        let a = match policy {
            AlphaPolicy::Ignore => 255,
            AlphaPolicy::Include => pixel[3],
        };
        Self::new(pixel[0], pixel[1], pixel[2], a)
    }

    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn to_rgba(self) -> Rgba {
        [self.r, self.g, self.b, self.a]
    }

    /// Same RGB with alpha forced to 255.
    pub const fn opaque(self) -> Rgba {
        [self.r, self.g, self.b, 255]
    }
}

/// `#rrggbbaa`.
impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
