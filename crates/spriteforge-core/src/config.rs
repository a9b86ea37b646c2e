//! Analysis settings shared by every entry point.
//!
//! `AnalysisConfig` is passed explicitly to each operation; the core keeps
//! no settings of its own between calls.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePolicyError;
use crate::region::Region;

/// Whether the alpha channel takes part in color equality.
///
/// Applies to both unique-color detection and sequence comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaPolicy {
    /// Compare RGB only. Default.
    #[default]
    Ignore,
    /// Compare all four channels.
    Include,
}

impl AlphaPolicy {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Include => "include",
        }
    }
}

impl FromStr for AlphaPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" | "rgb" => Ok(Self::Ignore),
            "include" | "rgba" => Ok(Self::Include),
            _ => Err(ParsePolicyError {
                kind: "alpha policy",
                value: s.to_string(),
                expected: "ignore, include",
            }),
        }
    }
}

/// Which sibling frames may take part in a sequence diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryPolicy {
    /// Frame dimensions must equal the reference frame's. Default.
    #[default]
    Exact,
    /// Frame only has to contain the region.
    CoversRegion,
}

impl GeometryPolicy {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::CoversRegion => "covers_region",
        }
    }

    /// Whether a frame of size `frame` may be compared against a reference
    /// of size `baseline` over `region`.
    pub fn accepts(&self, baseline: (u32, u32), frame: (u32, u32), region: &Region) -> bool {
        match self {
            Self::Exact => frame == baseline,
            Self::CoversRegion => region.check(frame.0, frame.1).is_ok(),
        }
    }
}

impl FromStr for GeometryPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "exact" => Ok(Self::Exact),
            "covers_region" => Ok(Self::CoversRegion),
            _ => Err(ParsePolicyError {
                kind: "geometry policy",
                value: s.to_string(),
                expected: "exact, covers-region",
            }),
        }
    }
}

/// Settings for a single analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Alpha participation in color equality.
    pub alpha: AlphaPolicy,
    /// Sibling frame acceptance rule for sequence diffs.
    pub geometry: GeometryPolicy,
}

impl AnalysisConfig {
    pub const fn with_alpha(mut self, alpha: AlphaPolicy) -> Self {
        self.alpha = alpha;
        self
    }

    pub const fn with_geometry(mut self, geometry: GeometryPolicy) -> Self {
        self.geometry = geometry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compare_rgb_and_exact_geometry() {
        let config = AnalysisConfig::default();
        assert_eq!(config.alpha, AlphaPolicy::Ignore);
        assert_eq!(config.geometry, GeometryPolicy::Exact);
    }

    #[test]
    fn test_config_deserializes_partial_json() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"alpha": "include"}"#).expect("valid config");
        assert_eq!(config.alpha, AlphaPolicy::Include);
        assert_eq!(config.geometry, GeometryPolicy::Exact);

        let config: AnalysisConfig =
            serde_json::from_str(r#"{"geometry": "covers_region"}"#).expect("valid config");
        assert_eq!(config.geometry, GeometryPolicy::CoversRegion);
    }

    #[test]
    fn test_policies_parse_from_text() {
        assert_eq!("RGBA".parse::<AlphaPolicy>(), Ok(AlphaPolicy::Include));
        assert_eq!(
            "covers-region".parse::<GeometryPolicy>(),
            Ok(GeometryPolicy::CoversRegion)
        );
        assert!("sometimes".parse::<AlphaPolicy>().is_err());
    }

    #[test]
    fn test_geometry_acceptance() {
        let region = Region::new(0, 0, 2, 2);
        assert!(GeometryPolicy::Exact.accepts((4, 4), (4, 4), &region));
        assert!(!GeometryPolicy::Exact.accepts((4, 4), (5, 4), &region));
        assert!(GeometryPolicy::CoversRegion.accepts((4, 4), (2, 3), &region));
        assert!(!GeometryPolicy::CoversRegion.accepts((4, 4), (1, 3), &region));
    }
}
