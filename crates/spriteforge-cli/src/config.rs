//! Runtime configuration for the command-line tool.
//!
//! Settings are layered: built-in defaults, then an optional JSON file
//! (`--config`), then `SPRITEFORGE_*` environment variables, then flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use spriteforge_core::AnalysisConfig;
use spriteforge_core::error::ParsePolicyError;

use crate::cli::GlobalArgs;

/// Log filter used when `SPRITEFORGE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

const ALPHA_VAR: &str = "SPRITEFORGE_ALPHA";
const GEOMETRY_VAR: &str = "SPRITEFORGE_GEOMETRY";
const LOG_VAR: &str = "SPRITEFORGE_LOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid ${var}: {source}")]
    Env {
        var: &'static str,
        source: ParsePolicyError,
    },
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Settings passed to every analysis call.
    pub analysis: AnalysisConfig,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
    /// Suppress progress lines.
    pub quiet: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            log_filter: std::env::var(LOG_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            quiet: false,
        }
    }
}

impl AppConfig {
    /// Apply the config file, environment, and flags on top of `self`.
    pub fn resolve(mut self, args: &GlobalArgs) -> Result<Self, ConfigError> {
        if let Some(path) = &args.config {
            self.analysis = load_analysis_config(path)?;
        }
        if let Some(alpha) = env_override(ALPHA_VAR)? {
            self.analysis.alpha = alpha;
        }
        if let Some(geometry) = env_override(GEOMETRY_VAR)? {
            self.analysis.geometry = geometry;
        }
        if let Some(alpha) = args.alpha {
            self.analysis.alpha = alpha;
        }
        if let Some(geometry) = args.geometry {
            self.analysis.geometry = geometry;
        }
        self.quiet |= args.quiet;

        tracing::debug!(
            alpha = self.analysis.alpha.label(),
            geometry = self.analysis.geometry.label(),
            "resolved analysis config"
        );
        Ok(self)
    }
}

/// Read an `AnalysisConfig` from JSON. Missing fields keep their defaults.
pub fn load_analysis_config(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn env_override<T>(var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr<Err = ParsePolicyError>,
{
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|source| ConfigError::Env { var, source }),
        Err(_) => Ok(None),
    }
}
