use spriteforge_core::CoreError;
use spriteforge_io::{ImageLoadError, SequenceLoadError};

use crate::config::ConfigError;

/// Top-level failure of a command.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] ImageLoadError),
    #[error(transparent)]
    Sequence(#[from] SequenceLoadError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("background worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the command stopped because the user asked it to.
    pub fn is_canceled(&self) -> bool {
        matches!(
            self,
            Self::Core(CoreError::Canceled)
                | Self::Load(ImageLoadError::Core(CoreError::Canceled))
                | Self::Sequence(SequenceLoadError::Core(CoreError::Canceled))
        )
    }
}
