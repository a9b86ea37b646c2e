use std::path::PathBuf;

use spriteforge_core::CoreError;

/// Errors that can occur while reading or writing image files.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("refusing to write empty image to {}", .path.display())]
    EmptyImage { path: PathBuf },
    #[error("pixel buffer does not fit {width}x{height}")]
    BufferLayout { width: u32, height: u32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// A sibling file that did not take part in a sequence diff.
#[derive(Debug)]
pub struct ExcludedFrame {
    pub path: PathBuf,
    pub reason: ExclusionReason,
}

#[derive(Debug)]
pub enum ExclusionReason {
    /// The file could not be decoded.
    Undecodable(ImageLoadError),
    /// Dimensions did not satisfy the geometry policy.
    Geometry { expected: (u32, u32), found: (u32, u32) },
}

impl std::fmt::Display for ExcludedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            ExclusionReason::Undecodable(err) => write!(f, "{}: {err}", self.path.display()),
            ExclusionReason::Geometry { expected, found } => write!(
                f,
                "{}: {}x{} does not match {}x{}",
                self.path.display(),
                found.0,
                found.1,
                expected.0,
                expected.1
            ),
        }
    }
}

/// Errors from building and diffing a sequence of image files.
#[derive(Debug, thiserror::Error)]
pub enum SequenceLoadError {
    /// The reference image itself failed; nothing was compared.
    #[error("reference image: {0}")]
    Reference(#[source] ImageLoadError),
    #[error(
        "need at least 2 usable images, found {usable} ({} excluded)",
        .excluded.len()
    )]
    Insufficient {
        usable: usize,
        excluded: Vec<ExcludedFrame>,
    },
    #[error(transparent)]
    Core(CoreError),
}
