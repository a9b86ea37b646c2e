//! Sequence diffs driven from image files.
//!
//! Decodes the reference image and its siblings once each, hands the frames
//! to [`spriteforge_core::transparent_sprite`], and maps frame indices in the
//! result back to file paths.

use std::path::{Path, PathBuf};

use spriteforge_core::{
    AnalysisConfig, CoreError, GeometryMismatch, Hooks, RasterImage, Region, transparent_sprite,
};

use crate::error::{ExcludedFrame, ExclusionReason, SequenceLoadError};
use crate::loader::load_image;

/// Share of the progress range spent decoding files.
const DECODE_SHARE: f32 = 0.4;

/// Output of [`transparent_sprite_from_paths`].
#[derive(Debug)]
pub struct SpriteFromFiles {
    /// Region-sized image: reference RGB, alpha 255 where constant.
    pub image: RasterImage,
    /// Files that took part, reference first.
    pub compared: Vec<PathBuf>,
    /// Siblings left out, with the reason.
    pub excluded: Vec<ExcludedFrame>,
}

/// Decoded frames with their source paths, index-aligned.
struct DecodedFrames {
    frames: Vec<RasterImage>,
    paths: Vec<PathBuf>,
    skipped: Vec<ExcludedFrame>,
}

/// Decode `reference` and `siblings`, then compare `region` across them.
///
/// A reference that fails to decode is fatal. Siblings that fail to decode
/// or whose dimensions are rejected by the geometry policy are skipped with
/// a warning and reported in [`SpriteFromFiles::excluded`]. The reference is
/// ignored if it also appears in `siblings`.
pub fn transparent_sprite_from_paths(
    reference: &Path,
    siblings: &[PathBuf],
    region: Region,
    config: &AnalysisConfig,
    hooks: &mut Hooks<'_>,
) -> Result<SpriteFromFiles, SequenceLoadError> {
    let decoded = hooks.phase(0.0, DECODE_SHARE, |h| {
        decode_frames(reference, siblings, region, h)
    })?;
    let DecodedFrames {
        frames,
        paths,
        mut skipped,
    } = decoded;

    let result = hooks.phase(DECODE_SHARE, 1.0, |h| {
        transparent_sprite(&frames, region, config, h)
    });

    match result {
        Ok(diff) => {
            skipped.extend(geometry_exclusions(&diff.excluded, &paths));
            let compared = paths
                .into_iter()
                .enumerate()
                .filter(|(index, _)| !diff.excluded.iter().any(|m| m.index == *index))
                .map(|(_, path)| path)
                .collect::<Vec<_>>();
            tracing::info!(
                frames = compared.len(),
                excluded = skipped.len(),
                constant = diff.constant_pixels(),
                %region,
                "sequence diff complete"
            );
            Ok(SpriteFromFiles {
                image: diff.image,
                compared,
                excluded: skipped,
            })
        }
        Err(CoreError::InsufficientSequence { usable, excluded }) => {
            skipped.extend(geometry_exclusions(&excluded, &paths));
            Err(SequenceLoadError::Insufficient {
                usable,
                excluded: skipped,
            })
        }
        Err(err) => Err(SequenceLoadError::Core(err)),
    }
}

fn decode_frames(
    reference: &Path,
    siblings: &[PathBuf],
    region: Region,
    hooks: &mut Hooks<'_>,
) -> Result<DecodedFrames, SequenceLoadError> {
    hooks.checkpoint().map_err(SequenceLoadError::Core)?;

    let first = load_image(reference).map_err(SequenceLoadError::Reference)?;
    region.validate(&first).map_err(SequenceLoadError::Core)?;

    let siblings: Vec<&PathBuf> = siblings.iter().filter(|p| p.as_path() != reference).collect();
    let total = siblings.len() as u64 + 1;
    hooks.advance(1, total).map_err(SequenceLoadError::Core)?;

    let mut frames = vec![first];
    let mut paths = vec![reference.to_path_buf()];
    let mut skipped = Vec::new();

    for (done, path) in (2u64..).zip(siblings) {
        match load_image(path) {
            Ok(frame) => {
                frames.push(frame);
                paths.push(path.clone());
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping undecodable image");
                skipped.push(ExcludedFrame {
                    path: path.clone(),
                    reason: ExclusionReason::Undecodable(err),
                });
            }
        }
        hooks.advance(done, total).map_err(SequenceLoadError::Core)?;
    }

    Ok(DecodedFrames {
        frames,
        paths,
        skipped,
    })
}

fn geometry_exclusions<'a>(
    mismatches: &'a [GeometryMismatch],
    paths: &'a [PathBuf],
) -> impl Iterator<Item = ExcludedFrame> + 'a {
    mismatches.iter().map(move |mismatch| {
        let path = paths[mismatch.index].clone();
        tracing::warn!(
            path = %path.display(),
            expected = ?mismatch.expected,
            found = ?mismatch.found,
            "skipping image with mismatched geometry"
        );
        ExcludedFrame {
            path,
            reason: ExclusionReason::Geometry {
                expected: mismatch.expected,
                found: mismatch.found,
            },
        }
    })
}
