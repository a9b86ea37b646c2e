//! Static-pixel extraction across a sequence of frames.
//!
//! The same region is compared across every frame. A pixel is *constant*
//! when all frames agree on its color, and *varying* otherwise. The output
//! keeps the reference frame's RGB and encodes constancy in alpha: 255 for
//! constant, 0 for varying. Sprites drawn over a changing background come
//! out opaque while the background drops away.
//!
//! # Algorithm
//! For each pixel of the region, compare every other frame against the
//! reference frame's value and stop at the first disagreement. No per-pixel
//! history is kept.
//!
//! # Complexity
//! O(frames × region area) time, O(frames) extra space per row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorKey;
use crate::config::AnalysisConfig;
use crate::crop::copy_region;
use crate::error::CoreError;
use crate::hooks::Hooks;
use crate::image::{RasterImage, Rgba};
use crate::region::Region;

/// A frame left out of a sequence diff because of its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryMismatch {
    /// Position of the frame in the input sequence.
    pub index: usize,
    /// Reference frame dimensions.
    pub expected: (u32, u32),
    /// This frame's dimensions.
    pub found: (u32, u32),
}

impl fmt::Display for GeometryMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {} is {}x{}, expected {}x{}",
            self.index, self.found.0, self.found.1, self.expected.0, self.expected.1
        )
    }
}

/// Result of [`transparent_sprite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDiff {
    /// Region-sized image: reference RGB, alpha 255 where constant.
    pub image: RasterImage,
    /// Frames skipped for geometry, in input order.
    pub excluded: Vec<GeometryMismatch>,
    /// Frames that took part, reference included.
    pub frames_compared: usize,
}

impl SequenceDiff {
    /// Number of pixels that never changed.
    pub fn constant_pixels(&self) -> usize {
        self.image.pixels().iter().filter(|px| px[3] == 255).count()
    }
}

/// Compare `region` across `sequence` and make varying pixels transparent.
///
/// `sequence[0]` is the reference frame: its dimensions are the baseline and
/// its RGB fills the output. Other frames rejected by
/// [`GeometryPolicy`](crate::config::GeometryPolicy) are excluded and listed
/// in [`SequenceDiff::excluded`]. Fewer than two usable frames is
/// [`CoreError::InsufficientSequence`].
pub fn transparent_sprite(
    sequence: &[RasterImage],
    region: Region,
    config: &AnalysisConfig,
    hooks: &mut Hooks<'_>,
) -> Result<SequenceDiff, CoreError> {
    let Some((reference, rest)) = sequence.split_first() else {
        return Err(CoreError::InsufficientSequence {
            usable: 0,
            excluded: Vec::new(),
        });
    };
    region.validate(reference)?;

    let baseline = reference.dimensions();
    let mut frames = Vec::with_capacity(rest.len());
    let mut excluded = Vec::new();
    for (index, frame) in (1..).zip(rest) {
        if config.geometry.accepts(baseline, frame.dimensions(), &region) {
            frames.push(frame);
        } else {
            excluded.push(GeometryMismatch {
                index,
                expected: baseline,
                found: frame.dimensions(),
            });
        }
    }
    if frames.is_empty() {
        return Err(CoreError::InsufficientSequence {
            usable: 1,
            excluded,
        });
    }

    let policy = config.alpha;
    let total = u64::from(region.height);
    let mut image = copy_region(reference, region);
    let mut spans: Vec<&[Rgba]> = Vec::with_capacity(frames.len());

    for (row_offset, row) in (0u32..).zip(image.rows_mut()) {
        hooks.checkpoint()?;

        let y = region.y + row_offset;
        spans.clear();
        spans.extend(frames.iter().map(|&f| f.span(y, region.x, region.right())));

        for (col, px) in row.iter_mut().enumerate() {
            let expected = ColorKey::from_pixel(*px, policy);
            let constant = spans
                .iter()
                .all(|span| ColorKey::from_pixel(span[col], policy) == expected);
            px[3] = if constant { 255 } else { 0 };
        }

        hooks.report((u64::from(row_offset) + 1) as f32 / total as f32);
    }

    hooks.finish();
    Ok(SequenceDiff {
        image,
        excluded,
        frames_compared: frames.len() + 1,
    })
}
