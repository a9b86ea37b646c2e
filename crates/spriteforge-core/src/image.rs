//! Image representation for region analysis.

use std::slice::ChunksExactMut;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One RGBA8 pixel.
pub type Rgba = [u8; 4];

/// Owned RGBA8 raster, row-major, exactly `width × height` pixels.
///
/// Every analysis operation borrows images immutably and returns fresh
/// images, so a `RasterImage` can be shared freely between worker threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

/// A single pixel lookup with the coordinates that were actually read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSample {
    /// Column after clamping.
    pub x: u32,
    /// Row after clamping.
    pub y: u32,
    /// RGBA value at `(x, y)`.
    pub color: Rgba,
}

impl RasterImage {
    /// Wrap a decoded pixel buffer.
    ///
    /// Fails with [`CoreError::InvalidBuffer`] unless `pixels.len()` equals
    /// `width × height`. Zero-area images are allowed.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, CoreError> {
        if pixels.len() != width as usize * height as usize {
            return Err(CoreError::InvalidBuffer {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Buffer length is guaranteed by the caller.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Look up a pixel, clamping out-of-range (including negative)
    /// coordinates to the nearest edge.
    ///
    /// Returns `None` only for a zero-area image.
    pub fn sample_clamped(&self, x: i64, y: i64) -> Option<PixelSample> {
        if self.is_empty() {
            return None;
        }
        let x = x.clamp(0, i64::from(self.width) - 1) as u32;
        let y = y.clamp(0, i64::from(self.height) - 1) as u32;
        Some(PixelSample {
            x,
            y,
            color: self.pixels[self.index(x, y)],
        })
    }

    /// Columns `x0..x1` of row `y`. Bounds are the caller's responsibility.
    pub(crate) fn span(&self, y: u32, x0: u32, x1: u32) -> &[Rgba] {
        let start = self.index(x0, y);
        &self.pixels[start..start + (x1 - x0) as usize]
    }

    /// Full row `y`. Bounds are the caller's responsibility.
    pub(crate) fn row(&self, y: u32) -> &[Rgba] {
        self.span(y, 0, self.width)
    }

    pub(crate) fn rows_mut(&mut self) -> ChunksExactMut<'_, Rgba> {
        self.pixels.chunks_exact_mut(self.width.max(1) as usize)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
