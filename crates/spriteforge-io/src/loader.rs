//! Image decoding and encoding at the edge of the analysis core.

use std::path::{Path, PathBuf};

use spriteforge_core::image::{RasterImage, Rgba};

use crate::error::ImageLoadError;

/// Load an image from disk and convert it to the core `RasterImage` format.
///
/// Supports the formats enabled on the `image` crate (PNG, JPEG, BMP, GIF).
/// Every image is converted to RGBA8; sources without alpha come out opaque.
pub fn load_image(path: &Path) -> Result<RasterImage, ImageLoadError> {
    let img = image::open(path).map_err(|source| ImageLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let color = img.color();
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();

    let pixels: Vec<Rgba> = bytemuck::cast_slice(rgba.as_raw()).to_vec();
    tracing::debug!(path = %path.display(), width, height, ?color, "decoded image");

    Ok(RasterImage::from_pixels(width, height, pixels)?)
}

/// Encode `image` as PNG at `path`, choosing nothing about the name.
///
/// Zero-area images (an empty palette strip) are refused with
/// [`ImageLoadError::EmptyImage`]; PNG cannot represent them.
pub fn save_png(image: &RasterImage, path: &Path) -> Result<(), ImageLoadError> {
    if image.is_empty() {
        return Err(ImageLoadError::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    let bytes: Vec<u8> = bytemuck::cast_slice(image.pixels()).to_vec();
    let buffer = image::RgbaImage::from_raw(image.width(), image.height(), bytes)
        .ok_or(ImageLoadError::BufferLayout {
            width: image.width(),
            height: image.height(),
        })?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| ImageLoadError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), width = image.width(), height = image.height(), "wrote png");
    Ok(())
}

/// Files next to `reference` that share its extension, sorted by file name.
///
/// The extension match ignores case; `reference` itself is left out.
pub fn sibling_images(reference: &Path) -> Result<Vec<PathBuf>, ImageLoadError> {
    let Some(extension) = reference.extension().and_then(|e| e.to_str()) else {
        return Ok(Vec::new());
    };
    let directory = match reference.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let own_name = reference.file_name();

    let mut siblings = Vec::new();
    for entry in std::fs::read_dir(&directory)? {
        let path = entry?.path();
        if !path.is_file() || path.file_name() == own_name {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches {
            siblings.push(path);
        }
    }
    siblings.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(
        directory = %directory.display(),
        count = siblings.len(),
        "found sibling images"
    );
    Ok(siblings)
}
