//! PNG loading and saving at the filesystem edge

use crate::io::error::{HerringboneError, Result};
use image::RgbImage;
use std::path::Path;

/// Load an image file as 8-bit RGB, dropping any alpha channel
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|source| HerringboneError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.into_rgb8())
}

/// Save an RGB image, creating the parent directory if needed
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageExport` if the image cannot be encoded or written.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| HerringboneError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(path)
        .map_err(|e| HerringboneError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
