use std::path::Path;

use anyhow::{Context, Result};
use ap_core::raster::Raster;

/// Decode an image file into a raster.
///
/// Format is detected from the file content (PNG, JPEG, BMP, GIF).
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use ap_source::image::load_image;
/// let raster = load_image(std::path::Path::new("photo.png")).unwrap();
/// assert!(raster.width > 0);
/// ```
pub fn load_image(path: &Path) -> Result<Raster> {
    let img = image::open(path).with_context(|| format!("cannot load {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("loaded {} ({width}x{height})", path.display());
    Ok(Raster::from_rgba(rgba.into_raw(), width, height))
}

/// Decode an in-memory image (upload-style callers).
///
/// # Errors
/// Returns an error if the bytes are not a decodable image.
pub fn load_image_bytes(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory(bytes).context("cannot decode image bytes")?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Raster::from_rgba(rgba.into_raw(), width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_bytes() {
        // 2x1 PNG, white then red, built with the image crate itself.
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

        let raster = load_image_bytes(&bytes).unwrap();
        assert_eq!((raster.width, raster.height), (2, 1));
        assert_eq!(raster.rgb(0, 0), (255, 255, 255));
        assert_eq!(raster.rgb(1, 0), (255, 0, 0));
    }

    #[test]
    fn garbage_bytes_fail() {
        assert!(load_image_bytes(b"not an image").is_err());
    }
}
