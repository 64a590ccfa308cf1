use anyhow::{Context, Result};
use ap_core::error::CoreError;
use ap_core::raster::Raster;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Vertical compression applied after aspect-preserving scaling: terminal
/// glyph cells are roughly twice as tall as wide.
const CELL_ASPECT: f64 = 0.5;

/// Character-target height for a raster scaled to `target_width` columns.
///
/// `scale = w/ow`, `nh = round(oh·scale)`, then `round(nh·0.5)` for the
/// glyph cell aspect, floored at one row.
///
/// # Example
/// ```
/// use ap_source::resize::char_height;
/// assert_eq!(char_height(100, 50, 40), 10);
/// ```
#[must_use]
pub fn char_height(orig_width: u32, orig_height: u32, target_width: u32) -> u32 {
    let scale = f64::from(target_width) / f64::from(orig_width);
    let scaled = (f64::from(orig_height) * scale).round();
    ((scaled * CELL_ASPECT).round() as u32).max(1)
}

/// Resizer réutilisable wrappant fast_image_resize.
///
/// Pré-alloue le resizer ; Lanczos3 — nearest-neighbor dégrade trop la
/// sélection de glyphes sur les downscales agressifs.
///
/// # Example
/// ```
/// use ap_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (fast_image_resize wants &mut on input).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into a new raster of the given dimensions.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` on a zero-sized source or
    /// target, or an error if the resample itself fails.
    pub fn resize(&mut self, src: &Raster, width: u32, height: u32) -> Result<Raster> {
        if src.width == 0 || src.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: src.width,
                height: src.height,
            }
            .into());
        }
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height }.into());
        }

        let mut dst = Raster::new(width, height);
        if src.width == width && src.height == height {
            dst.data.copy_from_slice(&src.data);
            return Ok(dst);
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x4)
                .context("invalid source dimensions")?;
        let mut dst_image = Image::from_slice_u8(width, height, &mut dst.data, PixelType::U8x4)
            .context("invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("resize failed")?;

        Ok(dst)
    }

    /// Resize for character output: width becomes `target_width` columns,
    /// height follows [`char_height`].
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if the source or the target
    /// width is zero.
    ///
    /// # Example
    /// ```
    /// use ap_core::raster::Raster;
    /// use ap_source::resize::Resizer;
    /// let src = Raster::new(100, 50);
    /// let mut r = Resizer::new();
    /// let out = r.resize_for_chars(&src, 40).unwrap();
    /// assert_eq!((out.width, out.height), (40, 10));
    /// ```
    pub fn resize_for_chars(&mut self, src: &Raster, target_width: u32) -> Result<Raster> {
        if target_width == 0 || src.width == 0 {
            return Err(CoreError::InvalidDimensions {
                width: target_width,
                height: src.height,
            }
            .into());
        }
        let height = char_height(src.width, src.height, target_width);
        self.resize(src, target_width, height)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
