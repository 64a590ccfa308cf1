use crate::luma::luma;

/// Decoded raster image. Pixels are RGBA row-major, 4 bytes per pixel.
///
/// Immutable once built; the pipeline never writes back into a source
/// raster, it produces new owned outputs.
///
/// # Example
/// ```
/// use ap_core::raster::Raster;
/// let r = Raster::new(10, 10);
/// assert_eq!(r.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct Raster {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Raster {
    /// Allocate a zeroed raster of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height * 4) as usize],
            width,
            height,
        }
    }

    /// Build a raster from an existing RGBA buffer.
    ///
    /// The buffer length must be `width × height × 4`; a mismatched buffer
    /// is truncated or zero-padded to fit.
    #[must_use]
    pub fn from_rgba(mut data: Vec<u8>, width: u32, height: u32) -> Self {
        let expected = (width * height * 4) as usize;
        data.resize(expected, 0);
        Self {
            data,
            width,
            height,
        }
    }

    /// Fill every pixel with one RGB color (alpha 255). Test scaffolding
    /// and procedural callers.
    ///
    /// # Example
    /// ```
    /// use ap_core::raster::Raster;
    /// let mut r = Raster::new(2, 2);
    /// r.fill(255, 255, 255);
    /// assert_eq!(r.rgb(1, 1), (255, 255, 255));
    /// ```
    pub fn fill(&mut self, r: u8, g: u8, b: u8) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = 255;
        }
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Accès au pixel (x, y) → (r, g, b), alpha ignoré.
    #[inline(always)]
    #[must_use]
    pub fn rgb(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let (r, g, b, _) = self.pixel(x, y);
        (r, g, b)
    }

    /// Brightness of the pixel at (x, y) via the shared luma formula.
    ///
    /// # Example
    /// ```
    /// use ap_core::raster::Raster;
    /// let mut r = Raster::new(1, 1);
    /// r.fill(255, 255, 255);
    /// assert_eq!(r.luma_at(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luma_at(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        luma(r, g, b)
    }
}
