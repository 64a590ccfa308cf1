use ap_core::palette::{GlyphLut, Palette};
use ap_core::raster::Raster;

/// Render a raster as plain ASCII art.
///
/// Row-major walk, one glyph per pixel, one `\n` per row — the output ends
/// with exactly one terminator for the last row, no extra blank line.
///
/// # Example
/// ```
/// use ap_ascii::plain::render_plain;
/// use ap_core::palette::Palette;
/// use ap_core::raster::Raster;
///
/// let mut raster = Raster::new(2, 2);
/// raster.fill(255, 255, 255);
/// assert_eq!(render_plain(&raster, Palette::Normal), "@@\n@@\n");
/// ```
#[must_use]
pub fn render_plain(raster: &Raster, palette: Palette) -> String {
    let lut = GlyphLut::for_palette(palette);
    // Unicode palettes use up to 3 bytes per glyph.
    let mut out =
        String::with_capacity((raster.width as usize * 3 + 1) * raster.height as usize);
    for y in 0..raster.height {
        for x in 0..raster.width {
            out.push(lut.map(raster.luma_at(x, y)));
        }
        out.push('\n');
    }
    out
}
