use ap_core::grid::{GlyphCell, GlyphGrid};
use ap_core::palette::{GlyphLut, Palette};
use ap_core::raster::Raster;

/// Render a raster as a structured glyph grid with per-cell color.
///
/// The glyph comes from the pixel's luminance and the color is the pixel's
/// original RGB — both from the same read, never from a separately
/// grayscaled copy. Flattening the result therefore equals a plain render of
/// the same raster.
///
/// # Example
/// ```
/// use ap_ascii::colored::render_grid;
/// use ap_core::palette::Palette;
/// use ap_core::raster::Raster;
///
/// let mut raster = Raster::new(1, 1);
/// raster.fill(255, 0, 0);
/// let grid = render_grid(&raster, Palette::Normal);
/// let cell = grid.lines[0][0];
/// assert_eq!((cell.r, cell.g, cell.b), (255, 0, 0));
/// ```
#[must_use]
pub fn render_grid(raster: &Raster, palette: Palette) -> GlyphGrid {
    let lut = GlyphLut::for_palette(palette);
    let mut grid = GlyphGrid::with_rows(raster.height as usize);
    for y in 0..raster.height {
        let mut line = Vec::with_capacity(raster.width as usize);
        for x in 0..raster.width {
            let (r, g, b, _) = raster.pixel(x, y);
            line.push(GlyphCell {
                ch: lut.map(ap_core::luma::luma(r, g, b)),
                r,
                g,
                b,
            });
        }
        grid.lines.push(line);
    }
    grid
}

/// Render a raster as an ANSI truecolor string for terminal display.
///
/// Each glyph is prefixed with a 24-bit foreground escape
/// (`ESC[38;2;R;G;Bm`); each row ends with a reset (`ESC[0m`) before the
/// line break.
#[must_use]
pub fn render_ansi(raster: &Raster, palette: Palette) -> String {
    let lut = GlyphLut::for_palette(palette);
    let mut out = String::with_capacity(raster.width as usize * raster.height as usize * 20);
    for y in 0..raster.height {
        for x in 0..raster.width {
            let (r, g, b, _) = raster.pixel(x, y);
            push_ansi_glyph(&mut out, lut.map(ap_core::luma::luma(r, g, b)), r, g, b);
        }
        out.push_str("\x1b[0m\n");
    }
    out
}

/// Rebuild the terminal representation of an already-rendered grid.
///
/// Same escape layout as [`render_ansi`]; used when frames are stored as
/// grids and replayed to a terminal.
#[must_use]
pub fn ansi_from_grid(grid: &GlyphGrid) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.max_width() * 20 + 5));
    for line in &grid.lines {
        for cell in line {
            push_ansi_glyph(&mut out, cell.ch, cell.r, cell.g, cell.b);
        }
        out.push_str("\x1b[0m\n");
    }
    out
}

#[inline]
fn push_ansi_glyph(out: &mut String, ch: char, r: u8, g: u8, b: u8) {
    use std::fmt::Write;
    let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{ch}");
}
