use serde::{Deserialize, Serialize};

/// One rendered output unit: a glyph plus the RGB color it was sampled from.
///
/// Serializes as `{"char": "…", "r": …, "g": …, "b": …}` — the wire format
/// consumed by front ends.
///
/// # Example
/// ```
/// use ap_core::grid::GlyphCell;
/// let cell = GlyphCell { ch: '@', r: 255, g: 0, b: 0 };
/// let json = serde_json::to_string(&cell).unwrap();
/// assert_eq!(json, r#"{"char":"@","r":255,"g":0,"b":0}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphCell {
    /// Glyphe à afficher.
    #[serde(rename = "char")]
    pub ch: char,
    /// Red channel of the source pixel.
    pub r: u8,
    /// Green channel of the source pixel.
    pub g: u8,
    /// Blue channel of the source pixel.
    pub b: u8,
}

/// Fully rendered colored ASCII art: rows of glyph cells, top-to-bottom,
/// left-to-right.
///
/// Invariant: every row has the same length (the resized character width).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphGrid {
    /// Rows of cells.
    pub lines: Vec<Vec<GlyphCell>>,
}

impl GlyphGrid {
    /// Grid with pre-allocated row capacity.
    #[must_use]
    pub fn with_rows(rows: usize) -> Self {
        Self {
            lines: Vec::with_capacity(rows),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest row in glyphs. Zero for an empty grid.
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.lines.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Flatten to plain text, dropping color. One `\n` per row.
    ///
    /// This must equal a plain render of the same raster — the glyph choice
    /// never depends on whether color is kept.
    ///
    /// # Example
    /// ```
    /// use ap_core::grid::{GlyphCell, GlyphGrid};
    /// let grid = GlyphGrid {
    ///     lines: vec![vec![GlyphCell { ch: '@', r: 0, g: 0, b: 0 }]],
    /// };
    /// assert_eq!(grid.to_plain_text(), "@\n");
    /// ```
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::with_capacity(self.lines.len() * (self.max_width() + 1));
        for line in &self.lines {
            for cell in line {
                out.push(cell.ch);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ch: char) -> GlyphCell {
        GlyphCell {
            ch,
            r: 1,
            g: 2,
            b: 3,
        }
    }

    #[test]
    fn flatten_drops_color_keeps_rows() {
        let grid = GlyphGrid {
            lines: vec![vec![cell('a'), cell('b')], vec![cell('c'), cell('d')]],
        };
        assert_eq!(grid.to_plain_text(), "ab\ncd\n");
    }

    #[test]
    fn empty_grid_flattens_to_empty_string() {
        assert_eq!(GlyphGrid::default().to_plain_text(), "");
    }

    #[test]
    fn serde_wire_format() {
        let grid = GlyphGrid {
            lines: vec![vec![GlyphCell {
                ch: '░',
                r: 9,
                g: 8,
                b: 7,
            }]],
        };
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"lines":[[{"char":"░","r":9,"g":8,"b":7}]]}"#);
        let back: GlyphGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn max_width_over_uneven_rows() {
        let grid = GlyphGrid {
            lines: vec![vec![cell('a')], vec![cell('b'), cell('c')]],
        };
        assert_eq!(grid.max_width(), 2);
        assert_eq!(grid.height(), 2);
    }
}
