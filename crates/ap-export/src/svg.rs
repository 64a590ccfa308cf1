use std::fmt::Write;

use ap_core::grid::GlyphGrid;

/// Approximate monospace glyph advance at a given font size: 0.6 × size,
/// integer math.
#[inline]
#[must_use]
fn char_width(font_size: u32) -> u32 {
    font_size * 6 / 10
}

fn svg_header(out: &mut String, width: u32, height: u32) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="background:black;">"#
    );
}

/// Export plain ASCII art as an SVG document.
///
/// One `<text>` element per row, white fill, monospace family, y advancing
/// by `font_size` from `font_size`. Empty input yields an empty string, not
/// an empty SVG shell.
///
/// # Example
/// ```
/// use ap_export::svg::svg_from_text;
/// assert_eq!(svg_from_text("", 12), "");
/// let doc = svg_from_text("@@\n@@\n", 12);
/// assert!(doc.starts_with("<svg"));
/// assert!(doc.ends_with("</svg>"));
/// ```
#[must_use]
pub fn svg_from_text(art: &str, font_size: u32) -> String {
    let trimmed = art.trim_end_matches('\n');
    if trimmed.is_empty() {
        return String::new();
    }
    let lines: Vec<&str> = trimmed.split('\n').collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let width = max_width as u32 * char_width(font_size);
    let height = lines.len() as u32 * font_size;

    let mut out = String::with_capacity(lines.len() * (max_width + 96));
    svg_header(&mut out, width, height);

    let mut y = font_size;
    for line in &lines {
        let _ = write!(
            out,
            r#"<text x="0" y="{y}" fill="white" font-family="monospace" font-size="{font_size}">"#
        );
        escape_xml_into(&mut out, line);
        out.push_str("</text>");
        y += font_size;
    }

    out.push_str("\n</svg>");
    out
}

/// Export a colored glyph grid as an SVG document.
///
/// One `<text>` element per cell, positioned at `x = column × 0.6·font_size`
/// with the cell's RGB as a CSS `rgb(r,g,b)` fill; x resets and y advances
/// by `font_size` at each row. A grid with zero rows yields an empty string.
///
/// # Example
/// ```
/// use ap_core::grid::GlyphGrid;
/// use ap_export::svg::svg_from_grid;
/// assert_eq!(svg_from_grid(&GlyphGrid::default(), 12), "");
/// ```
#[must_use]
pub fn svg_from_grid(grid: &GlyphGrid, font_size: u32) -> String {
    if grid.lines.is_empty() {
        return String::new();
    }

    let advance = char_width(font_size);
    let width = grid.max_width() as u32 * advance;
    let height = grid.height() as u32 * font_size;

    let mut out = String::with_capacity(grid.height() * (grid.max_width() * 96 + 16));
    svg_header(&mut out, width, height);

    let mut y = font_size;
    for line in &grid.lines {
        let mut x = 0u32;
        for cell in line {
            let _ = write!(
                out,
                r#"<text x="{x}" y="{y}" fill="rgb({},{},{})" font-family="monospace" font-size="{font_size}">"#,
                cell.r, cell.g, cell.b
            );
            escape_xml_char_into(&mut out, cell.ch);
            out.push_str("</text>");
            x += advance;
        }
        y += font_size;
    }

    out.push_str("\n</svg>");
    out
}

/// Escape the five XML special characters into `out`.
fn escape_xml_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        escape_xml_char_into(out, ch);
    }
}

fn escape_xml_char_into(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&apos;"),
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_core::grid::GlyphCell;

    fn cell(ch: char, r: u8, g: u8, b: u8) -> GlyphCell {
        GlyphCell { ch, r, g, b }
    }

    #[test]
    fn empty_inputs_yield_empty_strings() {
        assert_eq!(svg_from_text("", 12), "");
        assert_eq!(svg_from_text("\n\n", 12), "");
        assert_eq!(svg_from_grid(&GlyphGrid::default(), 12), "");
    }

    #[test]
    fn plain_layout_and_dimensions() {
        let doc = svg_from_text("@@@\n@@@\n", 10);
        // 3 glyphs × (10·6/10) = 18 wide, 2 rows × 10 = 20 tall.
        assert!(doc.contains(r#"width="18" height="20""#));
        assert!(doc.contains(r#"style="background:black;""#));
        assert!(doc.contains(r#"<text x="0" y="10" fill="white" font-family="monospace" font-size="10">@@@</text>"#));
        assert!(doc.contains(r#"y="20""#));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn colored_layout_per_cell() {
        let grid = GlyphGrid {
            lines: vec![
                vec![cell('a', 1, 2, 3), cell('b', 4, 5, 6)],
                vec![cell('c', 7, 8, 9), cell('d', 10, 11, 12)],
            ],
        };
        let doc = svg_from_grid(&grid, 10);
        assert!(doc.contains(r#"<text x="0" y="10" fill="rgb(1,2,3)" font-family="monospace" font-size="10">a</text>"#));
        assert!(doc.contains(r#"<text x="6" y="10" fill="rgb(4,5,6)""#));
        // x resets at the new row.
        assert!(doc.contains(r#"<text x="0" y="20" fill="rgb(7,8,9)""#));
        assert!(doc.contains(r#"<text x="6" y="20" fill="rgb(10,11,12)""#));
    }

    #[test]
    fn xml_escaping_round_trips() {
        let doc = svg_from_text("<&>\"'\n", 12);
        assert!(doc.contains("&lt;&amp;&gt;&quot;&apos;"));
        // No raw specials left in the text content.
        let body = doc
            .split_once('>')
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        assert!(!body.contains("<&"));
    }

    #[test]
    fn escaped_glyph_cell() {
        let grid = GlyphGrid {
            lines: vec![vec![cell('&', 0, 0, 0)]],
        };
        assert!(svg_from_grid(&grid, 12).contains(">&amp;</text>"));
    }

    #[test]
    fn canvas_uses_longest_row() {
        let doc = svg_from_text("@\n@@@@\n", 10);
        assert!(doc.contains(r#"width="24""#));
    }
}
