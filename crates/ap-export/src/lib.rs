/// Document export for asciipix: rendered glyph grids and plain art as
/// self-contained SVG.
pub mod svg;

pub use svg::{svg_from_grid, svg_from_text};
