/// ASCII conversion engine for asciipix.
///
/// Walks a resized raster row by row and produces plain text, an ANSI
/// truecolor string, or a structured glyph grid. The glyph for a pixel and
/// its color always derive from the same RGB read.
pub mod colored;
pub mod plain;

pub use colored::{ansi_from_grid, render_ansi, render_grid};
pub use plain::render_plain;
