/// Shared types and conversion primitives for asciipix.
///
/// This crate contains the pieces every other crate agrees on: the raster
/// pixel buffer, the luminance formula, the glyph palettes, the rendered
/// glyph grid, errors, and render options.
pub mod error;
pub mod grid;
pub mod luma;
pub mod options;
pub mod palette;
pub mod raster;

pub use error::CoreError;
pub use grid::{GlyphCell, GlyphGrid};
pub use luma::luma;
pub use options::RenderOptions;
pub use palette::{GlyphLut, Palette};
pub use raster::Raster;
