use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::palette::Palette;

/// Render options shared by the CLI and embedding callers.
///
/// Loadable from TOML; every field has a sane default matching the service's
/// boundary defaults (width 100, normal palette, 12 pt SVG font, 10 fps
/// video sampling).
///
/// # Example
/// ```
/// use ap_core::options::RenderOptions;
/// let opts = RenderOptions::default();
/// assert_eq!(opts.width, 100);
/// assert_eq!(opts.font_size, 12);
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Target width in characters.
    pub width: u32,
    /// Palette name. Unknown names resolve to "normal".
    pub palette: String,
    /// Keep per-glyph color.
    pub color: bool,
    /// SVG font size in points.
    pub font_size: u32,
    /// Video sampling rate in frames per second.
    pub sample_fps: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 100,
            palette: "normal".to_string(),
            color: false,
            font_size: 12,
            sample_fps: 10,
        }
    }
}

impl RenderOptions {
    /// Load options from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// The resolved palette (silent fallback on unknown names).
    #[must_use]
    pub fn resolved_palette(&self) -> Palette {
        Palette::from_name(&self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_boundary_contract() {
        let opts = RenderOptions::default();
        assert_eq!(opts.width, 100);
        assert_eq!(opts.palette, "normal");
        assert!(!opts.color);
        assert_eq!(opts.font_size, 12);
        assert_eq!(opts.sample_fps, 10);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let opts: RenderOptions = toml::from_str("width = 80\npalette = \"unicode\"").unwrap();
        assert_eq!(opts.width, 80);
        assert_eq!(opts.resolved_palette(), Palette::Unicode);
        assert_eq!(opts.font_size, 12);
    }

    #[test]
    fn unknown_palette_name_resolves_to_normal() {
        let opts: RenderOptions = toml::from_str("palette = \"bogus\"").unwrap();
        assert_eq!(opts.resolved_palette(), Palette::Normal);
    }
}
