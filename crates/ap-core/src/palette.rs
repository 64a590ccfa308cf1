use serde::{Deserialize, Serialize};

/// 10 glyphes — défaut, bon contraste (clair → dense).
pub const PALETTE_NORMAL: &str = " .:-=+*#%@";

/// 6 glyphes — denses uniquement, pas de blanc.
pub const PALETTE_DENSE: &str = ".oO0@#";

/// 6 glyphes — très léger, pour fonds clairs.
pub const PALETTE_SPARSE: &str = " .'`^\"";

/// Blocs Unicode — light shade → full block.
pub const PALETTE_UNICODE: &str = "░▒▓█";

/// Named glyph palette, ordered lightest → darkest visual weight.
///
/// Unknown names resolve to [`Palette::Normal`]: the fallback is part of the
/// public contract (callers pass user-supplied strings straight through),
/// so `from_name` is total and never errors.
///
/// # Example
/// ```
/// use ap_core::palette::Palette;
/// assert_eq!(Palette::from_name("dense"), Palette::Dense);
/// assert_eq!(Palette::from_name("bogus"), Palette::Normal);
/// assert_eq!(Palette::default(), Palette::Normal);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// `" .:-=+*#%@"` — default.
    #[default]
    Normal,
    /// `".oO0@#"`.
    Dense,
    /// `" .'` backtick `^\""`.
    Sparse,
    /// `░▒▓█`.
    Unicode,
}

impl Palette {
    /// Resolve a palette from its user-facing name. Unknown names fall back
    /// to `Normal` silently.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "dense" => Self::Dense,
            "sparse" => Self::Sparse,
            "unicode" => Self::Unicode,
            _ => Self::Normal,
        }
    }

    /// The ordered glyph sequence for this palette.
    #[must_use]
    pub fn glyphs(self) -> &'static str {
        match self {
            Self::Normal => PALETTE_NORMAL,
            Self::Dense => PALETTE_DENSE,
            Self::Sparse => PALETTE_SPARSE,
            Self::Unicode => PALETTE_UNICODE,
        }
    }

    /// User-facing name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Dense => "dense",
            Self::Sparse => "sparse",
            Self::Unicode => "unicode",
        }
    }
}

/// Lookup table mapping brightness [0..255] → glyph.
///
/// Pre-computed once per render for O(1) per-pixel cost. Indexing is
/// `b·(n-1)/255` in integer math, i.e. brightness 0 selects the first
/// (lightest) glyph and 255 the last (darkest). Glyphs are addressed by
/// Unicode code point, so multi-byte palettes work.
///
/// # Example
/// ```
/// use ap_core::palette::{GlyphLut, Palette};
/// let lut = GlyphLut::for_palette(Palette::Normal);
/// assert_eq!(lut.map(0), ' ');
/// assert_eq!(lut.map(255), '@');
/// ```
pub struct GlyphLut {
    lut: [char; 256],
}

impl GlyphLut {
    /// Build a LUT from a glyph sequence ordered lightest → darkest.
    ///
    /// An empty sequence falls back to a single space so brightness mapping
    /// stays total.
    #[must_use]
    pub fn new(glyphs: &str) -> Self {
        let chars: Vec<char> = glyphs.chars().collect();
        let mut lut = [' '; 256];
        if let Some(n) = chars.len().checked_sub(1) {
            for (i, slot) in lut.iter_mut().enumerate() {
                *slot = chars[i * n / 255];
            }
        }
        Self { lut }
    }

    /// Build the LUT for a named palette.
    #[must_use]
    pub fn for_palette(palette: Palette) -> Self {
        Self::new(palette.glyphs())
    }

    /// Map a brightness value [0..255] to a glyph.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, brightness: u8) -> char {
        self.lut[brightness as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_for_every_palette() {
        for palette in [
            Palette::Normal,
            Palette::Dense,
            Palette::Sparse,
            Palette::Unicode,
        ] {
            let chars: Vec<char> = palette.glyphs().chars().collect();
            let lut = GlyphLut::for_palette(palette);
            assert_eq!(lut.map(0), chars[0], "{}", palette.name());
            assert_eq!(lut.map(255), *chars.last().unwrap(), "{}", palette.name());
        }
    }

    #[test]
    fn unknown_name_behaves_like_normal() {
        let bogus = GlyphLut::for_palette(Palette::from_name("bogus"));
        let normal = GlyphLut::for_palette(Palette::Normal);
        for b in 0..=255u8 {
            assert_eq!(bogus.map(b), normal.map(b));
        }
    }

    #[test]
    fn lut_is_monotonic() {
        let chars: Vec<char> = PALETTE_NORMAL.chars().collect();
        let lut = GlyphLut::new(PALETTE_NORMAL);
        let mut prev_idx = 0usize;
        for b in 0..=255u8 {
            let idx = chars.iter().position(|&c| c == lut.map(b)).unwrap();
            assert!(idx >= prev_idx, "LUT not monotonic at brightness {b}");
            prev_idx = idx;
        }
    }

    #[test]
    fn index_formula_is_floor() {
        // floor(b/255 · (n-1)) for the 10-glyph palette: 0..=28 → 0, 29..=56 → 1, …
        let lut = GlyphLut::new(PALETTE_NORMAL);
        assert_eq!(lut.map(28), ' ');
        assert_eq!(lut.map(29), '.');
        assert_eq!(lut.map(254), '%');
    }

    #[test]
    fn unicode_palette_is_char_addressed() {
        let lut = GlyphLut::for_palette(Palette::Unicode);
        assert_eq!(lut.map(0), '░');
        assert_eq!(lut.map(255), '█');
    }

    #[test]
    fn empty_glyphs_fall_back_to_space() {
        let lut = GlyphLut::new("");
        assert_eq!(lut.map(0), ' ');
        assert_eq!(lut.map(255), ' ');
    }

    #[test]
    fn single_glyph_is_valid() {
        let lut = GlyphLut::new("#");
        assert_eq!(lut.map(0), '#');
        assert_eq!(lut.map(255), '#');
    }
}
