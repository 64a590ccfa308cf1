/// Perceptual luminance of an RGB triple, BT.601 weights.
///
/// `Y = 0.299·R + 0.587·G + 0.114·B`, truncated to an integer. The float
/// math and the truncating cast are deliberate: downstream glyph selection
/// depends on this exact value, so it must not be "improved" into a rounding
/// or integer-only variant.
///
/// # Example
/// ```
/// use ap_core::luma::luma;
/// assert_eq!(luma(0, 0, 0), 0);
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(255, 0, 0), 76);
/// ```
#[inline(always)]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
    }

    #[test]
    fn luma_known_values() {
        assert_eq!(luma(255, 0, 0), 76); // 0.299 * 255 = 76.245
        assert_eq!(luma(0, 255, 0), 149); // 0.587 * 255 = 149.685
        assert_eq!(luma(0, 0, 255), 29); // 0.114 * 255 = 29.07
        // Gray truncates one below the channel value when the weighted sum
        // lands just under the integer (127.999…). Reference parity.
        assert_eq!(luma(128, 128, 128), 127);
    }

    #[test]
    fn luma_in_range_and_monotonic_per_channel() {
        // Each channel independently non-decreasing, sampled over the cube.
        for base in (0..=255u16).step_by(17) {
            let base = base as u8;
            let mut prev = luma(0, base, base);
            for r in 0..=255u8 {
                let y = luma(r, base, base);
                assert!(y >= prev);
                prev = y;
            }
            let mut prev = luma(base, 0, base);
            for g in 0..=255u8 {
                let y = luma(base, g, base);
                assert!(y >= prev);
                prev = y;
            }
            let mut prev = luma(base, base, 0);
            for b in 0..=255u8 {
                let y = luma(base, base, b);
                assert!(y >= prev);
                prev = y;
            }
        }
    }
}
