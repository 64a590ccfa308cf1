use anyhow::{Context, Result};
use ap_ascii::{render_grid, render_plain};
use ap_core::grid::GlyphCell;
use ap_core::palette::Palette;
use ap_core::raster::Raster;
use ap_source::resize::Resizer;
use rayon::prelude::*;
use serde::Serialize;

/// One rendered video frame, tagged with its position in the sequence.
///
/// `timestamp = index / sampled_fps`, in seconds.
#[derive(Debug, Serialize)]
pub struct AsciiFrame {
    /// Frame index, strictly increasing from 0.
    pub index: usize,
    /// Seconds from the start of the sampled sequence.
    pub timestamp: f64,
    /// Rendered art.
    #[serde(flatten)]
    pub content: FrameContent,
}

/// Rendered frame payload. Serializes as `{"ascii": …}` or `{"lines": …}`
/// to match the wire format of the plain and colored endpoints.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FrameContent {
    /// Plain ASCII art.
    Plain {
        /// Newline-separated glyph rows.
        ascii: String,
    },
    /// Colored glyph rows.
    Colored {
        /// Rows of glyph cells.
        lines: Vec<Vec<GlyphCell>>,
    },
}

/// Render a sequence of decoded frames to ASCII art.
///
/// Frames are independent, so they are processed in parallel and
/// reassembled in original order. Any single frame failure aborts the whole
/// batch — consumers rely on a gap-free, index-complete sequence.
///
/// # Errors
/// Returns an error if `sampled_fps` is zero or any frame fails to resize.
///
/// # Example
/// ```
/// use ap_app::batch::render_video;
/// use ap_core::palette::Palette;
/// use ap_core::raster::Raster;
///
/// let frames = vec![Raster::new(8, 8); 3];
/// let results = render_video(&frames, 4, Palette::Normal, 10, false).unwrap();
/// assert_eq!(results.len(), 3);
/// assert!((results[2].timestamp - 0.2).abs() < 1e-9);
/// ```
pub fn render_video(
    frames: &[Raster],
    width: u32,
    palette: Palette,
    sampled_fps: u32,
    color: bool,
) -> Result<Vec<AsciiFrame>> {
    if sampled_fps == 0 {
        anyhow::bail!("sampled fps must be > 0");
    }

    frames
        .par_iter()
        .enumerate()
        .map_init(Resizer::new, |resizer, (index, frame)| {
            let resized = resizer
                .resize_for_chars(frame, width)
                .with_context(|| format!("frame {index} failed to resize"))?;
            let content = if color {
                FrameContent::Colored {
                    lines: render_grid(&resized, palette).lines,
                }
            } else {
                FrameContent::Plain {
                    ascii: render_plain(&resized, palette),
                }
            };
            Ok(AsciiFrame {
                index,
                timestamp: index as f64 / f64::from(sampled_fps),
                content,
            })
        })
        .collect()
}
