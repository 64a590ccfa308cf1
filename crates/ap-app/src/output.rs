use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ap_ascii::ansi_from_grid;

use crate::batch::{AsciiFrame, FrameContent};

/// Write rendered output to a file, or to stdout when no path is given.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn write_output(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("cannot write {}", path.display()))?;
            log::info!("wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes()).context("stdout write failed")?;
            log::debug!("emitted {} bytes", text.len());
        }
    }
    Ok(())
}

/// Terminal representation of a rendered frame: plain text as-is, colored
/// grids rebuilt as ANSI truecolor.
#[must_use]
pub fn frame_to_terminal(frame: &AsciiFrame) -> String {
    match &frame.content {
        FrameContent::Plain { ascii } => ascii.clone(),
        FrameContent::Colored { lines } => {
            let grid = ap_core::grid::GlyphGrid {
                lines: lines.clone(),
            };
            ansi_from_grid(&grid)
        }
    }
}
