use std::path::PathBuf;

use anyhow::Result;
use ap_core::options::RenderOptions;
use clap::Parser;

/// asciipix — image and video to ASCII art, with color and SVG export.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source : chemin vers une image (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Source : chemin vers une vidéo. Requiert ffmpeg/ffprobe en PATH.
    #[arg(long)]
    pub video: Option<PathBuf>,

    /// Output width in characters. Non-positive values fall back to the
    /// default (100).
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Palette: normal, dense, sparse, or unicode. Unknown names behave
    /// like normal.
    #[arg(long)]
    pub palette: Option<String>,

    /// Keep per-glyph color (ANSI truecolor on the terminal, rgb() fills in
    /// SVG, structured cells in JSON).
    #[arg(long, default_value_t = false)]
    pub color: bool,

    /// Export an SVG document to this path instead of printing text.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// SVG font size in points.
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Video sampling rate in frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Emit structured JSON (glyph grid, or frames + metadata for video).
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write output to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Optional TOML config file with render options.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that exactly one source is provided.
    ///
    /// # Errors
    /// Returns an error if zero or both sources are specified.
    pub fn validate_source(&self) -> Result<()> {
        match (self.image.is_some(), self.video.is_some()) {
            (false, false) => {
                anyhow::bail!("no source specified; use --image or --video")
            }
            (true, true) => {
                anyhow::bail!("one source at a time; use --image OR --video")
            }
            _ => Ok(()),
        }
    }

    /// Resolve the effective render options: config file (if any), then CLI
    /// overrides on top.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    pub fn resolve_options(&self) -> Result<RenderOptions> {
        let mut options = match &self.config {
            Some(path) => RenderOptions::from_path(path)?,
            None => RenderOptions::default(),
        };

        match self.width {
            Some(w) if w > 0 => options.width = w as u32,
            Some(w) => log::warn!("ignoring non-positive width {w}, using {}", options.width),
            None => {}
        }
        if let Some(ref palette) = self.palette {
            options.palette.clone_from(palette);
        }
        if self.color {
            options.color = true;
        }
        if let Some(font_size) = self.font_size {
            options.font_size = font_size;
        }
        if let Some(fps) = self.fps {
            options.sample_fps = fps;
        }

        Ok(options)
    }
}
