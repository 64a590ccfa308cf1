use std::path::Path;

use anyhow::Result;
use ap_app::batch::render_video;
use ap_app::cli::Cli;
use ap_app::output::{frame_to_terminal, write_output};
use ap_ascii::{render_ansi, render_grid, render_plain};
use ap_core::options::RenderOptions;
use ap_core::palette::Palette;
use ap_export::{svg_from_grid, svg_from_text};
use ap_source::resize::Resizer;
use ap_source::video::{VideoMeta, MAX_DURATION_SECS};
use clap::Parser;
use serde::Serialize;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider la source
    cli.validate_source()?;

    // 4. Résoudre les options (config TOML + overrides CLI)
    let options = cli.resolve_options()?;
    let palette = options.resolved_palette();

    // 5. Dispatch
    if let Some(ref path) = cli.image {
        run_image(&cli, &options, palette, path)
    } else if let Some(ref path) = cli.video {
        run_video(&cli, &options, palette, path)
    } else {
        unreachable!("validate_source guarantees a source")
    }
}

fn run_image(cli: &Cli, options: &RenderOptions, palette: Palette, path: &Path) -> Result<()> {
    let raster = ap_source::image::load_image(path)?;
    let mut resizer = Resizer::new();
    let resized = resizer.resize_for_chars(&raster, options.width)?;
    log::info!(
        "{}x{} → {}x{} chars, palette {}",
        raster.width,
        raster.height,
        resized.width,
        resized.height,
        palette.name()
    );

    if let Some(ref svg_path) = cli.svg {
        let doc = if options.color {
            svg_from_grid(&render_grid(&resized, palette), options.font_size)
        } else {
            svg_from_text(&render_plain(&resized, palette), options.font_size)
        };
        return write_output(&doc, Some(svg_path.as_path()));
    }

    if cli.json {
        let json = if options.color {
            serde_json::to_string(&render_grid(&resized, palette))?
        } else {
            serde_json::to_string(&serde_json::json!({
                "ascii": render_plain(&resized, palette),
            }))?
        };
        return write_output(&json, cli.out.as_deref());
    }

    let text = if options.color {
        render_ansi(&resized, palette)
    } else {
        render_plain(&resized, palette)
    };
    write_output(&text, cli.out.as_deref())
}

/// JSON envelope for a converted video: frames plus the probe metadata.
#[derive(Serialize)]
struct VideoOutput<'a> {
    frames: &'a [ap_app::AsciiFrame],
    metadata: &'a VideoMeta,
}

fn run_video(cli: &Cli, options: &RenderOptions, palette: Palette, path: &Path) -> Result<()> {
    if cli.svg.is_some() {
        anyhow::bail!("SVG export is not available for video input");
    }

    let (frames, meta) = ap_source::video::extract_frames(path, options.sample_fps)?;
    if meta.duration > MAX_DURATION_SECS {
        log::warn!(
            "video is {:.1}s long (cap {MAX_DURATION_SECS}s); extraction was truncated",
            meta.duration
        );
    }

    let results = render_video(&frames, options.width, palette, options.sample_fps, options.color)?;

    if cli.json {
        let json = serde_json::to_string(&VideoOutput {
            frames: &results,
            metadata: &meta,
        })?;
        return write_output(&json, cli.out.as_deref());
    }

    // Sequential dump: each frame in order, terminal-ready.
    let mut text = String::new();
    for frame in &results {
        text.push_str(&frame_to_terminal(frame));
        text.push('\n');
    }
    write_output(&text, cli.out.as_deref())
}
