// Video input uses ffmpeg/ffprobe as subprocesses (must be in PATH) instead
// of an FFI binding: no vcpkg/pkg-config needed on Windows MSVC.
//
// Flow:
//   - `probe_video`    : ffprobe → dimensions, frame rate, duration
//   - `extract_frames` : ffmpeg → sampled JPEG frames in a scoped temp dir,
//                        decoded into rasters before the dir is dropped

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use ap_core::error::CoreError;
use ap_core::raster::Raster;
use serde::Serialize;

use crate::image::load_image;

/// Hard cap on extracted frames per video.
pub const MAX_FRAME_COUNT: usize = 200;

/// Hard cap on accepted video duration, enforced at the boundary layer.
pub const MAX_DURATION_SECS: f64 = 20.0;

/// Métadonnées extraites via ffprobe, figées après le probe.
///
/// Serializes in the camelCase wire format consumed by front ends.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMeta {
    /// Original file size in bytes.
    pub original_size: u64,
    /// Duration in seconds.
    pub duration: f64,
    /// Frame rate of the source stream.
    pub original_fps: f64,
    /// Sampling rate used for extraction.
    pub sampled_fps: u32,
    /// Number of frames actually extracted.
    pub frame_count: usize,
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
}

/// Parse ffprobe `default=noprint_wrappers=1` output lines.
///
/// Missing fields keep conservative defaults (640x480, 30 fps, 10 s) so a
/// sparse probe still yields a usable extraction plan.
fn parse_probe(text: &str) -> VideoMeta {
    let mut meta = VideoMeta {
        original_size: 0,
        duration: 10.0,
        original_fps: 30.0,
        sampled_fps: 0,
        frame_count: 0,
        width: 640,
        height: 480,
    };

    for line in text.lines() {
        if let Some(val) = line.strip_prefix("width=") {
            meta.width = val.trim().parse().unwrap_or(640);
        } else if let Some(val) = line.strip_prefix("height=") {
            meta.height = val.trim().parse().unwrap_or(480);
        } else if let Some(val) = line.strip_prefix("duration=") {
            if let Ok(d) = val.trim().parse() {
                meta.duration = d;
            }
        } else if let Some(val) = line.strip_prefix("r_frame_rate=") {
            // Format: "24/1" or "30000/1001"
            let mut parts = val.trim().splitn(2, '/');
            let num: f64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(30.0);
            let den: f64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);
            if den > 0.0 {
                meta.original_fps = num / den;
            }
        }
    }

    meta
}

/// Interroge `ffprobe` pour les métadonnées du flux vidéo principal.
///
/// # Errors
/// Returns an error if `ffprobe` cannot be launched or the file has no
/// decodable video stream.
pub fn probe_video(path: &Path) -> Result<VideoMeta> {
    let path_str = path.to_str().context("video path is not valid UTF-8")?;

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height,r_frame_rate",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1",
            "-i",
            path_str,
        ])
        .output()
        .context("cannot launch ffprobe; check that ffprobe is installed and in PATH")?;

    let text = String::from_utf8_lossy(&output.stdout);
    let mut meta = parse_probe(&text);

    if meta.width == 0 || meta.height == 0 {
        anyhow::bail!("ffprobe found no video stream in {}", path.display());
    }

    meta.original_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    log::info!(
        "probe_video: {}x{} @ {:.3}fps, {:.2}s — {}",
        meta.width,
        meta.height,
        meta.original_fps,
        meta.duration,
        path.display()
    );

    Ok(meta)
}

/// Extract frames sampled at `sample_fps` from a video file.
///
/// Frames land as JPEGs in a temporary directory (released on every exit
/// path) and are decoded into rasters before returning. Extraction is capped
/// at [`MAX_FRAME_COUNT`] frames; a frame missing on disk stops the scan, a
/// frame that fails to decode is skipped with a warning.
///
/// # Errors
/// Returns an error if the probe fails, ffmpeg fails, or no frame at all
/// could be decoded.
///
/// # Example
/// ```no_run
/// use ap_source::video::extract_frames;
/// let (frames, meta) = extract_frames(std::path::Path::new("clip.webm"), 10).unwrap();
/// assert_eq!(meta.frame_count, frames.len());
/// ```
pub fn extract_frames(path: &Path, sample_fps: u32) -> Result<(Vec<Raster>, VideoMeta)> {
    if sample_fps == 0 {
        return Err(CoreError::Config("sample fps must be > 0".to_string()).into());
    }

    let mut meta = probe_video(path)?;
    meta.sampled_fps = sample_fps;

    let mut total = (meta.duration * f64::from(sample_fps)) as usize;
    if total > MAX_FRAME_COUNT {
        log::warn!("limiting frames to {MAX_FRAME_COUNT} (video is too long)");
        total = MAX_FRAME_COUNT;
    }
    let total = total.max(1);

    let path_str = path.to_str().context("video path is not valid UTF-8")?;
    let tmp = tempfile::tempdir().context("cannot create temp directory for frames")?;
    let pattern = tmp.path().join("frame_%04d.jpg");
    let pattern_str = pattern
        .to_str()
        .context("temp frame pattern is not valid UTF-8")?;

    let fps_filter = format!("fps={sample_fps}");
    let total_str = total.to_string();
    let output = Command::new("ffmpeg")
        .args([
            "-i",
            path_str,
            "-vf",
            &fps_filter,
            "-frames:v",
            &total_str,
            "-q:v",
            "2", // JPEG quality, 1-31, lower is better
            "-hide_banner",
            "-loglevel",
            "error",
            "-y",
            pattern_str,
        ])
        .output()
        .context("cannot launch ffmpeg; check that ffmpeg is installed and in PATH")?;

    if !output.status.success() {
        anyhow::bail!(
            "ffmpeg frame extraction failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let mut frames = Vec::with_capacity(total);
    for i in 1..=total {
        let frame_path = tmp.path().join(format!("frame_{i:04}.jpg"));
        if !frame_path.exists() {
            log::warn!("frame {i} not found, stopping extraction");
            break;
        }
        match load_image(&frame_path) {
            Ok(raster) => frames.push(raster),
            Err(e) => log::warn!("failed to decode frame {i}: {e}"),
        }
    }

    if frames.is_empty() {
        return Err(CoreError::NoFrames.into());
    }

    meta.frame_count = frames.len();
    log::info!(
        "extracted {} frames at {sample_fps}fps from {}",
        frames.len(),
        path.display()
    );
    Ok((frames, meta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_probe_full_output() {
        let text = "width=1920\nheight=1080\nr_frame_rate=30000/1001\nduration=5.000000\n";
        let meta = parse_probe(text);
        assert_eq!((meta.width, meta.height), (1920, 1080));
        assert!((meta.original_fps - 29.97).abs() < 0.01);
        assert!((meta.duration - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_probe_defaults_on_sparse_output() {
        let meta = parse_probe("");
        assert_eq!((meta.width, meta.height), (640, 480));
        assert!((meta.original_fps - 30.0).abs() < f64::EPSILON);
        assert!((meta.duration - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_probe_integer_frame_rate() {
        let meta = parse_probe("r_frame_rate=24/1\n");
        assert!((meta.original_fps - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn meta_serializes_camel_case() {
        let meta = VideoMeta {
            original_size: 1024,
            duration: 5.0,
            original_fps: 30.0,
            sampled_fps: 10,
            frame_count: 50,
            width: 640,
            height: 480,
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"originalSize\":1024"));
        assert!(json.contains("\"originalFps\":30.0"));
        assert!(json.contains("\"sampledFps\":10"));
        assert!(json.contains("\"frameCount\":50"));
    }

    #[test]
    fn zero_sample_fps_is_rejected() {
        let err = extract_frames(Path::new("nope.webm"), 0).unwrap_err();
        assert!(err.to_string().contains("fps"));
    }
}
