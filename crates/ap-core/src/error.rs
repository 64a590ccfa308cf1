use thiserror::Error;

/// Errors originating from the conversion core.
///
/// Upstream decode and extraction failures are wrapped with `anyhow` context
/// at the call site; this enum covers the conditions the core itself can
/// detect.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Invalid width/height dimensions (zero-sized source or target).
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A video yielded no decodable frames.
    #[error("no frames were extracted from video")]
    NoFrames,
}
