/// Pipeline composition for asciipix: CLI surface, frame batch processing,
/// and output emission. The `asciipix` binary is a thin wrapper over these
/// modules; embedding callers (an HTTP front end, for instance) use them
/// directly.
pub mod batch;
pub mod cli;
pub mod output;

pub use batch::{render_video, AsciiFrame, FrameContent};
