/// Media input for asciipix: image decoding, resampling, and video frame
/// extraction via ffmpeg subprocess.
pub mod image;
pub mod resize;
pub mod video;
