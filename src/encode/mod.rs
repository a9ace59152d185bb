//! Ground-truth video encoding.
//!
//! Sinks consume rendered frames in animation order; a [`sink::VideoEncoder`] wraps a sink into
//! the "frames in, file path out" contract the task generator depends on.

/// `ffmpeg`-based sinks (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait, built-in sinks, and the video encoder seam.
pub mod sink;
