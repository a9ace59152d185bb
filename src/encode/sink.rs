use std::path::{Path, PathBuf};

use crate::foundation::error::{SwapError, SwapResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: u32,
}

/// Sink contract for consuming rendered frames in animation order.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SwapResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> SwapResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> SwapResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(u64, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` was called after the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SwapResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> SwapResult<()> {
        if self.cfg.is_none() {
            return Err(SwapError::encode("in-memory sink not started"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SwapResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Turns an ordered frame sequence into a video file.
///
/// Implementations are shared across worker threads during parallel dataset generation.
pub trait VideoEncoder: Send + Sync {
    /// Encode `frames` at `fps` into `out_path` and return the written path.
    fn encode(
        &self,
        frames: &mut dyn Iterator<Item = SwapResult<FrameRGBA>>,
        out_path: &Path,
        fps: u32,
    ) -> SwapResult<PathBuf>;
}

/// Drive `sink` through one full `begin`/`push_frame`/`end` cycle.
///
/// The sink is configured from the first frame's size. Returns the number of frames pushed.
/// An empty sequence is an error: there is nothing to size the output from.
pub fn drain_into_sink(
    sink: &mut dyn FrameSink,
    frames: &mut dyn Iterator<Item = SwapResult<FrameRGBA>>,
    fps: u32,
) -> SwapResult<u64> {
    let first = frames
        .next()
        .ok_or_else(|| SwapError::encode("no frames to encode"))??;
    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        fps,
    })?;

    let pushed = push_all(sink, first, frames);
    // Close the sink even after a failed push; the push error wins.
    let ended = sink.end();
    let count = pushed?;
    ended?;
    Ok(count)
}

fn push_all(
    sink: &mut dyn FrameSink,
    first: FrameRGBA,
    rest: &mut dyn Iterator<Item = SwapResult<FrameRGBA>>,
) -> SwapResult<u64> {
    sink.push_frame(0, &first)?;
    let mut count = 1u64;
    for frame in rest {
        sink.push_frame(count, &frame?)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
