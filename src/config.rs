use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{SwapError, SwapResult};
use crate::symbol::pool::POOL_SIZE;

/// Immutable generation settings shared by every component.
///
/// All fields fall back to their defaults when absent from JSON, so a config file only needs to
/// name what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// Task domain name, used for task ids and output directories.
    pub domain: String,
    /// Number of task pairs a dataset run generates.
    pub num_samples: usize,
    /// Base seed; `None` draws one from entropy at dataset start.
    pub random_seed: Option<u64>,
    /// Output image dimensions.
    pub image_size: Canvas,
    /// Canvas background color.
    pub background: Rgb8,
    /// Side of the square every symbol is inscribed in, in pixels.
    pub symbol_size: u32,
    /// Horizontal distance between neighboring symbol centers, in pixels.
    pub symbol_spacing: u32,
    /// Dark outline stroke width around each symbol, in pixels.
    pub outline_width: u32,
    /// Minimum number of symbols in a sequence (inclusive).
    pub min_sequence_length: usize,
    /// Maximum number of symbols in a sequence (inclusive).
    pub max_sequence_length: usize,
    /// Stroke width of the border framing the target symbol.
    pub target_border_width: u32,
    /// Color of the border framing the target symbol.
    pub target_border_color: Rgb8,
    /// Gap between the symbol's half-extent and the target border.
    pub target_border_padding: u32,
    /// Whether to produce ground-truth videos.
    pub generate_videos: bool,
    /// Video frame rate.
    pub video_fps: u32,
    /// Static frames held at the start and at the end of the video.
    pub hold_frames: usize,
    /// Cross-fade frames between the two holds.
    pub transition_frames: usize,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            domain: "symbol_worlds_symbol_editing".to_string(),
            num_samples: 50,
            random_seed: None,
            image_size: Canvas {
                width: 512,
                height: 512,
            },
            background: Rgb8::WHITE,
            symbol_size: 60,
            symbol_spacing: 80,
            outline_width: 2,
            min_sequence_length: 3,
            max_sequence_length: 7,
            target_border_width: 4,
            target_border_color: Rgb8(255, 0, 0),
            target_border_padding: 8,
            generate_videos: true,
            video_fps: 15,
            hold_frames: 8,
            transition_frames: 30,
        }
    }
}

impl TaskConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_json_path(path: &Path) -> SwapResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg = Self::from_json_str(&text)?;
        Ok(cfg)
    }

    /// Parse a config from JSON text and validate it.
    pub fn from_json_str(text: &str) -> SwapResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| SwapError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check scalar ranges. Pool capacity is re-checked by the sampler at draw time.
    pub fn validate(&self) -> SwapResult<()> {
        Canvas::new(self.image_size.width, self.image_size.height)?;
        if self.domain.trim().is_empty() {
            return Err(SwapError::configuration("domain must be non-empty"));
        }
        if self.symbol_size == 0 {
            return Err(SwapError::configuration("symbol_size must be > 0"));
        }
        if self.symbol_spacing == 0 {
            return Err(SwapError::configuration("symbol_spacing must be > 0"));
        }
        if self.min_sequence_length == 0 {
            return Err(SwapError::configuration(
                "min_sequence_length must be >= 1",
            ));
        }
        if self.min_sequence_length > self.max_sequence_length {
            return Err(SwapError::configuration(format!(
                "min_sequence_length ({}) must be <= max_sequence_length ({})",
                self.min_sequence_length, self.max_sequence_length
            )));
        }
        if self.max_sequence_length >= POOL_SIZE {
            return Err(SwapError::configuration(format!(
                "max_sequence_length ({}) must leave at least one replacement symbol in a pool of {POOL_SIZE}",
                self.max_sequence_length
            )));
        }
        if self.generate_videos {
            if self.video_fps == 0 {
                return Err(SwapError::configuration("video_fps must be > 0"));
            }
            if self.transition_frames == 0 {
                return Err(SwapError::configuration("transition_frames must be > 0"));
            }
        }
        Ok(())
    }

    /// Half-extent of a symbol (`symbol_size / 2`, floored).
    pub fn half_size(&self) -> u32 {
        self.symbol_size / 2
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
