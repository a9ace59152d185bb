//! `symbol-swap` synthesizes labeled "symbol substitution" visual-reasoning tasks.
//!
//! Each task is a horizontal row of uniquely colored geometric symbols with one of them marked
//! for replacement, rendered twice (initial state with the target framed, final state after the
//! substitution), plus an optional cross-fade ground-truth video and an instruction prompt that
//! names the exact replacement symbol.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `TaskConfig + Rng -> TaskData` (unique symbols, target index, replacement)
//! 2. **Layout**: evenly spaced, horizontally centered pixel positions
//! 3. **Render**: `TaskData -> FrameRGBA` for the initial and final stills (CPU raster)
//! 4. **Animate** (optional): hold → cross-fade → hold frames streamed into a [`VideoEncoder`]
//! 5. **Prompt**: fill a randomly chosen template with the replacement's color and shape
//!
//! Generation is deterministic for a given seed: every task owns its own RNG, so serial and
//! parallel dataset runs produce identical output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Animation frame producers.
pub mod animate;
/// Task configuration.
pub mod config;
/// Video encoding sinks.
pub mod encode;
/// Task generation and dataset driver.
pub mod generate;
/// Horizontal sequence layout.
pub mod layout;
/// Instruction prompt templates.
pub mod prompts;
/// Still-frame rendering.
pub mod render;
/// Symbols, the symbol pool, and the sequence sampler.
pub mod symbol;

pub use crate::foundation::core::{BezPath, Canvas, Point, Position, Rect, Rgb8};
pub use crate::foundation::error::{SwapError, SwapResult};

pub use crate::animate::morph::{MorphAnimator, MorphFrames};
pub use crate::config::TaskConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, FfmpegVideoEncoder, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig, VideoEncoder, drain_into_sink};
pub use crate::generate::dataset::{
    DatasetOpts, generate_dataset, generate_dataset_with, task_id, task_seed, write_task_pair,
};
pub use crate::generate::task::{TaskGenerator, TaskPair};
pub use crate::layout::compute_positions;
pub use crate::prompts::PromptSelector;
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::{DrawOp, Layer, SceneRenderer};
pub use crate::symbol::pool::{ColorName, POOL_SIZE, Shape, Symbol, SymbolId, SymbolPool};
pub use crate::symbol::sampler::{SequenceSampler, TaskData};
