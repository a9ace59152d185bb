use std::path::PathBuf;
use std::sync::Arc;

use rand::Rng;

use crate::animate::morph::MorphAnimator;
use crate::config::TaskConfig;
use crate::encode::ffmpeg::FfmpegVideoEncoder;
use crate::encode::sink::VideoEncoder;
use crate::foundation::error::SwapResult;
use crate::prompts::PromptSelector;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::SceneRenderer;
use crate::symbol::sampler::{SequenceSampler, TaskData};

/// One generated task: instruction, both stills, and the optional ground-truth video.
#[derive(Clone, Debug)]
pub struct TaskPair {
    /// Identifier assigned by the caller, e.g. `symbol_worlds_symbol_editing_0007`.
    pub task_id: String,
    /// Dataset domain from the configuration.
    pub domain: String,
    /// Filled instruction prompt.
    pub prompt: String,
    /// Initial state, target framed.
    pub first_image: FrameRGBA,
    /// Final state after substitution.
    pub final_image: FrameRGBA,
    /// Written video file, `None` when videos are disabled or encoding failed.
    pub ground_truth_video: Option<PathBuf>,
    /// The sampled task the frames were rendered from.
    pub task: TaskData,
}

/// Produces [`TaskPair`]s for one configuration.
///
/// Holds no mutable state; share it across threads and give every task its own RNG.
#[derive(Clone)]
pub struct TaskGenerator {
    config: TaskConfig,
    sampler: SequenceSampler,
    renderer: SceneRenderer,
    prompts: PromptSelector,
    encoder: Option<Arc<dyn VideoEncoder>>,
    video_dir: PathBuf,
}

impl std::fmt::Debug for TaskGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskGenerator")
            .field("domain", &self.config.domain)
            .field("videos", &self.videos_enabled())
            .field("video_dir", &self.video_dir)
            .finish_non_exhaustive()
    }
}

impl TaskGenerator {
    /// Validate `config` and wire the default collaborators.
    ///
    /// Videos go through the system `ffmpeg` into `<tmp>/<domain>_videos/`. When videos are
    /// requested but `ffmpeg` is missing, video output is disabled with a warning.
    pub fn new(config: TaskConfig) -> SwapResult<Self> {
        config.validate()?;

        let encoder: Option<Arc<dyn VideoEncoder>> = if config.generate_videos {
            match FfmpegVideoEncoder::detect(config.background) {
                Some(enc) => Some(Arc::new(enc)),
                None => {
                    tracing::warn!("ffmpeg not found on PATH; ground-truth videos disabled");
                    None
                }
            }
        } else {
            None
        };

        let video_dir = std::env::temp_dir().join(format!("{}_videos", config.domain));
        Ok(Self {
            sampler: SequenceSampler::new(&config),
            renderer: SceneRenderer::new(&config)?,
            prompts: PromptSelector::new(),
            encoder,
            video_dir,
            config,
        })
    }

    /// Replace the video encoder. `None` disables videos.
    pub fn with_video_encoder(mut self, encoder: Option<Arc<dyn VideoEncoder>>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Write videos under `dir` instead of the temp directory.
    pub fn with_video_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.video_dir = dir.into();
        self
    }

    /// Replace the prompt templates.
    pub fn with_prompts(mut self, prompts: PromptSelector) -> Self {
        self.prompts = prompts;
        self
    }

    /// The validated configuration.
    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// The still/frame renderer.
    pub fn renderer(&self) -> &SceneRenderer {
        &self.renderer
    }

    /// Whether this generator will attempt to write videos.
    pub fn videos_enabled(&self) -> bool {
        self.config.generate_videos && self.encoder.is_some()
    }

    /// Sample one task and render everything it ships with.
    ///
    /// RNG draws happen in a fixed order (sequence, target, replacement, prompt), so the same
    /// seed always yields the same pair. A failed video is logged and dropped.
    #[tracing::instrument(level = "debug", skip(self, rng))]
    pub fn generate_task_pair<R: Rng + ?Sized>(
        &self,
        task_id: &str,
        rng: &mut R,
    ) -> SwapResult<TaskPair> {
        let task = self.sampler.sample_task(rng)?;

        let first_image = self.renderer.render_initial(&task)?;
        let final_image = self.renderer.render_final(&task)?;
        let ground_truth_video = self.render_video(task_id, &task);

        let prompt = self
            .prompts
            .select(task.task_type(), Some(&task.new_symbol()), rng)?;

        tracing::debug!(
            symbols = task.len(),
            target = task.target_index(),
            replacement = %task.new_symbol(),
            video = ground_truth_video.is_some(),
            "task generated"
        );

        Ok(TaskPair {
            task_id: task_id.to_string(),
            domain: self.config.domain.clone(),
            prompt,
            first_image,
            final_image,
            ground_truth_video,
            task,
        })
    }

    fn render_video(&self, task_id: &str, task: &TaskData) -> Option<PathBuf> {
        if !self.config.generate_videos {
            return None;
        }
        let encoder = self.encoder.as_ref()?;

        let out_path = self
            .video_dir
            .join(format!("{task_id}_ground_truth.mp4"));
        let mut frames = MorphAnimator::new(&self.renderer).build_frames(
            task,
            self.config.hold_frames,
            self.config.transition_frames,
        );
        match encoder.encode(&mut frames, &out_path, self.config.video_fps) {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!(task_id, error = %err, "ground-truth video failed; continuing without it");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/task.rs"]
mod tests;
