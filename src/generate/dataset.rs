use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::config::TaskConfig;
use crate::foundation::error::{SwapError, SwapResult};
use crate::generate::task::{TaskGenerator, TaskPair};

/// Execution options for [`generate_dataset`].
#[derive(Clone, Debug, Default)]
pub struct DatasetOpts {
    /// Generate tasks on the rayon thread pool. Output is identical either way.
    pub parallel: bool,
}

/// Seed of task `index` in a run seeded with `base_seed`.
///
/// SplitMix64 finalizer over `base_seed + index * golden`; neighbouring indices get unrelated
/// streams.
pub fn task_seed(base_seed: u64, index: u64) -> u64 {
    let mut z = base_seed.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Task id of the `index`-th task in `domain`.
pub fn task_id(domain: &str, index: usize) -> String {
    format!("{domain}_{index:04}")
}

/// Generate `config.num_samples` tasks with default collaborators.
pub fn generate_dataset(config: &TaskConfig, opts: &DatasetOpts) -> SwapResult<Vec<TaskPair>> {
    let generator = TaskGenerator::new(config.clone())?;
    generate_dataset_with(&generator, opts)
}

/// Generate `config.num_samples` tasks with a prepared generator, returned in task order.
///
/// An unset `random_seed` draws a fresh base seed, logged so the run can be replayed.
pub fn generate_dataset_with(
    generator: &TaskGenerator,
    opts: &DatasetOpts,
) -> SwapResult<Vec<TaskPair>> {
    let config = generator.config();
    let base_seed = config.random_seed.unwrap_or_else(rand::random);
    let n = config.num_samples;
    tracing::info!(
        domain = %config.domain,
        samples = n,
        base_seed,
        parallel = opts.parallel,
        videos = generator.videos_enabled(),
        "generating dataset"
    );

    let one = |index: usize| -> SwapResult<TaskPair> {
        let mut rng = StdRng::seed_from_u64(task_seed(base_seed, index as u64));
        generator.generate_task_pair(&task_id(&config.domain, index), &mut rng)
    };

    let pairs = if opts.parallel {
        (0..n).into_par_iter().map(one).collect::<SwapResult<Vec<_>>>()?
    } else {
        (0..n).map(one).collect::<SwapResult<Vec<_>>>()?
    };

    tracing::info!(
        tasks = pairs.len(),
        videos = pairs.iter().filter(|p| p.ground_truth_video.is_some()).count(),
        "dataset generated"
    );
    Ok(pairs)
}

/// Write one pair under `<out_dir>/<domain>_task/<task_id>/` and return that directory.
///
/// Files: `first_frame.png`, `final_frame.png`, `prompt.txt`, `task.json`, and
/// `ground_truth.mp4` when the pair has a video.
pub fn write_task_pair(pair: &TaskPair, out_dir: &Path) -> SwapResult<PathBuf> {
    let dir = out_dir
        .join(format!("{}_task", pair.domain))
        .join(&pair.task_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create task directory '{}'", dir.display()))?;

    for (name, frame) in [
        ("first_frame.png", &pair.first_image),
        ("final_frame.png", &pair.final_image),
    ] {
        let path = dir.join(name);
        frame
            .to_rgba_image()?
            .save(&path)
            .with_context(|| format!("write '{}'", path.display()))?;
    }

    let prompt_path = dir.join("prompt.txt");
    std::fs::write(&prompt_path, &pair.prompt)
        .with_context(|| format!("write '{}'", prompt_path.display()))?;

    let task_json =
        serde_json::to_string_pretty(&pair.task).map_err(|e| SwapError::serde(e.to_string()))?;
    let task_path = dir.join("task.json");
    std::fs::write(&task_path, task_json)
        .with_context(|| format!("write '{}'", task_path.display()))?;

    if let Some(video) = &pair.ground_truth_video {
        let dst = dir.join("ground_truth.mp4");
        std::fs::copy(video, &dst).with_context(|| {
            format!("copy video '{}' to '{}'", video.display(), dst.display())
        })?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/dataset.rs"]
mod tests;
