use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "symbol-swap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset of substitution tasks.
    Generate(GenerateArgs),
    /// Render one task's initial (or final) state as a PNG.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output root; tasks land in `<out>/<domain>_task/<task_id>/`.
    #[arg(long)]
    out: PathBuf,

    /// Task configuration JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of tasks (overrides the config).
    #[arg(long)]
    samples: Option<usize>,

    /// Base random seed (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Skip ground-truth videos.
    #[arg(long)]
    no_videos: bool,

    /// Generate tasks on all cores.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Task configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base random seed; previews the first task `generate` would produce with the same seed.
    /// Defaults to the config's `random_seed`, then 0.
    #[arg(long)]
    seed: Option<u64>,

    /// Render the state after substitution instead of the initial state.
    #[arg(long = "final")]
    final_state: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

/// `RUST_LOG` filter, `symbol_swap=info` when unset; output to stderr.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("symbol_swap=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<symbol_swap::TaskConfig> {
    Ok(match path {
        Some(p) => symbol_swap::TaskConfig::from_json_path(p)?,
        None => symbol_swap::TaskConfig::default(),
    })
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(n) = args.samples {
        config.num_samples = n;
    }
    if args.seed.is_some() {
        config.random_seed = args.seed;
    }
    if args.no_videos {
        config.generate_videos = false;
    }

    let opts = symbol_swap::DatasetOpts {
        parallel: args.parallel,
    };
    let pairs = symbol_swap::generate_dataset(&config, &opts)?;
    for pair in &pairs {
        symbol_swap::write_task_pair(pair, &args.out)
            .with_context(|| format!("write task '{}'", pair.task_id))?;
    }

    eprintln!("wrote {} tasks under {}", pairs.len(), args.out.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.validate()?;

    let sampler = symbol_swap::SequenceSampler::new(&config);
    let base_seed = args.seed.or(config.random_seed).unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(symbol_swap::task_seed(base_seed, 0));
    let task = sampler.sample_task(&mut rng)?;

    let renderer = symbol_swap::SceneRenderer::new(&config)?;
    let frame = if args.final_state {
        renderer.render_final(&task)?
    } else {
        renderer.render_initial(&task)?
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame
        .to_rgba_image()?
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} symbols, target {} -> {})",
        args.out.display(),
        task.len(),
        task.target_symbol(),
        task.new_symbol()
    );
    Ok(())
}
