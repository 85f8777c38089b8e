use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use fluid_ribbon::{ExportMode, RibbonConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fluid-ribbon", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the configured frame as a PNG.
    Frame(FrameArgs),
    /// Render at an explicit export size as a PNG.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Configuration JSON. Built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the noise seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the grain seed (makes grain reproducible).
    #[arg(long)]
    grain_seed: Option<u64>,

    /// Override the grain amount (clamped to 0..=1).
    #[arg(long)]
    grain: Option<f32>,

    /// Override the glass stripe toggle.
    #[arg(long)]
    stripes: Option<bool>,

    /// Render rows and stripes in parallel.
    #[arg(long)]
    parallel: Option<bool>,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Override the configured width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the configured height.
    #[arg(long)]
    height: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Export width in pixels.
    #[arg(long)]
    width: u32,

    /// Export height in pixels.
    #[arg(long)]
    height: u32,

    /// Resize the on-screen render instead of re-synthesizing at the export size.
    #[arg(long, default_value_t = false)]
    rescale: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn load_config(args: &SourceArgs) -> anyhow::Result<RibbonConfig> {
    let mut cfg = match &args.config {
        Some(path) => RibbonConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => RibbonConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(seed) = args.grain_seed {
        cfg.grain_seed = Some(seed);
    }
    if let Some(grain) = args.grain {
        cfg.grain = grain;
    }
    if let Some(stripes) = args.stripes {
        cfg.vertical_stripes = stripes;
    }
    if let Some(parallel) = args.parallel {
        cfg.parallel = parallel;
    }
    if args.threads.is_some() {
        cfg.threads = args.threads;
    }
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.source)?;
    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }

    let session = cfg.build_session()?;
    let Some(frame) = session.render()? else {
        anyhow::bail!("nothing rendered: width and height must be > 0");
    };
    frame.save_png(&args.out)?;

    eprintln!(
        "wrote {} ({}x{}, seed {})",
        args.out.display(),
        frame.width,
        frame.height,
        session.noise().seed()
    );
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.source)?;
    let session = cfg.build_session()?;
    let mode = if args.rescale {
        ExportMode::Rescale
    } else {
        ExportMode::Resynthesize
    };
    let frame = session.export_at(args.width, args.height, mode)?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
