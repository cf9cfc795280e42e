use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sdfgraph", version)]
struct Cli {
    /// Log derived geometry and shading time at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the graph to a PNG.
    Render(RenderArgs),
    /// Print the effective configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long, default_value = "out.png")]
    out: PathBuf,

    /// JSON configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width and height of the square image, in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Point-set shape.
    #[arg(long, value_enum)]
    shape: Option<ShapeChoice>,

    /// Number of circle samples.
    #[arg(long)]
    points: Option<usize>,

    /// Scale factor along the oblique axis.
    #[arg(long, allow_hyphen_values = true)]
    scale_amount: Option<f64>,

    /// Render rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// JSON configuration file to merge over the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Circle,
    Star,
    Box,
}

impl From<ShapeChoice> for sdfgraph::ShapeKind {
    fn from(choice: ShapeChoice) -> Self {
        match choice {
            ShapeChoice::Circle => Self::Circle,
            ShapeChoice::Star => Self::Star,
            ShapeChoice::Box => Self::Box,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<sdfgraph::GraphConfig> {
    match path {
        Some(p) => sdfgraph::GraphConfig::from_json_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(sdfgraph::GraphConfig::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(size) = args.size {
        config.image_size = size;
    }
    if let Some(shape) = args.shape {
        config.shape = shape.into();
    }
    if let Some(points) = args.points {
        config.point_count = points;
    }
    if let Some(amount) = args.scale_amount {
        config.scale_amount = amount;
    }

    let threading = sdfgraph::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };

    sdfgraph::render_to_file(&config, &args.out, &threading)
        .with_context(|| format!("render '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    config.validate()?;
    let json = config.to_json_string()?;
    match args.out {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("write config '{}'", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
