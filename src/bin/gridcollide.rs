//! gridcollide CLI - labeled two-agent trajectory datasets
//!
//! This CLI provides a unified interface for:
//! - Generating pursuit/avoidance and fixed-direction datasets
//! - Rendering dataset rows as PNG frame sequences
//! - Summarizing stored datasets

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use gridcollide::cli::commands::{generate, inspect, visualize};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridcollide")]
#[command(version, about = "Labeled two-agent grid trajectories for collision classification", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a labeled trajectory dataset
    Generate(Box<generate::GenerateArgs>),

    /// Render dataset rows as PNG frames
    Visualize(visualize::VisualizeArgs),

    /// Summarize a stored dataset
    Inspect(inspect::InspectArgs),
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => generate::execute(*args),
        Commands::Visualize(args) => visualize::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
