//! Generate command - build a labeled trajectory dataset and save it

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;
use tracing::info;

use super::resolve_format;
use crate::{
    adapters::DatasetFormat,
    app::App,
    cli::{
        config::load_generator_config,
        output::{create_progress, format_number, print_kv, print_section},
    },
    dataset::{DatasetKind, DatasetSummary, GeneratorConfig},
};

#[derive(Parser, Debug)]
#[command(about = "Generate a labeled trajectory dataset")]
pub struct GenerateArgs {
    /// JSON file with generator settings; flags below override it
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Policy family producing the rows
    #[arg(long, short = 'k', value_enum)]
    pub kind: Option<DatasetKind>,

    /// Number of rows
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,

    /// Side length of the square grid
    #[arg(long, short = 'g')]
    pub grid_size: Option<usize>,

    /// Minimum Euclidean distance between random-walk starts
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Probability of a random step
    #[arg(long, short = 'b')]
    pub random_bias: Option<f64>,

    /// Smallest avoidance step budget (inclusive)
    #[arg(long)]
    pub min_avoidance_steps: Option<usize>,

    /// Largest avoidance step budget (exclusive)
    #[arg(long)]
    pub max_avoidance_steps: Option<usize>,

    /// Steps after which a pursuit run is discarded
    #[arg(long)]
    pub pursuit_step_cap: Option<usize>,

    /// Retries per row after a discarded run
    #[arg(long)]
    pub max_resamples: Option<usize>,

    /// Base random seed
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Dataset file to write
    #[arg(long, short = 'o', default_value = "grid_dataset.csv")]
    pub output: PathBuf,

    /// Output format (defaults to the output file's extension)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<DatasetFormat>,

    /// Also write the effective config and summary as JSON
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Everything needed to reproduce a generated file
#[derive(Debug, Serialize)]
struct GenerationManifest<'a> {
    output: String,
    format: DatasetFormat,
    config: &'a GeneratorConfig,
    summary: &'a DatasetSummary,
}

impl GenerateArgs {
    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => load_generator_config(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(samples) = self.samples {
            config.num_samples = samples;
        }
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(min_distance) = self.min_distance {
            config.min_distance = min_distance;
        }
        if let Some(random_bias) = self.random_bias {
            config.random_bias = random_bias;
        }
        if let Some(start) = self.min_avoidance_steps {
            config.avoidance_steps.start = start;
        }
        if let Some(end) = self.max_avoidance_steps {
            config.avoidance_steps.end = end;
        }
        if let Some(cap) = self.pursuit_step_cap {
            config.pursuit_step_cap = cap;
        }
        if let Some(max_resamples) = self.max_resamples {
            config.max_resamples = max_resamples;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config
            .validate()
            .context("Invalid generator configuration")?;
        Ok(config)
    }
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = args.resolve_config()?;
    if config.num_samples == 0 {
        bail!("Nothing to generate: --samples must be positive");
    }

    let format = resolve_format(&args.output, args.format);
    let app = App::with_format(format);

    let mut generator = app.create_generator(config)?;
    if !args.no_progress {
        let progress = create_progress(generator.config().num_samples as u64, "rows")?;
        generator = generator.with_progress(progress);
    }

    let rows = generator.generate()?;
    app.save_dataset(&rows, &args.output)
        .with_context(|| format!("Failed to write dataset to {}", args.output.display()))?;
    info!(path = %args.output.display(), %format, "dataset saved");

    let summary = DatasetSummary::from_rows(&rows);
    let mut effective = generator.config().clone();
    effective.seed = Some(generator.seed());

    print_section("Dataset generated");
    print_kv("Kind", &effective.kind.to_string());
    print_kv("Rows", &format_number(summary.rows));
    print_kv("Collisions", &format_number(summary.collisions));
    print_kv("Non-collisions", &format_number(summary.non_collisions));
    print_kv("Seed", &generator.seed().to_string());
    print_kv("Output", &args.output.display().to_string());

    if let Some(path) = &args.manifest {
        let manifest = GenerationManifest {
            output: args.output.display().to_string(),
            format,
            config: &effective,
            summary: &summary,
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create manifest: {}", path.display()))?;
        to_writer_pretty(file, &manifest)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
        print_kv("Manifest", &path.display().to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GenerateArgs {
        GenerateArgs::parse_from(std::iter::once("generate").chain(args.iter().copied()))
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--kind",
            "fixed-direction",
            "-n",
            "8",
            "--grid-size",
            "6",
            "--seed",
            "3",
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.kind, DatasetKind::FixedDirection);
        assert_eq!(config.num_samples, 8);
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn avoidance_bounds_are_applied_separately() {
        let args = parse(&["--min-avoidance-steps", "2", "--max-avoidance-steps", "5"]);
        assert_eq!(args.resolve_config().unwrap().avoidance_steps, 2..5);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let args = parse(&["--grid-size", "2", "--min-distance", "9"]);
        assert!(args.resolve_config().is_err());
    }
}
