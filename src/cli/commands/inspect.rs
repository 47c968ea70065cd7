//! Inspect command - summarize a stored dataset

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::resolve_format;
use crate::{
    adapters::DatasetFormat,
    app::App,
    cli::output::{format_number, print_kv, print_section, print_subsection},
    dataset::DatasetSummary,
    grid::OccupancyGrid,
};

#[derive(Parser, Debug)]
#[command(about = "Summarize a stored dataset")]
pub struct InspectArgs {
    /// Dataset file to read
    pub input: PathBuf,

    /// Input format (defaults to the file extension)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<DatasetFormat>,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Print the frames of this row (0-based) as text grids
    #[arg(long)]
    pub row: Option<usize>,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let app = App::with_format(resolve_format(&args.input, args.format));
    let rows = app
        .load_dataset(&args.input)
        .with_context(|| format!("Failed to load dataset from {}", args.input.display()))?;
    let summary = DatasetSummary::from_rows(&rows);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_section(&format!("Dataset {}", args.input.display()));
        print_kv("Rows", &format_number(summary.rows));
        print_kv(
            "Collisions",
            &format!(
                "{} ({:.1}%)",
                format_number(summary.collisions),
                summary.collision_rate() * 100.0
            ),
        );
        print_kv("Non-collisions", &format_number(summary.non_collisions));
        print_kv("Mislabeled", &format_number(summary.mislabeled));
        let grids: Vec<String> = summary.grid_sizes.iter().map(|n| format!("{n}x{n}")).collect();
        print_kv("Grid sizes", &grids.join(", "));

        if let Some(lengths) = &summary.lengths {
            print_subsection("Trajectory length (points)");
            print_kv("Mean", &format!("{:.2}", lengths.mean));
            print_kv("Std dev", &format!("{:.2}", lengths.std_dev));
            print_kv("Median", &format!("{:.1}", lengths.median));
            print_kv("Min / max", &format!("{} / {}", lengths.min, lengths.max));
        }
    }

    if let Some(index) = args.row {
        let row = rows
            .get(index)
            .with_context(|| format!("Row {index} out of range (dataset has {} rows)", rows.len()))?;
        print_subsection(&format!("Row {index}: {}", row.label));
        for (frame, step) in row.trajectory.steps().iter().enumerate() {
            let surface = OccupancyGrid::with_agents(row.grid_size, step.blue, step.red)?;
            println!("frame {frame}: blue {} red {}", step.blue, step.red);
            print!("{surface}");
        }
    }

    Ok(())
}
