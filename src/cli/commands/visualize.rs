//! Visualize command - render dataset rows as PNG frame sequences

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use super::resolve_format;
use crate::{
    adapters::DatasetFormat,
    app::App,
    cli::output::{create_progress, format_number, print_kv, print_section},
    render::FrameRenderer,
};

#[derive(Parser, Debug)]
#[command(about = "Render dataset rows as PNG frames")]
pub struct VisualizeArgs {
    /// Dataset file to read
    pub input: PathBuf,

    /// Directory receiving sample{i}_frame{j}.png files
    #[arg(long, short = 'o', default_value = "frames")]
    pub output_dir: PathBuf,

    /// Only render rows labeled as collisions
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub collision_only: bool,

    /// Pixels per grid cell
    #[arg(long, default_value_t = FrameRenderer::DEFAULT_CELL_PX)]
    pub cell_px: u32,

    /// Render at most this many rows from the start of the file
    #[arg(long)]
    pub limit: Option<usize>,

    /// Input format (defaults to the file extension)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<DatasetFormat>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: VisualizeArgs) -> Result<()> {
    let app = App::with_format(resolve_format(&args.input, args.format));
    let mut rows = app
        .load_dataset(&args.input)
        .with_context(|| format!("Failed to load dataset from {}", args.input.display()))?;
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    let mut renderer = FrameRenderer::new(args.cell_px)?;
    if !args.no_progress {
        renderer = renderer.with_progress(create_progress(rows.len() as u64, "rows")?);
    }

    let report = renderer
        .render_dataset(&rows, &args.output_dir, args.collision_only)
        .with_context(|| format!("Failed to render frames into {}", args.output_dir.display()))?;

    print_section("Frames rendered");
    print_kv("Rows rendered", &format_number(report.rows_rendered));
    print_kv("Rows skipped", &format_number(report.rows_skipped));
    print_kv("Frames", &format_number(report.frames_written));
    print_kv("Directory", &args.output_dir.display().to_string());

    Ok(())
}
