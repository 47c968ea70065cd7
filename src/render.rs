//! Frame rasterization for visual inspection of datasets
//!
//! Each recorded step of a row becomes one PNG: background white, red agent
//! red, blue agent blue, `cell_px` pixels per grid cell. Files are named
//! `sample{i}_frame{j}.png` with 1-based sample numbers and 0-based frames.

use std::{fs, path::Path};

use image::{Rgb, RgbImage};
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    Error, Result,
    dataset::DatasetRow,
    grid::{Cell, OccupancyGrid},
};

/// Colors indexed by [`Cell::code`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub red: Rgb<u8>,
    pub blue: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb([255, 255, 255]),
            red: Rgb([255, 0, 0]),
            blue: Rgb([0, 0, 255]),
        }
    }
}

impl Palette {
    pub fn color(&self, cell: Cell) -> Rgb<u8> {
        [self.background, self.red, self.blue][usize::from(cell.code())]
    }
}

/// What a [`FrameRenderer::render_dataset`] call wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub rows_rendered: usize,
    pub rows_skipped: usize,
    pub frames_written: usize,
}

/// Turns dataset rows into PNG frame sequences
#[derive(Clone)]
pub struct FrameRenderer {
    cell_px: u32,
    palette: Palette,
    progress: Option<ProgressBar>,
}

impl FrameRenderer {
    pub const DEFAULT_CELL_PX: u32 = 32;

    pub fn new(cell_px: u32) -> Result<Self> {
        if cell_px == 0 {
            return Err(Error::InvalidConfiguration {
                message: "cell size must be at least one pixel".to_string(),
            });
        }
        Ok(Self {
            cell_px,
            palette: Palette::default(),
            progress: None,
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Advance `progress` once per row, skipped rows included
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    pub fn frame_file_name(sample: usize, frame: usize) -> String {
        format!("sample{sample}_frame{frame}.png")
    }

    /// Rasterize one occupancy surface.
    pub fn render_grid(&self, surface: &OccupancyGrid) -> Result<RgbImage> {
        let side = u32::try_from(surface.size().get())
            .ok()
            .and_then(|n| n.checked_mul(self.cell_px))
            .ok_or_else(|| Error::InvalidConfiguration {
                message: format!(
                    "a {} grid at {} px per cell is too large to render",
                    surface.size(),
                    self.cell_px
                ),
            })?;

        let cells: Vec<&[Cell]> = surface.rows().collect();
        Ok(RgbImage::from_fn(side, side, |x, y| {
            let row = (y / self.cell_px) as usize;
            let col = (x / self.cell_px) as usize;
            self.palette.color(cells[row][col])
        }))
    }

    /// Write every frame of `row` into `dir` as `sample{sample}_frame{j}.png`.
    ///
    /// Returns the number of frames written.
    pub fn write_row_frames(&self, row: &DatasetRow, sample: usize, dir: &Path) -> Result<usize> {
        let mut surface = OccupancyGrid::new(row.grid_size);
        for (frame, step) in row.trajectory.steps().iter().enumerate() {
            surface.clear();
            surface.set(step.blue, Cell::Blue)?;
            surface.set(step.red, Cell::Red)?;

            let path = dir.join(Self::frame_file_name(sample, frame));
            self.render_grid(&surface)?.save(&path)?;
        }

        debug!(sample, frames = row.trajectory.len(), "row rendered");
        Ok(row.trajectory.len())
    }

    /// Render all rows into `dir`, creating it if needed.
    ///
    /// With `collision_only`, rows labeled non-collision are skipped; sample
    /// numbers still follow the row's position in `rows`.
    pub fn render_dataset(
        &self,
        rows: &[DatasetRow],
        dir: &Path,
        collision_only: bool,
    ) -> Result<RenderReport> {
        fs::create_dir_all(dir).map_err(|source| Error::Io {
            operation: format!("create frame directory {dir:?}"),
            source,
        })?;

        let mut report = RenderReport::default();
        for (index, row) in rows.iter().enumerate() {
            if collision_only && !row.label.is_collision() {
                report.rows_skipped += 1;
            } else {
                report.frames_written += self.write_row_frames(row, index + 1, dir)?;
                report.rows_rendered += 1;
            }
            if let Some(progress) = &self.progress {
                progress.inc(1);
            }
        }

        if let Some(progress) = &self.progress {
            progress.finish_and_clear();
        }
        info!(
            rendered = report.rows_rendered,
            skipped = report.rows_skipped,
            frames = report.frames_written,
            dir = %dir.display(),
            "frames written"
        );
        Ok(report)
    }
}
