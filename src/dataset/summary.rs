//! Aggregate statistics over a set of rows

use std::collections::BTreeSet;

use serde::Serialize;
use statrs::statistics::{Data, Distribution, Median};

use super::DatasetRow;

/// Trajectory length statistics, in recorded points per row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthStats {
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
    pub min: usize,
    pub max: usize,
}

/// Counts and length statistics for a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub collisions: usize,
    pub non_collisions: usize,
    /// Rows whose stored label disagrees with their positions
    pub mislabeled: usize,
    pub grid_sizes: BTreeSet<usize>,
    /// `None` for an empty dataset
    pub lengths: Option<LengthStats>,
}

impl DatasetSummary {
    pub fn from_rows(rows: &[DatasetRow]) -> Self {
        let collisions = rows.iter().filter(|row| row.label.is_collision()).count();
        let mislabeled = rows
            .iter()
            .filter(|row| !row.label_matches_dynamics())
            .count();
        let grid_sizes = rows.iter().map(|row| row.grid_size.get()).collect();

        Self {
            rows: rows.len(),
            collisions,
            non_collisions: rows.len() - collisions,
            mislabeled,
            grid_sizes,
            lengths: LengthStats::from_rows(rows),
        }
    }

    /// Share of rows labeled as collisions
    pub fn collision_rate(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.collisions as f64 / self.rows as f64
        }
    }
}

impl LengthStats {
    fn from_rows(rows: &[DatasetRow]) -> Option<Self> {
        let lengths: Vec<usize> = rows.iter().map(|row| row.trajectory.len()).collect();
        let min = *lengths.iter().min()?;
        let max = *lengths.iter().max()?;

        let data = Data::new(lengths.iter().map(|&len| len as f64).collect::<Vec<f64>>());
        Some(Self {
            mean: data.mean()?,
            std_dev: data.std_dev().filter(|spread| spread.is_finite()).unwrap_or(0.0),
            median: data.median(),
            min,
            max,
        })
    }
}
