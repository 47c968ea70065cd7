//! Dataset rows and their flat tabular form

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    grid::GridSize,
    trajectory::{CollisionLabel, LabeledTrajectory, Trajectory, encode_path, parse_path},
};

/// One generated sample: grid size, joint trajectory and collision label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub grid_size: GridSize,
    pub trajectory: Trajectory,
    pub label: CollisionLabel,
}

impl DatasetRow {
    pub fn new(grid_size: GridSize, labeled: LabeledTrajectory) -> Self {
        Self {
            grid_size,
            trajectory: labeled.trajectory,
            label: labeled.label,
        }
    }

    /// The stored label agrees with what the positions imply.
    ///
    /// Always true for generated rows; loaded files may disagree.
    pub fn label_matches_dynamics(&self) -> bool {
        self.label == self.trajectory.derived_label()
    }

    /// Fails with `OutOfBounds` on the first recorded cell off the row's grid.
    pub fn check_bounds(&self) -> Result<()> {
        for step in self.trajectory.steps() {
            self.grid_size.check(step.blue)?;
            self.grid_size.check(step.red)?;
        }
        Ok(())
    }
}

/// CSV-facing row: `grid_size,object1_action,object2_action,collision_status`.
///
/// `object1` is the blue agent and `object2` the red one; both paths are
/// stored as `[(r, c), ...]` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub grid_size: usize,
    pub object1_action: String,
    pub object2_action: String,
    pub collision_status: u8,
}

impl From<&DatasetRow> for DatasetRecord {
    fn from(row: &DatasetRow) -> Self {
        Self {
            grid_size: row.grid_size.get(),
            object1_action: encode_path(row.trajectory.blue_path()),
            object2_action: encode_path(row.trajectory.red_path()),
            collision_status: row.label.as_u8(),
        }
    }
}

impl TryFrom<DatasetRecord> for DatasetRow {
    type Error = Error;

    /// Parses both paths and checks them against the grid; the label is kept
    /// as stored.
    fn try_from(record: DatasetRecord) -> Result<Self> {
        let grid_size = GridSize::new(record.grid_size)?;
        let blue = parse_path(&record.object1_action)?;
        let red = parse_path(&record.object2_action)?;
        let row = Self {
            grid_size,
            trajectory: Trajectory::from_paths(blue, red)?,
            label: CollisionLabel::try_from(record.collision_status)?,
        };
        row.check_bounds()?;
        Ok(row)
    }
}
