//! Shared assertions for the gridcollide integration tests.

#![allow(dead_code)]

use gridcollide::{
    dataset::DatasetRow,
    grid::GridSize,
    trajectory::{CollisionLabel, LabeledTrajectory},
};
use rand::{SeedableRng, rngs::StdRng};

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn grid(n: usize) -> GridSize {
    GridSize::new(n).expect("test grids are non-empty")
}

/// Checks the invariants every policy output must satisfy.
pub fn assert_well_formed(run: &LabeledTrajectory, grid: GridSize) {
    let trajectory = &run.trajectory;
    assert!(!trajectory.is_empty());
    assert_eq!(trajectory.blue_path().count(), trajectory.red_path().count());
    assert!(trajectory.is_within(grid), "trajectory leaves {grid}");
    assert_eq!(run.label, trajectory.derived_label());
    if run.label == CollisionLabel::Collision {
        let last = trajectory.last();
        assert_eq!(last.blue, last.red, "collision must end on a shared cell");
    }
}

pub fn assert_row_well_formed(row: &DatasetRow) {
    assert!(row.trajectory.is_within(row.grid_size));
    assert!(row.label_matches_dynamics());
    row.check_bounds().expect("row stays on its grid");
}
