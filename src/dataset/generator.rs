//! Parallel dataset generation.
//!
//! Every row owns an `StdRng` derived from the base seed and the row index, so
//! the output is identical however rayon schedules the work.

use indicatif::{ParallelProgressIterator, ProgressBar};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::{DatasetKind, DatasetRow, GeneratorConfig};
use crate::{
    Error, Result,
    grid::{GridSize, place_two_agents},
    policy::{AvoidanceParams, PursuitParams, run_avoidance, run_fixed_direction, run_pursuit},
    trajectory::LabeledTrajectory,
};

/// Odd multiplier spreading consecutive row indices across the seed space
const ROW_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Produces labeled rows according to a validated [`GeneratorConfig`].
///
/// # Examples
///
/// ```
/// use gridcollide::dataset::{DatasetGenerator, GeneratorConfig};
///
/// let config = GeneratorConfig::default().with_num_samples(6).with_seed(3);
/// let rows = DatasetGenerator::new(config)?.generate()?;
/// assert_eq!(rows.len(), 6);
/// assert!(rows[0].label.is_collision());
/// assert!(!rows[1].label.is_collision());
/// # Ok::<(), gridcollide::Error>(())
/// ```
#[derive(Clone)]
pub struct DatasetGenerator {
    config: GeneratorConfig,
    grid: GridSize,
    seed: u64,
    progress: Option<ProgressBar>,
}

impl DatasetGenerator {
    /// Validate `config` and fix the base seed (drawn at random if unset).
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.grid()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            grid,
            seed,
            progress: None,
        })
    }

    /// Report per-row progress on `progress`
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Base seed actually in use; pass it back in to reproduce the run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate all `num_samples` rows in index order.
    pub fn generate(&self) -> Result<Vec<DatasetRow>> {
        info!(
            kind = %self.config.kind,
            grid = %self.grid,
            samples = self.config.num_samples,
            seed = self.seed,
            "generating dataset"
        );

        let indices = (0..self.config.num_samples).into_par_iter();
        let rows: Result<Vec<DatasetRow>> = match &self.progress {
            Some(progress) => indices
                .progress_with(progress.clone())
                .map(|index| self.generate_row(index))
                .collect(),
            None => indices.map(|index| self.generate_row(index)).collect(),
        };

        if let Some(progress) = &self.progress {
            progress.finish_and_clear();
        }
        let rows = rows?;

        let collisions = rows.iter().filter(|row| row.label.is_collision()).count();
        info!(
            rows = rows.len(),
            collisions,
            non_collisions = rows.len() - collisions,
            "dataset generated"
        );
        Ok(rows)
    }

    /// Generate the row at `index`, independent of every other row.
    pub fn generate_row(&self, index: usize) -> Result<DatasetRow> {
        let mut rng = self.row_rng(index);
        let labeled = match self.config.kind {
            DatasetKind::FixedDirection => run_fixed_direction(&mut rng, self.grid)?.labeled,
            DatasetKind::RandomWalk => self.sample_random_walk(&mut rng, index)?,
        };

        debug!(
            index,
            steps = labeled.trajectory.steps_taken(),
            label = %labeled.label,
            "row generated"
        );
        Ok(DatasetRow::new(self.grid, labeled))
    }

    fn row_rng(&self, index: usize) -> StdRng {
        StdRng::seed_from_u64(
            self.seed
                .wrapping_add((index as u64).wrapping_mul(ROW_SEED_STRIDE)),
        )
    }

    /// Even rows pursue, odd rows avoid; discarded runs are redrawn from a
    /// fresh placement up to `max_resamples` times.
    fn sample_random_walk(&self, rng: &mut StdRng, index: usize) -> Result<LabeledTrajectory> {
        let attempts = self.config.max_resamples + 1;
        for attempt in 1..=attempts {
            let (blue, red) = place_two_agents(rng, self.grid, self.config.min_distance)?;
            let outcome = if index % 2 == 0 {
                let params = PursuitParams::new(self.config.random_bias)
                    .with_step_cap(self.config.pursuit_step_cap);
                run_pursuit(rng, self.grid, blue, red, params)
            } else {
                let max_steps = rng.random_range(self.config.avoidance_steps.clone());
                let params = AvoidanceParams::new(self.config.random_bias, max_steps);
                run_avoidance(rng, self.grid, blue, red, params)
            };

            match outcome {
                Ok(labeled) => return Ok(labeled),
                Err(err @ (Error::AvoidanceCollision { .. } | Error::DidNotConverge { .. })) => {
                    warn!(index, attempt, error = %err, "discarding sample");
                }
                Err(err) => return Err(err),
            }
        }

        Err(Error::ResampleLimit { index, attempts })
    }
}
