//! Configuration types for dataset generation.

use std::{fmt, ops::Range, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    grid::{GridSize, check_min_distance},
    policy::{DEFAULT_PURSUIT_STEP_CAP, check_random_bias},
};

/// Which policy family produces the rows of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    /// Alternating pursuit (even rows) and avoidance (odd rows) from min-distance placements
    #[default]
    RandomWalk,
    /// Straight-line runs from border spawns
    FixedDirection,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::RandomWalk, DatasetKind::FixedDirection];

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::RandomWalk => "random-walk",
            DatasetKind::FixedDirection => "fixed-direction",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| Error::ParseEnum {
                kind: "dataset kind",
                input: s.to_string(),
                expected: "random-walk, fixed-direction".to_string(),
            })
    }
}

/// Parameters for a dataset generation run.
///
/// Missing fields in a JSON config file fall back to the defaults below.
///
/// # Examples
///
/// ```
/// use gridcollide::dataset::{DatasetKind, GeneratorConfig};
///
/// let config = GeneratorConfig::default()
///     .with_grid_size(12)
///     .with_num_samples(50)
///     .with_kind(DatasetKind::FixedDirection)
///     .with_seed(7);
/// config.validate()?;
/// # Ok::<(), gridcollide::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Minimum Euclidean distance between random-walk starting cells
    pub min_distance: f64,
    /// Number of rows to generate
    pub num_samples: usize,
    pub kind: DatasetKind,
    /// Probability that an agent takes a random step
    pub random_bias: f64,
    /// Avoidance step budgets are drawn uniformly from this range
    pub avoidance_steps: Range<usize>,
    pub pursuit_step_cap: usize,
    /// Retries allowed for a row whose run was discarded
    pub max_resamples: usize,
    /// Base seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            min_distance: 3.0,
            num_samples: 100,
            kind: DatasetKind::RandomWalk,
            random_bias: 0.1,
            avoidance_steps: 3..10,
            pursuit_step_cap: DEFAULT_PURSUIT_STEP_CAP,
            max_resamples: 64,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    pub fn with_kind(mut self, kind: DatasetKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_random_bias(mut self, random_bias: f64) -> Self {
        self.random_bias = random_bias;
        self
    }

    pub fn with_avoidance_steps(mut self, avoidance_steps: Range<usize>) -> Self {
        self.avoidance_steps = avoidance_steps;
        self
    }

    pub fn with_pursuit_step_cap(mut self, pursuit_step_cap: usize) -> Self {
        self.pursuit_step_cap = pursuit_step_cap;
        self
    }

    pub fn with_max_resamples(mut self, max_resamples: usize) -> Self {
        self.max_resamples = max_resamples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn grid(&self) -> Result<GridSize> {
        GridSize::new(self.grid_size)
    }

    /// Check every parameter up front so a run cannot fail halfway on bad input.
    ///
    /// Only the parameters the selected [`DatasetKind`] uses are checked.
    pub fn validate(&self) -> Result<()> {
        let grid = self.grid()?;
        match self.kind {
            DatasetKind::FixedDirection => grid.require_at_least(2),
            DatasetKind::RandomWalk => {
                check_min_distance(grid, self.min_distance)?;
                check_random_bias(self.random_bias)?;
                if self.avoidance_steps.is_empty() {
                    return Err(Error::InvalidConfiguration {
                        message: format!(
                            "avoidance step range {}..{} is empty",
                            self.avoidance_steps.start, self.avoidance_steps.end
                        ),
                    });
                }
                if self.pursuit_step_cap == 0 {
                    return Err(Error::InvalidConfiguration {
                        message: "pursuit step cap must be positive".to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_driver() {
        let config = GeneratorConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.min_distance, 3.0);
        assert_eq!(config.avoidance_steps, 3..10);
        assert_eq!(config.kind, DatasetKind::RandomWalk);
        config.validate().unwrap();
    }

    #[test]
    fn kind_parses_loosely() {
        assert_eq!(
            "Fixed_Direction".parse::<DatasetKind>().unwrap(),
            DatasetKind::FixedDirection
        );
        assert_eq!(
            " random-walk ".parse::<DatasetKind>().unwrap(),
            DatasetKind::RandomWalk
        );
        let err = "spiral".parse::<DatasetKind>().unwrap_err();
        assert!(err.to_string().contains("random-walk, fixed-direction"));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "grid_size": 6, "kind": "fixed-direction" }"#).unwrap();
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.kind, DatasetKind::FixedDirection);
        assert_eq!(config.num_samples, 100);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn validate_rejects_infeasible_settings() {
        let too_far = GeneratorConfig::default()
            .with_grid_size(3)
            .with_min_distance(5.0);
        assert!(matches!(
            too_far.validate(),
            Err(Error::InfeasibleConstraint { .. })
        ));

        let empty_range = GeneratorConfig::default().with_avoidance_steps(4..4);
        assert!(matches!(
            empty_range.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));

        let zero_grid = GeneratorConfig::default().with_grid_size(0);
        assert!(matches!(
            zero_grid.validate(),
            Err(Error::DegenerateGrid { .. })
        ));

        let tiny_border = GeneratorConfig::default()
            .with_grid_size(1)
            .with_kind(DatasetKind::FixedDirection);
        assert!(matches!(
            tiny_border.validate(),
            Err(Error::DegenerateGrid { minimum: 2, .. })
        ));
    }

    #[test]
    fn fixed_direction_ignores_random_walk_parameters() {
        let config = GeneratorConfig::default()
            .with_kind(DatasetKind::FixedDirection)
            .with_grid_size(4)
            .with_min_distance(100.0);
        config.validate().unwrap();
    }
}
