//! Motion policies that turn starting positions into labeled trajectories
//!
//! All three policies share the single-agent step rule in [`movement`]:
//! - [`pursuit`]: biased random walk toward the other agent until they meet
//! - [`avoidance`]: biased random walk away from the other agent for a fixed budget
//! - [`fixed_direction`]: straight-line traversal from a border spawn

pub mod avoidance;
pub mod fixed_direction;
pub mod movement;
pub mod pursuit;

pub use avoidance::{AvoidanceParams, run_avoidance};
pub use fixed_direction::{FixedDirectionRun, run_fixed_direction, run_fixed_direction_from};
pub use movement::{MoveRule, Mover, Proposal, StepKind, propose_pair};
pub use pursuit::{DEFAULT_PURSUIT_STEP_CAP, PursuitParams, run_pursuit};

use crate::{Error, Result};

/// Checks that a random-move probability lies in [0, 1].
pub fn check_random_bias(random_bias: f64) -> Result<()> {
    if (0.0..=1.0).contains(&random_bias) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("random bias must be within [0, 1], got {random_bias}"),
        })
    }
}
