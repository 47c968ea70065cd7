//! Avoidance policy: both agents drift apart for a fixed number of steps

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    check_random_bias,
    movement::{MoveRule, Mover, propose_pair},
};
use crate::{
    Error, Result,
    grid::{Coordinate, GridSize},
    trajectory::{JointStep, LabeledTrajectory, Trajectory},
};

/// Parameters for [`run_avoidance`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvoidanceParams {
    /// Probability of a random step instead of a guarded evasive one
    pub random_bias: f64,
    /// Exact number of steps to simulate
    pub max_steps: usize,
}

impl AvoidanceParams {
    pub fn new(random_bias: f64, max_steps: usize) -> Self {
        Self {
            random_bias,
            max_steps,
        }
    }
}

/// Simulate `max_steps` steps of mutual avoidance.
///
/// Each step both agents move simultaneously from their pre-step positions,
/// randomly with probability `random_bias`, otherwise by the guarded evasive
/// rule. The guard only looks at the other agent's pre-step cell, so the pair
/// is checked after every step; a shared cell aborts the run rather than
/// emitting a non-collision sample that actually collided.
///
/// The result always has `max_steps + 1` points and a non-collision label.
///
/// # Errors
///
/// - `OutOfBounds` if a start lies off the grid
/// - `InvalidConfiguration` for a bias outside [0, 1]
/// - `AvoidanceCollision` if the agents start on, or land on, the same cell
pub fn run_avoidance<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    blue_start: Coordinate,
    red_start: Coordinate,
    params: AvoidanceParams,
) -> Result<LabeledTrajectory> {
    grid.check(blue_start)?;
    grid.check(red_start)?;
    check_random_bias(params.random_bias)?;

    let mover = Mover::new(MoveRule::Evade, params.random_bias);
    let mut current = JointStep::new(blue_start, red_start);
    if current.is_collision() {
        return Err(Error::AvoidanceCollision { step: 0 });
    }
    let mut trajectory = Trajectory::new(current);

    for step in 1..=params.max_steps {
        let (blue, red) = propose_pair(rng, grid, &mover, &mover, current);
        current = JointStep::new(blue.next, red.next);
        if current.is_collision() {
            return Err(Error::AvoidanceCollision { step });
        }
        trajectory.push(current);
    }

    debug!(
        steps = trajectory.steps_taken(),
        blue = %blue_start,
        red = %red_start,
        "avoidance finished"
    );
    Ok(LabeledTrajectory::from_dynamics(trajectory))
}
