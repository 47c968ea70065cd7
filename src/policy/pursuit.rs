//! Pursuit policy: both agents chase each other until they share a cell

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    check_random_bias,
    movement::{MoveRule, Mover, StepKind, propose_pair},
};
use crate::{
    Error, Result,
    grid::{Coordinate, GridSize},
    trajectory::{JointStep, LabeledTrajectory, Trajectory},
};

/// Steps after which a pursuit run is abandoned as non-converging
pub const DEFAULT_PURSUIT_STEP_CAP: usize = 10_000;

/// Parameters for [`run_pursuit`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PursuitParams {
    /// Probability of a random step instead of a greedy one
    pub random_bias: f64,
    /// Hard ceiling on simulated steps
    pub step_cap: usize,
}

impl PursuitParams {
    pub fn new(random_bias: f64) -> Self {
        Self {
            random_bias,
            step_cap: DEFAULT_PURSUIT_STEP_CAP,
        }
    }

    pub fn with_step_cap(mut self, step_cap: usize) -> Self {
        self.step_cap = step_cap;
        self
    }
}

/// Simulate pursuit from the given starts until blue and red coincide.
///
/// Each step both agents move simultaneously from their pre-step positions,
/// randomly with probability `random_bias`, otherwise one cell toward the
/// other on each axis. When both take a greedy step on an axis where they are
/// exactly one cell apart, red holds that axis so the pair meets instead of
/// swapping cells.
///
/// # Errors
///
/// - `OutOfBounds` if a start lies off the grid
/// - `InvalidConfiguration` for a bias outside [0, 1]
/// - `DidNotConverge` once `step_cap` steps pass without a meeting
///
/// # Examples
///
/// ```
/// use gridcollide::{
///     grid::{Coordinate, GridSize},
///     policy::{PursuitParams, run_pursuit},
///     trajectory::CollisionLabel,
/// };
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let grid = GridSize::new(10)?;
/// let run = run_pursuit(
///     &mut rng,
///     grid,
///     Coordinate::new(0, 0),
///     Coordinate::new(9, 9),
///     PursuitParams::new(0.1),
/// )?;
/// assert_eq!(run.label, CollisionLabel::Collision);
/// # Ok::<(), gridcollide::Error>(())
/// ```
pub fn run_pursuit<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    blue_start: Coordinate,
    red_start: Coordinate,
    params: PursuitParams,
) -> Result<LabeledTrajectory> {
    grid.check(blue_start)?;
    grid.check(red_start)?;
    check_random_bias(params.random_bias)?;

    let mover = Mover::new(MoveRule::Pursue, params.random_bias);
    let mut current = JointStep::new(blue_start, red_start);
    let mut trajectory = Trajectory::new(current);

    while !current.is_collision() {
        if trajectory.steps_taken() >= params.step_cap {
            return Err(Error::DidNotConverge {
                steps: params.step_cap,
            });
        }

        let (blue, red) = propose_pair(rng, grid, &mover, &mover, current);
        let red_next = if blue.kind == StepKind::Directed && red.kind == StepKind::Directed {
            hold_crossing_axes(current, red.next)
        } else {
            red.next
        };

        current = JointStep::new(blue.next, red_next);
        trajectory.push(current);
    }

    debug!(
        steps = trajectory.steps_taken(),
        blue = %blue_start,
        red = %red_start,
        "pursuit converged"
    );
    Ok(LabeledTrajectory::from_dynamics(trajectory))
}

/// Keep red's pre-step value on every axis where the agents are one cell apart.
fn hold_crossing_axes(current: JointStep, red_next: Coordinate) -> Coordinate {
    let JointStep { blue, red } = current;
    let row = if blue.row.abs_diff(red.row) == 1 {
        red.row
    } else {
        red_next.row
    };
    let col = if blue.col.abs_diff(red.col) == 1 {
        red.col
    } else {
        red_next.col
    };
    Coordinate::new(row, col)
}
