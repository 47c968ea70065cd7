//! Fixed-direction policy: straight-line traversal from border spawns

use rand::Rng;
use tracing::debug;

use super::movement::{MoveRule, Mover};
use crate::{
    Result,
    grid::{BorderSide, Coordinate, Direction, GridSize, select_border_spawn},
    trajectory::{JointStep, LabeledTrajectory, Trajectory},
};

/// A fixed-direction run together with how it was set up
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDirectionRun {
    pub labeled: LabeledTrajectory,
    pub blue_side: BorderSide,
    pub red_side: BorderSide,
    pub blue_heading: Direction,
    pub red_heading: Direction,
}

/// Spawn both agents near random edges and run them in straight lines.
///
/// Each agent picks its own border side independently; its heading follows
/// from the spawn cell via [`Direction::from_spawn`].
///
/// # Errors
///
/// `DegenerateGrid` for grids smaller than 2×2.
pub fn run_fixed_direction<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
) -> Result<FixedDirectionRun> {
    let blue_side = BorderSide::random(rng);
    let blue_start = select_border_spawn(rng, grid, blue_side)?;
    let red_side = BorderSide::random(rng);
    let red_start = select_border_spawn(rng, grid, red_side)?;

    let labeled = run_fixed_direction_from(grid, blue_start, red_start)?;
    Ok(FixedDirectionRun {
        labeled,
        blue_side,
        red_side,
        blue_heading: Direction::from_spawn(blue_start, grid),
        red_heading: Direction::from_spawn(red_start, grid),
    })
}

/// Deterministic straight-line run from known spawn cells.
///
/// Both agents advance one cell per step in their spawn heading, holding at
/// the edge. At most N steps are simulated. Before each step a shared cell
/// ends the run as a collision; after each step, a step in which neither
/// agent moved ends the run and is not recorded.
///
/// # Examples
///
/// ```
/// use gridcollide::{
///     grid::{Coordinate, GridSize},
///     policy::run_fixed_direction_from,
///     trajectory::CollisionLabel,
/// };
///
/// let grid = GridSize::new(5)?;
/// // Blue heads down column 2, red heads up column 0.
/// let run = run_fixed_direction_from(grid, Coordinate::new(0, 2), Coordinate::new(4, 0))?;
/// assert_eq!(run.label, CollisionLabel::NonCollision);
/// # Ok::<(), gridcollide::Error>(())
/// ```
pub fn run_fixed_direction_from(
    grid: GridSize,
    blue_start: Coordinate,
    red_start: Coordinate,
) -> Result<LabeledTrajectory> {
    grid.require_at_least(2)?;
    grid.check(blue_start)?;
    grid.check(red_start)?;

    let blue = Mover::new(MoveRule::Heading(Direction::from_spawn(blue_start, grid)), 0.0);
    let red = Mover::new(MoveRule::Heading(Direction::from_spawn(red_start, grid)), 0.0);

    let mut current = JointStep::new(blue_start, red_start);
    let mut trajectory = Trajectory::new(current);

    for _ in 0..grid.get() {
        if current.is_collision() {
            break;
        }

        let next = JointStep::new(
            blue.directed_step(grid, current.blue, current.red),
            red.directed_step(grid, current.red, current.blue),
        );
        if next == current {
            break;
        }

        trajectory.push(next);
        current = next;
    }

    let labeled = LabeledTrajectory::from_dynamics(trajectory);
    debug!(
        steps = labeled.trajectory.steps_taken(),
        label = %labeled.label,
        blue = %blue_start,
        red = %red_start,
        "fixed-direction run finished"
    );
    Ok(labeled)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{Error, trajectory::CollisionLabel};

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn grid(n: usize) -> GridSize {
        GridSize::new(n).unwrap()
    }

    #[test]
    fn crossing_paths_collide() {
        // Blue heads down column 4; red (row 2, col 4) heads right and is
        // pinned at the edge, so blue walks into it.
        let run = run_fixed_direction_from(grid(5), c(0, 4), c(2, 4)).unwrap();
        assert_eq!(run.label, CollisionLabel::Collision);
        let last = run.trajectory.last();
        assert_eq!(last.blue, last.red);
        assert_eq!(last.blue, c(2, 4));
        assert_eq!(run.trajectory.len(), 3);
    }

    #[test]
    fn stall_stops_without_recording_a_duplicate() {
        // Both spawned against the left edge heading left: nothing ever moves.
        let run = run_fixed_direction_from(grid(6), c(2, 0), c(4, 0)).unwrap();
        assert_eq!(run.trajectory.len(), 1);
        assert_eq!(run.label, CollisionLabel::NonCollision);
    }

    #[test]
    fn one_agent_keeps_moving_while_the_other_is_pinned() {
        // Blue heads left and is pinned; red walks down from row 0.
        let run = run_fixed_direction_from(grid(4), c(1, 0), c(0, 3)).unwrap();
        let red: Vec<_> = run.trajectory.red_path().collect();
        assert_eq!(red, vec![c(0, 3), c(1, 3), c(2, 3), c(3, 3)]);
        assert!(run.trajectory.blue_path().all(|cell| cell == c(1, 0)));
        assert_eq!(run.label, CollisionLabel::NonCollision);
    }

    #[test]
    fn shared_spawn_is_a_collision_without_steps() {
        let run = run_fixed_direction_from(grid(5), c(0, 1), c(0, 1)).unwrap();
        assert_eq!(run.trajectory.len(), 1);
        assert_eq!(run.label, CollisionLabel::Collision);
    }

    #[test]
    fn meeting_ends_the_run() {
        // Red is pinned at (1, 2); blue steps onto it and nothing follows.
        let run = run_fixed_direction_from(grid(3), c(0, 2), c(1, 2)).unwrap();
        assert_eq!(run.label, CollisionLabel::Collision);
        assert_eq!(run.trajectory.len(), 2);
        assert_eq!(run.trajectory.last(), JointStep::new(c(1, 2), c(1, 2)));
    }

    #[test]
    fn random_runs_respect_length_and_heading_rules() {
        let g = grid(8);
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let run = run_fixed_direction(&mut rng, g).unwrap();
            let trajectory = &run.labeled.trajectory;

            assert!(trajectory.len() <= g.get() + 1);
            assert!(trajectory.is_within(g));
            assert_eq!(
                run.blue_heading,
                Direction::from_spawn(trajectory.first().blue, g)
            );
            assert_eq!(
                run.red_heading,
                Direction::from_spawn(trajectory.first().red, g)
            );
            if run.labeled.label == CollisionLabel::Collision {
                let last = trajectory.last();
                assert_eq!(last.blue, last.red);
            }
        }
    }

    #[test]
    fn tiny_grids_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            run_fixed_direction(&mut rng, grid(1)),
            Err(Error::DegenerateGrid { .. })
        ));
    }
}
