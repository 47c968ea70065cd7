//! Single-agent step rule shared by every policy
//!
//! Each step an agent either takes a uniformly random cardinal move (with
//! probability `random_bias`) or a directed move chosen by its [`MoveRule`].
//! Both agents' moves are proposed from the same pre-step positions.

use std::cmp::Ordering;

use rand::Rng;

use crate::{
    grid::{Coordinate, Direction, GridSize},
    trajectory::JointStep,
};

/// Directed (non-random) behaviour of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    /// Close in on the other agent on both axes at once
    Pursue,
    /// Step away from the other agent without ending next to it
    Evade,
    /// Always advance in one direction, holding at the edge
    Heading(Direction),
}

/// How a proposal was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Random,
    Directed,
}

/// A proposed next cell for one agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub next: Coordinate,
    pub kind: StepKind,
}

/// Move rule plus the probability of ignoring it for a random step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    pub rule: MoveRule,
    pub random_bias: f64,
}

impl Mover {
    pub fn new(rule: MoveRule, random_bias: f64) -> Self {
        Self { rule, random_bias }
    }

    /// Propose the next cell for an agent at `me` given the other agent at `other`.
    ///
    /// A random move that would leave the grid becomes "stay put" for this step.
    pub fn propose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        grid: GridSize,
        me: Coordinate,
        other: Coordinate,
    ) -> Proposal {
        if rng.random::<f64>() < self.random_bias {
            let direction = Direction::random(rng);
            Proposal {
                next: me.step(direction, grid).unwrap_or(me),
                kind: StepKind::Random,
            }
        } else {
            Proposal {
                next: self.directed_step(grid, me, other),
                kind: StepKind::Directed,
            }
        }
    }

    /// The move this agent's rule makes when no random step is drawn
    pub fn directed_step(&self, grid: GridSize, me: Coordinate, other: Coordinate) -> Coordinate {
        match self.rule {
            MoveRule::Pursue => toward(me, other),
            MoveRule::Evade => evade(grid, me, other),
            MoveRule::Heading(direction) => me.step_clamped(direction, grid),
        }
    }
}

/// Propose moves for both agents from the current (pre-step) joint state.
///
/// Blue draws from `rng` before red, which keeps seeded runs reproducible.
pub fn propose_pair<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    blue: &Mover,
    red: &Mover,
    current: JointStep,
) -> (Proposal, Proposal) {
    let blue_move = blue.propose(rng, grid, current.blue, current.red);
    let red_move = red.propose(rng, grid, current.red, current.blue);
    (blue_move, red_move)
}

/// One greedy step toward `target` on each axis independently
pub fn toward(me: Coordinate, target: Coordinate) -> Coordinate {
    Coordinate::new(approach(me.row, target.row), approach(me.col, target.col))
}

fn approach(from: usize, to: usize) -> usize {
    match from.cmp(&to) {
        Ordering::Less => from + 1,
        Ordering::Greater => from - 1,
        Ordering::Equal => from,
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Row,
    Col,
}

impl Axis {
    fn of(self, coordinate: Coordinate) -> usize {
        match self {
            Axis::Row => coordinate.row,
            Axis::Col => coordinate.col,
        }
    }

    fn with(self, coordinate: Coordinate, value: usize) -> Coordinate {
        match self {
            Axis::Row => Coordinate::new(value, coordinate.col),
            Axis::Col => Coordinate::new(coordinate.row, value),
        }
    }
}

/// Guarded step away from `threat`, row axis first, then column.
///
/// On each axis the agent steps away from the threat (trying +1 then -1 when
/// they share that axis). A candidate is taken only if it stays on the grid and
/// keeps the agent at least two cells (Chebyshev) from the threat's current
/// cell; otherwise that axis holds.
pub fn evade(grid: GridSize, me: Coordinate, threat: Coordinate) -> Coordinate {
    let mut next = me;
    for axis in [Axis::Row, Axis::Col] {
        let deltas: &[isize] = match axis.of(me).cmp(&axis.of(threat)) {
            Ordering::Less => &[-1],
            Ordering::Greater => &[1],
            Ordering::Equal => &[1, -1],
        };

        for &delta in deltas {
            let Some(value) = axis.of(next).checked_add_signed(delta) else {
                continue;
            };
            let candidate = axis.with(next, value);
            if grid.contains(candidate) && candidate.chebyshev_distance(threat) >= 2 {
                next = candidate;
                break;
            }
        }
    }
    next
}
