//! Index-aligned blue/red position sequences

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    grid::{Coordinate, GridSize},
};

/// Positions of both agents at one time step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JointStep {
    pub blue: Coordinate,
    pub red: Coordinate,
}

impl JointStep {
    pub fn new(blue: Coordinate, red: Coordinate) -> Self {
        Self { blue, red }
    }

    /// Both agents occupy the same cell
    pub fn is_collision(self) -> bool {
        self.blue == self.red
    }
}

/// Whether the two agents ever share a cell during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CollisionLabel {
    NonCollision,
    Collision,
}

impl CollisionLabel {
    pub fn as_u8(self) -> u8 {
        match self {
            CollisionLabel::NonCollision => 0,
            CollisionLabel::Collision => 1,
        }
    }

    pub fn is_collision(self) -> bool {
        self == CollisionLabel::Collision
    }
}

impl From<bool> for CollisionLabel {
    fn from(collided: bool) -> Self {
        if collided {
            CollisionLabel::Collision
        } else {
            CollisionLabel::NonCollision
        }
    }
}

impl From<CollisionLabel> for u8 {
    fn from(label: CollisionLabel) -> Self {
        label.as_u8()
    }
}

impl TryFrom<u8> for CollisionLabel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(CollisionLabel::NonCollision),
            1 => Ok(CollisionLabel::Collision),
            _ => Err(Error::InvalidLabel { value }),
        }
    }
}

impl fmt::Display for CollisionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CollisionLabel::NonCollision => "non-collision",
            CollisionLabel::Collision => "collision",
        };
        f.write_str(label)
    }
}

/// Append-only sequence of joint steps, starting with the initial placement.
///
/// Storing both agents in one step keeps the blue and red sequences the same
/// length by construction. A trajectory is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<JointStep>", into = "Vec<JointStep>")]
pub struct Trajectory {
    steps: Vec<JointStep>,
}

impl Trajectory {
    pub fn new(start: JointStep) -> Self {
        Self { steps: vec![start] }
    }

    /// Zip separately stored per-agent sequences back into a trajectory.
    ///
    /// # Errors
    ///
    /// `EmptyTrajectory` when both are empty, `MismatchedTrajectories` when
    /// their lengths differ.
    pub fn from_paths(blue: Vec<Coordinate>, red: Vec<Coordinate>) -> Result<Self> {
        if blue.len() != red.len() {
            return Err(Error::MismatchedTrajectories {
                blue: blue.len(),
                red: red.len(),
            });
        }
        let steps: Vec<JointStep> = blue
            .into_iter()
            .zip(red)
            .map(|(blue, red)| JointStep::new(blue, red))
            .collect();
        Self::try_from(steps)
    }

    pub fn push(&mut self, step: JointStep) {
        self.steps.push(step);
    }

    /// Number of recorded points (steps taken + 1)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept alongside `len` for API symmetry
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps_taken(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn steps(&self) -> &[JointStep] {
        &self.steps
    }

    pub fn first(&self) -> JointStep {
        self.steps[0]
    }

    pub fn last(&self) -> JointStep {
        self.steps[self.steps.len() - 1]
    }

    pub fn blue_path(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.steps.iter().map(|step| step.blue)
    }

    pub fn red_path(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.steps.iter().map(|step| step.red)
    }

    /// Index of the first step at which both agents share a cell
    pub fn first_collision(&self) -> Option<usize> {
        self.steps.iter().position(|step| step.is_collision())
    }

    /// Label implied by the recorded positions
    pub fn derived_label(&self) -> CollisionLabel {
        CollisionLabel::from(self.first_collision().is_some())
    }

    /// Every recorded coordinate lies on `grid`
    pub fn is_within(&self, grid: GridSize) -> bool {
        self.steps
            .iter()
            .all(|step| grid.contains(step.blue) && grid.contains(step.red))
    }
}

impl TryFrom<Vec<JointStep>> for Trajectory {
    type Error = Error;

    fn try_from(steps: Vec<JointStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::EmptyTrajectory);
        }
        Ok(Self { steps })
    }
}

impl From<Trajectory> for Vec<JointStep> {
    fn from(trajectory: Trajectory) -> Self {
        trajectory.steps
    }
}

/// Output of one policy run: the trajectory and the label derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledTrajectory {
    pub trajectory: Trajectory,
    pub label: CollisionLabel,
}

impl LabeledTrajectory {
    /// Label a finished run from its own positions
    pub fn from_dynamics(trajectory: Trajectory) -> Self {
        let label = trajectory.derived_label();
        Self { trajectory, label }
    }
}
