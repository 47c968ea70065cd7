//! Coordinates, grid sizes and the four cardinal directions

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A cell position on the grid, addressed as (row, column).
///
/// Row 0 is the top edge and column 0 is the left edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Straight-line distance between two cells
    pub fn euclidean_distance(self, other: Coordinate) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        dr.hypot(dc)
    }

    /// Number of king moves between two cells
    pub fn chebyshev_distance(self, other: Coordinate) -> usize {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }

    /// Move one cell in `direction`, or `None` if that would leave the grid.
    pub fn step(self, direction: Direction, grid: GridSize) -> Option<Coordinate> {
        let (dr, dc) = direction.offset();
        let next = Coordinate::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        );
        grid.contains(next).then_some(next)
    }

    /// Move one cell in `direction`, holding at the edge instead of leaving the grid.
    pub fn step_clamped(self, direction: Direction, grid: GridSize) -> Coordinate {
        self.step(direction, grid).unwrap_or(self)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Side length N of an N×N grid.
///
/// Always at least 1; constructors reject an empty grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::DegenerateGrid {
                size,
                minimum: 1,
            });
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Largest valid row or column index
    pub fn max_index(self) -> usize {
        self.0 - 1
    }

    pub fn contains(self, coordinate: Coordinate) -> bool {
        coordinate.row < self.0 && coordinate.col < self.0
    }

    /// Fails with `OutOfBounds` unless `coordinate` lies on the grid.
    pub fn check(self, coordinate: Coordinate) -> Result<()> {
        if self.contains(coordinate) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row: coordinate.row,
                col: coordinate.col,
                grid_size: self.0,
            })
        }
    }

    /// Fails with `DegenerateGrid` when the grid is smaller than `minimum`.
    pub fn require_at_least(self, minimum: usize) -> Result<()> {
        if self.0 < minimum {
            return Err(Error::DegenerateGrid {
                size: self.0,
                minimum,
            });
        }
        Ok(())
    }

    /// Corner-to-corner Euclidean distance, the largest separation two cells can have
    pub fn diagonal(self) -> f64 {
        Coordinate::new(0, 0).euclidean_distance(Coordinate::new(self.max_index(), self.max_index()))
    }
}

impl TryFrom<usize> for GridSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// One of the four cardinal moves on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, column) delta of a single step
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Uniformly random direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Heading assigned to a fixed-direction agent spawned at `spawn`.
    ///
    /// Row checks take priority over column checks: row 0 heads down, the last
    /// row heads up, otherwise column 0 heads left and anything else heads right.
    pub fn from_spawn(spawn: Coordinate, grid: GridSize) -> Direction {
        if spawn.row == 0 {
            Direction::Down
        } else if spawn.row == grid.max_index() {
            Direction::Up
        } else if spawn.col == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(label)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(Error::ParseEnum {
                kind: "direction",
                input: s.to_string(),
                expected: "up, down, left, right".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> GridSize {
        GridSize::new(n).unwrap()
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert!(matches!(
            GridSize::new(0),
            Err(Error::DegenerateGrid { size: 0, .. })
        ));
    }

    #[test]
    fn step_refuses_to_leave_any_edge() {
        let g = grid(4);
        assert_eq!(Coordinate::new(0, 2).step(Direction::Up, g), None);
        assert_eq!(Coordinate::new(3, 2).step(Direction::Down, g), None);
        assert_eq!(Coordinate::new(2, 0).step(Direction::Left, g), None);
        assert_eq!(Coordinate::new(2, 3).step(Direction::Right, g), None);
        assert_eq!(
            Coordinate::new(2, 2).step(Direction::Up, g),
            Some(Coordinate::new(1, 2))
        );
    }

    #[test]
    fn step_clamped_holds_at_edge() {
        let g = grid(4);
        let corner = Coordinate::new(0, 0);
        assert_eq!(corner.step_clamped(Direction::Up, g), corner);
        assert_eq!(corner.step_clamped(Direction::Left, g), corner);
        assert_eq!(
            corner.step_clamped(Direction::Right, g),
            Coordinate::new(0, 1)
        );
    }

    #[test]
    fn distances() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, 4);
        assert!((a.euclidean_distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.chebyshev_distance(b), 4);
        assert!((grid(10).diagonal() - 9.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn spawn_heading_prefers_rows_over_columns() {
        let g = grid(5);
        assert_eq!(Direction::from_spawn(Coordinate::new(0, 2), g), Direction::Down);
        assert_eq!(Direction::from_spawn(Coordinate::new(4, 1), g), Direction::Up);
        assert_eq!(Direction::from_spawn(Coordinate::new(2, 0), g), Direction::Left);
        assert_eq!(Direction::from_spawn(Coordinate::new(2, 4), g), Direction::Right);
        // Corners resolve on the row check.
        assert_eq!(Direction::from_spawn(Coordinate::new(0, 0), g), Direction::Down);
        assert_eq!(Direction::from_spawn(Coordinate::new(4, 0), g), Direction::Up);
        // Interior cells fall through to "right".
        assert_eq!(Direction::from_spawn(Coordinate::new(1, 1), g), Direction::Right);
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("Down".parse::<Direction>().unwrap(), Direction::Down);
        assert!("north".parse::<Direction>().is_err());
    }
}
