//! Starting positions for the two agents
//!
//! Two placement schemes exist: rejection sampling of a separated pair anywhere
//! on the grid (used by the pursuit and avoidance policies), and border spawns
//! near one edge (used by the fixed-direction policy).

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, GridSize};
use crate::{Error, Result};

/// Depth, in cells, of the band next to an edge that border spawns are drawn from
pub const BORDER_BAND: usize = 3;

/// Grid edge used for border spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderSide {
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Left,
        BorderSide::Right,
        BorderSide::Top,
        BorderSide::Bottom,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> BorderSide {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for BorderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BorderSide::Left => "left",
            BorderSide::Right => "right",
            BorderSide::Top => "top",
            BorderSide::Bottom => "bottom",
        };
        f.write_str(label)
    }
}

impl FromStr for BorderSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(BorderSide::Left),
            "right" => Ok(BorderSide::Right),
            "top" => Ok(BorderSide::Top),
            "bottom" => Ok(BorderSide::Bottom),
            _ => Err(Error::ParseEnum {
                kind: "border side",
                input: s.to_string(),
                expected: "left, right, top, bottom".to_string(),
            }),
        }
    }
}

/// Uniformly random cell on the grid
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Coordinate {
    let n = grid.get();
    Coordinate::new(rng.random_range(0..n), rng.random_range(0..n))
}

/// Checks that some pair of cells on `grid` is at least `min_distance` apart.
///
/// # Errors
///
/// - `InvalidConfiguration` for a negative or non-finite distance
/// - `InfeasibleConstraint` when the distance exceeds the grid diagonal
pub fn check_min_distance(grid: GridSize, min_distance: f64) -> Result<()> {
    if !min_distance.is_finite() || min_distance < 0.0 {
        return Err(Error::InvalidConfiguration {
            message: format!("minimum distance must be a non-negative number, got {min_distance}"),
        });
    }

    let diagonal = grid.diagonal();
    if min_distance > diagonal {
        return Err(Error::InfeasibleConstraint {
            grid_size: grid.get(),
            min_distance,
            diagonal,
        });
    }
    Ok(())
}

/// Place the blue and red agents at least `min_distance` apart (Euclidean).
///
/// Both cells are drawn independently and uniformly; the first pair that
/// satisfies the separation is returned. Feasibility is checked before
/// sampling, so the loop always has a reachable exit.
///
/// # Examples
///
/// ```
/// use gridcollide::grid::{GridSize, place_two_agents};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = GridSize::new(10)?;
/// let (blue, red) = place_two_agents(&mut rng, grid, 3.0)?;
/// assert!(blue.euclidean_distance(red) >= 3.0);
/// # Ok::<(), gridcollide::Error>(())
/// ```
pub fn place_two_agents<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    min_distance: f64,
) -> Result<(Coordinate, Coordinate)> {
    check_min_distance(grid, min_distance)?;

    loop {
        let blue = random_coordinate(rng, grid);
        let red = random_coordinate(rng, grid);
        if blue.euclidean_distance(red) >= min_distance {
            return Ok((blue, red));
        }
    }
}

/// Pick a spawn cell close to one edge of the grid.
///
/// The coordinate along the edge is uniform over the full range; the distance
/// from the edge is uniform over the `BORDER_BAND` nearest cells (fewer on
/// grids smaller than the band).
///
/// # Errors
///
/// `DegenerateGrid` for grids smaller than 2×2.
pub fn select_border_spawn<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    side: BorderSide,
) -> Result<Coordinate> {
    grid.require_at_least(2)?;

    let n = grid.get();
    let along = rng.random_range(0..n);
    let depth = rng.random_range(0..BORDER_BAND.min(n));

    let spawn = match side {
        BorderSide::Top => Coordinate::new(depth, along),
        BorderSide::Bottom => Coordinate::new(n - 1 - depth, along),
        BorderSide::Left => Coordinate::new(along, depth),
        BorderSide::Right => Coordinate::new(along, n - 1 - depth),
    };
    Ok(spawn)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn placement_respects_min_distance_and_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = GridSize::new(10).unwrap();
        for _ in 0..500 {
            let (blue, red) = place_two_agents(&mut rng, grid, 3.0).unwrap();
            assert!(grid.contains(blue) && grid.contains(red));
            assert!(blue.euclidean_distance(red) >= 3.0);
        }
    }

    #[test]
    fn placement_at_exact_diagonal_uses_opposite_corners() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = GridSize::new(3).unwrap();
        let (blue, red) = place_two_agents(&mut rng, grid, grid.diagonal()).unwrap();
        assert_eq!(blue.chebyshev_distance(red), 2);
        assert_eq!(blue.row.abs_diff(red.row), 2);
        assert_eq!(blue.col.abs_diff(red.col), 2);
    }

    #[test]
    fn infeasible_distance_fails_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridSize::new(4).unwrap();
        let err = place_two_agents(&mut rng, grid, 5.0).unwrap_err();
        assert!(matches!(err, Error::InfeasibleConstraint { grid_size: 4, .. }));
    }

    #[test]
    fn negative_distance_is_invalid() {
        let grid = GridSize::new(4).unwrap();
        assert!(matches!(
            check_min_distance(grid, -1.0),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(check_min_distance(grid, f64::NAN).is_err());
    }

    #[test]
    fn border_spawn_stays_within_band() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = GridSize::new(10).unwrap();
        for _ in 0..200 {
            for side in BorderSide::ALL {
                let spawn = select_border_spawn(&mut rng, grid, side).unwrap();
                assert!(grid.contains(spawn));
                let depth = match side {
                    BorderSide::Top => spawn.row,
                    BorderSide::Bottom => 9 - spawn.row,
                    BorderSide::Left => spawn.col,
                    BorderSide::Right => 9 - spawn.col,
                };
                assert!(depth < BORDER_BAND, "{side} spawn {spawn} too deep");
            }
        }
    }

    #[test]
    fn border_spawn_on_tiny_grids() {
        let mut rng = StdRng::seed_from_u64(5);
        let two = GridSize::new(2).unwrap();
        for side in BorderSide::ALL {
            assert!(two.contains(select_border_spawn(&mut rng, two, side).unwrap()));
        }

        let one = GridSize::new(1).unwrap();
        assert!(matches!(
            select_border_spawn(&mut rng, one, BorderSide::Top),
            Err(Error::DegenerateGrid { size: 1, minimum: 2 })
        ));
    }
}
