//! N×N occupancy surface used to draw single frames

use std::fmt;

use super::coordinate::{Coordinate, GridSize};
use crate::Result;

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Blue => 'B',
        }
    }

    /// Numeric code used by the frame colormap: 0 background, 1 red, 2 blue
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Blue => 2,
        }
    }
}

/// Row-major N×N grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl OccupancyGrid {
    /// Empty grid
    pub fn new(size: GridSize) -> Self {
        let n = size.get();
        Self {
            size,
            cells: vec![Cell::Empty; n * n],
        }
    }

    /// Grid showing one frame of a run.
    ///
    /// Blue is drawn first, so red covers the shared cell when the agents
    /// coincide.
    pub fn with_agents(size: GridSize, blue: Coordinate, red: Coordinate) -> Result<Self> {
        let mut grid = Self::new(size);
        grid.set(blue, Cell::Blue)?;
        grid.set(red, Cell::Red)?;
        Ok(grid)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        self.size
            .contains(coordinate)
            .then(|| self.cells[self.index(coordinate)])
    }

    pub fn set(&mut self, coordinate: Coordinate, cell: Cell) -> Result<()> {
        self.size.check(coordinate)?;
        let index = self.index(coordinate);
        self.cells[index] = cell;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.get())
    }

    fn index(&self, coordinate: Coordinate) -> usize {
        coordinate.row * self.size.get() + coordinate.col
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
