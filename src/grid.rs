//! Square grid, agent coordinates and starting placement

pub mod coordinate;
pub mod occupancy;
pub mod placement;

pub use coordinate::{Coordinate, Direction, GridSize};
pub use occupancy::{Cell, OccupancyGrid};
pub use placement::{
    BORDER_BAND, BorderSide, check_min_distance, place_two_agents, random_coordinate,
    select_border_spawn,
};
