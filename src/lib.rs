//! **mazes** generates perfect mazes on small rectangular grids for use as a game's obstacle map.
//!
//! A `maze::Maze` keeps two wall planes: the walls above each cell and the walls to the left of
//! each cell. Generation opens exactly `cells - 1` interior walls so that every cell is reachable
//! from every other cell by one route only.

pub mod adjacency;
pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid_coordinates;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod maze;
pub mod pathing;
pub mod units;
pub mod walls;
mod utils;
