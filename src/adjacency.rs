//! Which wall cell separates two neighbouring maze cells.
//!
//! An adjacency has exactly one wall whichever side it is looked at from: the wall between
//! `(x, y)` and its eastern neighbour is `left_of(x + 1, y)`, the wall between `(x, y)` and its
//! southern neighbour is `above(x, y + 1)`.

use error_chain::bail;
use smallvec::SmallVec;

use crate::cells::{self, Cartesian2DCoordinate, CompassPrimary, COMPASS_ORDER};
use crate::errors::*;
use crate::grid_coordinates::{from_index, is_valid_index, to_index};
use crate::grid_dimensions::MazeDimensions;
use crate::walls::WallId;

pub type NeighbourSmallVec = SmallVec<[usize; 4]>;
pub type NeighbourWallSmallVec = SmallVec<[(usize, WallId); 4]>;


/// The wall on the `direction` side of `coord`. Boundary walls are included.
pub fn wall_towards(coord: Cartesian2DCoordinate, direction: CompassPrimary) -> WallId {
    let Cartesian2DCoordinate { x, y } = coord;
    match direction {
        CompassPrimary::North => WallId::above(x, y),
        CompassPrimary::South => WallId::above(x, y + 1),
        CompassPrimary::West => WallId::left_of(x, y),
        CompassPrimary::East => WallId::left_of(x + 1, y),
    }
}

/// In-bounds neighbours of a cell paired with the wall shared with each one.
/// Ordered up, left, right, down.
///
/// `index` must be below `dimensions.size()`; use `checked_neighbours` for untrusted indices.
pub fn neighbour_walls(index: usize, dimensions: &MazeDimensions) -> NeighbourWallSmallVec {
    debug_assert!(is_valid_index(index, dimensions),
                  "cell index {} outside {:?}", index, dimensions);
    let coord = from_index(index, dimensions);
    COMPASS_ORDER.iter()
        .filter_map(|&dir| {
            cells::offset_coordinate(coord, dir, dimensions)
                .map(|neighbour| (to_index(neighbour, dimensions), wall_towards(coord, dir)))
        })
        .collect()
}

/// In-bounds neighbour indices of a cell, ordered up, left, right, down.
pub fn neighbours(index: usize, dimensions: &MazeDimensions) -> NeighbourSmallVec {
    neighbour_walls(index, dimensions)
        .into_iter()
        .map(|(neighbour, _)| neighbour)
        .collect()
}

/// Checked form of `neighbours`.
pub fn checked_neighbours(index: usize, dimensions: &MazeDimensions) -> Result<NeighbourSmallVec> {
    if !is_valid_index(index, dimensions) {
        bail!(ErrorKind::InvalidCellIndex(index));
    }
    Ok(neighbours(index, dimensions))
}

pub fn wall_between(a: usize, b: usize, dimensions: &MazeDimensions) -> Result<WallId> {
    for &index in &[a, b] {
        if !is_valid_index(index, dimensions) {
            bail!(ErrorKind::InvalidCellIndex(index));
        }
    }

    let a_coord = from_index(a, dimensions);
    let b_coord = from_index(b, dimensions);
    cells::direction_between(a_coord, b_coord)
        .map(|dir| wall_towards(a_coord, dir))
        .ok_or_else(|| ErrorKind::InvalidAdjacency(a, b).into())
}
