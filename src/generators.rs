use bit_set::BitSet;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::adjacency::{self, NeighbourWallSmallVec};
use crate::grid_coordinates;
use crate::grid_dimensions::MazeDimensions;
use crate::units::NodesCount;
use crate::walls::WallStore;

/// Apply the recursive backtracker maze generation algorithm to a fully walled grid.
///
/// Starting from a random cell we walk to a random unvisited neighbour, knocking down the wall
/// between them, until we reach a cell with no unvisited neighbours. Then we backtrack along the
/// stack of visited cells until we find one that still has an unvisited neighbour and carry on
/// from there. The walk is done when the stack is empty.
///
/// Every cell except the start is entered through exactly one opened wall, so the open walls form
/// a spanning tree over the cells: a perfect maze with `cells - 1` passages.
///
/// The stack is explicit rather than the call stack, bounded by the number of cells.
pub fn recursive_backtracker<R>(dimensions: &MazeDimensions, rng: &mut R) -> WallStore
    where R: Rng + ?Sized
{
    let mut walls = WallStore::new(dimensions);
    let NodesCount(cells_count) = dimensions.size();

    let mut visited = BitSet::with_capacity(cells_count);
    let mut stack: Vec<usize> = Vec::with_capacity(cells_count);
    let mut passages = 0;

    let mut current = grid_coordinates::random_cell(rng, dimensions);
    visited.insert(current);

    loop {
        let unvisited_neighbours = adjacency::neighbour_walls(current, dimensions)
            .into_iter()
            .filter(|&(neighbour, _)| !visited.contains(neighbour))
            .collect::<NeighbourWallSmallVec>();

        if let Some(&(next, wall)) = unvisited_neighbours.choose(rng) {
            walls.set(wall, false);
            passages += 1;
            visited.insert(next);
            stack.push(current);
            current = next;
        } else if let Some(previous) = stack.pop() {
            current = previous;
        } else {
            break;
        }
    }

    debug!("recursive backtracker carved {} passages over {}x{} cells",
           passages,
           dimensions.width().0,
           dimensions.height().0);

    walls
}
