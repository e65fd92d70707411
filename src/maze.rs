use std::fmt;

use error_chain::bail;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::adjacency::{self, NeighbourSmallVec};
use crate::cells::{self, Cartesian2DCoordinate, CompassPrimary};
use crate::errors::*;
use crate::generators;
use crate::grid_coordinates;
use crate::grid_dimensions::MazeDimensions;
use crate::units::{EdgesCount, Height, NodesCount, Width};
use crate::walls::{WallId, WallStore};


/// A perfect maze: every cell reachable from every other cell by exactly one route.
///
/// Construction always runs generation to completion, so there is no partially carved maze to
/// observe. `resize` throws the old layout away and carves a new one.
#[derive(Clone, Eq, PartialEq)]
pub struct Maze {
    dimensions: MazeDimensions,
    walls: WallStore,
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Maze :: width: {:?}, height: {:?}, passages: {:?}",
               self.width().0, self.height().0, self.passages_count())
    }
}

impl Maze {
    /// A maze seeded from the thread local generator. Out of range sides fall back to the
    /// default of 7 wide, 5 high.
    pub fn new(width: i64, height: i64) -> Maze {
        Maze::with_rng(width, height, &mut rand::thread_rng())
    }

    /// Same seed and size, same maze.
    pub fn from_seed(width: i64, height: i64, seed: u64) -> Maze {
        Maze::with_rng(width, height, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(width: i64, height: i64, rng: &mut R) -> Maze {
        Maze::from_dimensions(MazeDimensions::clamped(width, height), rng)
    }

    pub fn from_dimensions<R: Rng + ?Sized>(dimensions: MazeDimensions, rng: &mut R) -> Maze {
        Maze {
            dimensions,
            walls: generators::recursive_backtracker(&dimensions, rng),
        }
    }

    /// Discard the current layout and carve a new one at the (clamped) size.
    pub fn resize(&mut self, width: i64, height: i64) {
        self.resize_with_rng(width, height, &mut rand::thread_rng());
    }

    pub fn resize_with_rng<R: Rng + ?Sized>(&mut self, width: i64, height: i64, rng: &mut R) {
        *self = Maze::with_rng(width, height, rng);
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn walls(&self) -> &WallStore {
        &self.walls
    }

    #[inline]
    pub fn passages_count(&self) -> usize {
        self.walls.open_count()
    }

    #[inline]
    pub fn to_index(&self, coord: Cartesian2DCoordinate) -> usize {
        grid_coordinates::to_index(coord, &self.dimensions)
    }

    #[inline]
    pub fn from_index(&self, index: usize) -> Cartesian2DCoordinate {
        grid_coordinates::from_index(index, &self.dimensions)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        grid_coordinates::is_valid_coordinate(coord, &self.dimensions)
    }

    /// Cells to the North, West, East or South of a cell, in that order, but not necessarily
    /// linked by a passage. `index` must be below `size()`.
    pub fn neighbours(&self, index: usize) -> NeighbourSmallVec {
        adjacency::neighbours(index, &self.dimensions)
    }

    /// Cells linked to a cell by an open wall. `index` must be below `size()`.
    pub fn links(&self, index: usize) -> NeighbourSmallVec {
        adjacency::neighbour_walls(index, &self.dimensions)
            .into_iter()
            .filter(|&(_, wall)| !self.walls.get(wall))
            .map(|(neighbour, _)| neighbour)
            .collect()
    }

    pub fn checked_neighbours(&self, index: usize) -> Result<NeighbourSmallVec> {
        adjacency::checked_neighbours(index, &self.dimensions)
    }

    pub fn checked_links(&self, index: usize) -> Result<NeighbourSmallVec> {
        if !grid_coordinates::is_valid_index(index, &self.dimensions) {
            bail!(ErrorKind::InvalidCellIndex(index));
        }
        Ok(self.links(index))
    }

    /// The wall shared by two adjacent cells. The argument order does not matter.
    pub fn wall(&self, a: usize, b: usize) -> Result<WallId> {
        adjacency::wall_between(a, b, &self.dimensions)
    }

    /// The wall on one side of a cell, boundary walls included.
    pub fn wall_towards(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> WallId {
        adjacency::wall_towards(coord, direction)
    }

    #[inline]
    pub fn is_wall_closed(&self, wall: WallId) -> bool {
        self.walls.get(wall)
    }

    /// Is the wall on the north side of `(x, y)` closed? `y` may equal the height to ask about
    /// the south boundary.
    #[inline]
    pub fn wall_above(&self, x: usize, y: usize) -> bool {
        self.walls.above().get(x, y)
    }

    /// Is the wall on the west side of `(x, y)` closed? `x` may equal the width to ask about
    /// the east boundary.
    #[inline]
    pub fn wall_left_of(&self, x: usize, y: usize) -> bool {
        self.walls.left_of().get(x, y)
    }

    /// Are two cells connected by an open wall? False for non adjacent or invalid cells.
    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.wall(a, b).map_or(false, |wall| !self.walls.get(wall))
    }

    pub fn is_neighbour_linked(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        cells::offset_coordinate(coord, direction, &self.dimensions)
            .map_or(false, |_| !self.walls.get(self.wall_towards(coord, direction)))
    }

    /// Each passage once, as `(a, b)` cell indices with `a < b`.
    pub fn iter_passages(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size()).flat_map(move |a| {
            self.links(a)
                .into_iter()
                .filter(move |&b| a < b)
                .map(move |b| (a, b))
        })
    }

    /// Every closed wall, boundary included. This is what obstacle placement iterates over.
    pub fn iter_closed_walls(&self) -> impl Iterator<Item = WallId> + '_ {
        self.walls.iter().filter(move |&wall| self.walls.get(wall))
    }

    /// Passages as a plain text edge list: a `cells passages` line, then one `a b` line per
    /// passage using 1-based cell indices.
    pub fn edge_list(&self) -> String {
        let mut graph_data = format!("{} {}\n", self.size(), self.passages_count());
        for (index_a, index_b) in self.iter_passages() {
            graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
        }
        graph_data
    }

    /// One node per cell (node index == cell index), one edge per passage.
    pub fn passage_graph(&self) -> UnGraph<(), ()> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.dimensions.graph_size();
        let mut graph: UnGraph<(), ()> = UnGraph::with_capacity(nodes, edges);
        for _ in 0..nodes {
            let _ = graph.add_node(());
        }
        for (a, b) in self.iter_passages() {
            let _ = graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
        }
        graph
    }
}
