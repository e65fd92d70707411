use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::Cartesian2DCoordinate;
use crate::maze::Maze;
use crate::utils;
use crate::utils::FnvHashMap;


/// Number of steps through open walls from a start cell to every reachable cell.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Cartesian2DCoordinate,
    distances: FnvHashMap<Cartesian2DCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    pub fn new(maze: &Maze, start_coordinate: Cartesian2DCoordinate) -> Option<Distances> {

        if !maze.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(maze.size());
        distances.insert(start_coordinate, 0);

        // Every step is one from the previous cell, so the first time a cell is reached is by
        // the shortest route. The map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link_index in maze.links(maze.to_index(*cell_coord)) {
                    let link_coordinate = maze.from_index(link_index);
                    if !distances.contains_key(&link_coordinate) {
                        distances.insert(link_coordinate, distance_to_cell + 1);
                        new_frontier.push(link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cartesian2DCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Cartesian2DCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// How many cells, the start included, can be reached from the start.
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Cells at the maximum distance, in coordinate order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[Cartesian2DCoordinate; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted()
            .collect()
    }
}

/// Walk back from `end_point` to the start of `distances_from_start`, always stepping to the
/// linked neighbour closest to the start.
pub fn shortest_path(maze: &Maze,
                     distances_from_start: &Distances,
                     end_point: Cartesian2DCoordinate)
                     -> Option<Vec<Cartesian2DCoordinate>> {

    if !maze.is_valid_coordinate(end_point) {
        return None;
    }
    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {

        let closest_to_start = maze.links(maze.to_index(current_coord))
            .into_iter()
            .map(|index| maze.from_index(index))
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(coord).map(|distance| (coord, distance))
            })
            .min_by_key(|&(_, distance)| distance);

        match closest_to_start {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // No linked neighbour is any closer: the distances belong to some other maze.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The longest route through a perfect maze.
///
/// The cell furthest from any arbitrary cell is one end of the longest path, the cell furthest
/// from that is the other end.
pub fn longest_path(maze: &Maze) -> Option<Vec<Cartesian2DCoordinate>> {
    let first_distances = Distances::new(maze, Cartesian2DCoordinate::new(0, 0))?;
    let long_path_start_coordinate = *first_distances.furthest_points_on_grid().first()?;

    let distances_from_start = Distances::new(maze, long_path_start_coordinate)?;
    let end_point = *distances_from_start.furthest_points_on_grid().first()?;

    shortest_path(maze, &distances_from_start, end_point)
}


#[cfg(test)]
mod tests {

    use std::u32;

    use super::*;

    static OUT_OF_GRID_COORDINATE: Cartesian2DCoordinate = Cartesian2DCoordinate {
        x: u32::MAX,
        y: u32::MAX,
    };

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let maze = Maze::from_seed(3, 3, 1);
        assert!(Distances::new(&maze, OUT_OF_GRID_COORDINATE).is_none());
    }

    #[test]
    fn start() {
        let maze = Maze::from_seed(3, 3, 1);
        let start_coordinate = Cartesian2DCoordinate::new(1, 1);
        let distances = Distances::new(&maze, start_coordinate).unwrap();
        assert_eq!(start_coordinate, distances.start());
        assert_eq!(distances.distance_from_start_to(start_coordinate), Some(0));
    }

    #[test]
    fn distance_to_invalid_coordinate_is_none() {
        let maze = Maze::from_seed(3, 3, 1);
        let distances = Distances::new(&maze, Cartesian2DCoordinate::new(0, 0)).unwrap();
        assert_eq!(distances.distance_from_start_to(OUT_OF_GRID_COORDINATE), None);
    }

    #[test]
    fn every_cell_is_reachable() {
        for w in 1..=10 {
            for h in 1..=10 {
                let maze = Maze::from_seed(w, h, 42);
                let distances = Distances::new(&maze, Cartesian2DCoordinate::new(0, 0)).unwrap();
                assert_eq!(distances.reachable_count(), maze.size(), "{:?}", maze);
            }
        }
    }

    #[test]
    fn two_by_one_distances() {
        let maze = Maze::new(2, 1);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        let distances = Distances::new(&maze, gc(0, 0)).unwrap();
        assert_eq!(distances.distance_from_start_to(gc(1, 0)), Some(1));
        assert_eq!(distances.max(), 1);
        assert_eq!(&*distances.furthest_points_on_grid(), &[gc(1, 0)]);
        assert_eq!(shortest_path(&maze, &distances, gc(1, 0)), Some(vec![gc(0, 0), gc(1, 0)]));
    }

    #[test]
    fn shortest_path_steps_through_passages() {
        let maze = Maze::from_seed(8, 6, 17);
        let distances = Distances::new(&maze, Cartesian2DCoordinate::new(0, 0)).unwrap();
        let end = Cartesian2DCoordinate::new(7, 5);
        let path = shortest_path(&maze, &distances, end).expect("perfect maze has a route");

        assert_eq!(path.first(), Some(&Cartesian2DCoordinate::new(0, 0)));
        assert_eq!(path.last(), Some(&end));
        assert_eq!(path.len() as u32, distances.distance_from_start_to(end).unwrap() + 1);
        for (a, b) in path.iter().tuple_windows() {
            assert!(maze.is_linked(maze.to_index(*a), maze.to_index(*b)));
        }
    }

    #[test]
    fn shortest_path_with_foreign_distances_is_none() {
        let small = Maze::from_seed(2, 2, 3);
        let large = Maze::from_seed(9, 9, 3);
        let distances = Distances::new(&small, Cartesian2DCoordinate::new(0, 0)).unwrap();
        let far_end = Cartesian2DCoordinate::new(8, 8);
        assert_eq!(shortest_path(&large, &distances, far_end), None);
    }

    #[test]
    fn shortest_path_to_cell_outside_the_maze_is_none() {
        let small = Maze::from_seed(2, 2, 3);
        let large = Maze::from_seed(9, 9, 3);
        let distances = Distances::new(&large, Cartesian2DCoordinate::new(0, 0)).unwrap();
        let far_end = Cartesian2DCoordinate::new(8, 8);
        assert!(distances.distance_from_start_to(far_end).is_some());
        assert_eq!(shortest_path(&small, &distances, far_end), None);
        assert_eq!(shortest_path(&small, &distances, OUT_OF_GRID_COORDINATE), None);
    }

    #[test]
    fn shortest_path_with_start_outside_the_maze_is_none() {
        let small = Maze::from_seed(2, 2, 3);
        let large = Maze::from_seed(9, 9, 3);
        let distances = Distances::new(&large, Cartesian2DCoordinate::new(8, 8)).unwrap();
        assert_eq!(shortest_path(&small, &distances, Cartesian2DCoordinate::new(1, 1)), None);
    }

    #[test]
    fn longest_path_is_at_least_as_long_as_any_distance() {
        let maze = Maze::from_seed(10, 10, 5);
        let path = longest_path(&maze).unwrap();
        let from_path_start = Distances::new(&maze, path[0]).unwrap();
        assert_eq!(path.len() as u32, from_path_start.max() + 1);

        for index in 0..maze.size() {
            let d = Distances::new(&maze, maze.from_index(index)).unwrap();
            assert!(d.max() + 1 <= path.len() as u32);
        }
    }

    #[test]
    fn longest_path_on_single_cell() {
        let maze = Maze::new(1, 1);
        assert_eq!(longest_path(&maze), Some(vec![Cartesian2DCoordinate::new(0, 0)]));
    }
}
