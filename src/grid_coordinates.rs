//! Row-major mapping between cell coordinates and linear cell indices.
//!
//! The stride is the maze width: `index = x + y * width`.

use rand::Rng;

use crate::cells::Cartesian2DCoordinate;
use crate::grid_dimensions::MazeDimensions;


/// Convert a coordinate to a cell index. The coordinate must be inside the maze.
#[inline]
pub fn to_index(coord: Cartesian2DCoordinate, dimensions: &MazeDimensions) -> usize {
    debug_assert!(is_valid_coordinate(coord, dimensions),
                  "coordinate {:?} outside {:?}", coord, dimensions);
    coord.x as usize + coord.y as usize * dimensions.width().0
}

/// Convert a cell index to a coordinate. The index must be below `dimensions.size()`.
#[inline]
pub fn from_index(index: usize, dimensions: &MazeDimensions) -> Cartesian2DCoordinate {
    debug_assert!(is_valid_index(index, dimensions),
                  "index {} outside {:?}", index, dimensions);
    let width = dimensions.width().0;
    Cartesian2DCoordinate::new((index % width) as u32, (index / width) as u32)
}

/// Checked form of `to_index`.
/// Returns None if the coordinate is outside the maze.
pub fn grid_coordinate_to_index(coord: Cartesian2DCoordinate,
                                dimensions: &MazeDimensions)
                                -> Option<usize> {
    if is_valid_coordinate(coord, dimensions) {
        Some(to_index(coord, dimensions))
    } else {
        None
    }
}

#[inline]
pub fn is_valid_coordinate(coord: Cartesian2DCoordinate, dimensions: &MazeDimensions) -> bool {
    (coord.x as usize) < dimensions.width().0 && (coord.y as usize) < dimensions.height().0
}

#[inline]
pub fn is_valid_index(index: usize, dimensions: &MazeDimensions) -> bool {
    index < dimensions.size().0
}

/// A uniformly chosen cell index.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, dimensions: &MazeDimensions) -> usize {
    rng.gen_range(0..dimensions.size().0)
}


#[cfg(test)]
mod tests {

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::u32;

    use super::*;
    use crate::units::{Height, Width};

    fn dims(w: usize, h: usize) -> MazeDimensions {
        MazeDimensions::new(Width(w), Height(h)).expect("dimensions in range")
    }

    #[test]
    fn grid_coordinate_as_index() {
        let d = dims(3, 3);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        let coords = &[gc(0, 0), gc(1, 0), gc(2, 0), gc(0, 1), gc(1, 1), gc(2, 1), gc(0, 2),
                       gc(1, 2), gc(2, 2)];
        let indices: Vec<Option<usize>> = coords.iter()
            .map(|coord| grid_coordinate_to_index(*coord, &d))
            .collect();
        let expected = (0..9).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(expected, indices);

        assert_eq!(grid_coordinate_to_index(gc(2, 3), &d), None);
        assert_eq!(grid_coordinate_to_index(gc(3, 2), &d), None);
        assert_eq!(grid_coordinate_to_index(gc(u32::MAX, u32::MAX), &d), None);
    }

    #[test]
    fn index_round_trip_on_rectangular_grid() {
        let d = dims(7, 5);
        for index in 0..35 {
            let coord = from_index(index, &d);
            assert!(is_valid_coordinate(coord, &d));
            assert_eq!(to_index(coord, &d), index);
        }
        assert_eq!(from_index(7, &d), Cartesian2DCoordinate::new(0, 1));
        assert_eq!(from_index(34, &d), Cartesian2DCoordinate::new(6, 4));
    }

    #[test]
    fn random_cell() {
        let d = dims(4, 3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(is_valid_index(super::random_cell(&mut rng, &d), &d));
        }
    }
}
