use crate::grid_dimensions::MazeDimensions;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    West,
    East,
    South,
}

/// Neighbour lookup order: up, left, right, down.
pub const COMPASS_ORDER: [CompassPrimary; 4] = [CompassPrimary::North,
                                                CompassPrimary::West,
                                                CompassPrimary::East,
                                                CompassPrimary::South];

impl CompassPrimary {
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// Creates a new `Cartesian2DCoordinate` offset 1 cell away in the given direction.
/// Returns None if the coordinate would fall outside the maze.
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: CompassPrimary,
                         dimensions: &MazeDimensions)
                         -> Option<Cartesian2DCoordinate> {

    let (x, y) = (coord.x, coord.y);
    let (width, height) = (dimensions.width().0 as u32, dimensions.height().0 as u32);
    match dir {
        CompassPrimary::North => {
            if y > 0 {
                Some(Cartesian2DCoordinate { x, y: y - 1 })
            } else {
                None
            }
        }
        CompassPrimary::South => {
            if y + 1 < height {
                Some(Cartesian2DCoordinate { x, y: y + 1 })
            } else {
                None
            }
        }
        CompassPrimary::East => {
            if x + 1 < width {
                Some(Cartesian2DCoordinate { x: x + 1, y })
            } else {
                None
            }
        }
        CompassPrimary::West => {
            if x > 0 {
                Some(Cartesian2DCoordinate { x: x - 1, y })
            } else {
                None
            }
        }
    }
}

/// The compass direction leading from `a` to `b` when they are adjacent.
pub fn direction_between(a: Cartesian2DCoordinate,
                         b: Cartesian2DCoordinate)
                         -> Option<CompassPrimary> {
    if a.y == b.y {
        if b.x == a.x + 1 {
            return Some(CompassPrimary::East);
        }
        if a.x == b.x + 1 {
            return Some(CompassPrimary::West);
        }
    }
    if a.x == b.x {
        if b.y == a.y + 1 {
            return Some(CompassPrimary::South);
        }
        if a.y == b.y + 1 {
            return Some(CompassPrimary::North);
        }
    }
    None
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{Height, Width};

    fn dims(w: usize, h: usize) -> MazeDimensions {
        MazeDimensions::new(Width(w), Height(h)).expect("dimensions in range")
    }

    #[test]
    fn offsets_stay_inside_the_maze() {
        let d = dims(2, 2);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        let check = |coord, dir, expected| assert_eq!(offset_coordinate(coord, dir, &d), expected);

        check(gc(0, 0), CompassPrimary::North, None);
        check(gc(0, 0), CompassPrimary::West, None);
        check(gc(0, 0), CompassPrimary::South, Some(gc(0, 1)));
        check(gc(0, 0), CompassPrimary::East, Some(gc(1, 0)));

        check(gc(1, 1), CompassPrimary::South, None);
        check(gc(1, 1), CompassPrimary::East, None);
        check(gc(1, 1), CompassPrimary::North, Some(gc(1, 0)));
        check(gc(1, 1), CompassPrimary::West, Some(gc(0, 1)));
    }

    #[test]
    fn direction_between_adjacent_cells() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(direction_between(gc(1, 1), gc(1, 0)), Some(CompassPrimary::North));
        assert_eq!(direction_between(gc(1, 1), gc(1, 2)), Some(CompassPrimary::South));
        assert_eq!(direction_between(gc(1, 1), gc(2, 1)), Some(CompassPrimary::East));
        assert_eq!(direction_between(gc(1, 1), gc(0, 1)), Some(CompassPrimary::West));

        assert_eq!(direction_between(gc(1, 1), gc(1, 1)), None);
        assert_eq!(direction_between(gc(1, 1), gc(2, 2)), None);
        assert_eq!(direction_between(gc(0, 0), gc(2, 0)), None);
    }

    #[test]
    fn opposite_directions() {
        for dir in COMPASS_ORDER.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }
}
