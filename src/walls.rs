//! Two boolean wall planes framing the maze cells.
//!
//! `above` holds the wall on the north side of each cell and has one extra row for the south
//! boundary. `left_of` holds the wall on the west side of each cell and has one extra column for
//! the east boundary. `true` means closed.

use crate::grid_dimensions::MazeDimensions;


#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub enum WallAxis {
    /// North side of a cell.
    Above,
    /// West side of a cell.
    LeftOf,
}

/// One wall cell in one of the planes.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct WallId {
    pub axis: WallAxis,
    pub x: u32,
    pub y: u32,
}

impl WallId {
    pub fn above(x: u32, y: u32) -> WallId {
        WallId { axis: WallAxis::Above, x, y }
    }

    pub fn left_of(x: u32, y: u32) -> WallId {
        WallId { axis: WallAxis::LeftOf, x, y }
    }
}

/// Read-only outside the crate, clones included:
///
/// ```compile_fail
/// use mazes::grid_dimensions::MazeDimensions;
/// use mazes::walls::WallStore;
///
/// let walls = WallStore::new(&MazeDimensions::default());
/// let mut plane = walls.above().clone();
/// plane.set(0, 0, false);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WallPlane {
    rows: usize,
    columns: usize,
    closed: Vec<bool>,
}

impl WallPlane {
    fn new_closed(rows: usize, columns: usize) -> WallPlane {
        WallPlane {
            rows,
            columns,
            closed: vec![true; rows * columns],
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Panics if `(x, y)` is outside the plane.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.closed[self.offset(x, y)]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, closed: bool) {
        let offset = self.offset(x, y);
        self.closed[offset] = closed;
    }

    pub fn open_count(&self) -> usize {
        self.closed.iter().filter(|&&closed| !closed).count()
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(x < self.columns && y < self.rows,
                "wall ({}, {}) outside {}x{} plane", x, y, self.columns, self.rows);
        y * self.columns + x
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WallStore {
    above: WallPlane,
    left_of: WallPlane,
}

impl WallStore {
    /// Every wall starts closed.
    pub fn new(dimensions: &MazeDimensions) -> WallStore {
        let (w, h) = (dimensions.width().0, dimensions.height().0);
        WallStore {
            above: WallPlane::new_closed(h + 1, w),
            left_of: WallPlane::new_closed(h, w + 1),
        }
    }

    #[inline(always)]
    pub fn above(&self) -> &WallPlane {
        &self.above
    }

    #[inline(always)]
    pub fn left_of(&self) -> &WallPlane {
        &self.left_of
    }

    #[inline]
    pub fn get(&self, wall: WallId) -> bool {
        self.plane(wall.axis).get(wall.x as usize, wall.y as usize)
    }

    #[inline]
    pub(crate) fn set(&mut self, wall: WallId, closed: bool) {
        let plane = match wall.axis {
            WallAxis::Above => &mut self.above,
            WallAxis::LeftOf => &mut self.left_of,
        };
        plane.set(wall.x as usize, wall.y as usize, closed);
    }

    /// Number of open walls over both planes.
    pub fn open_count(&self) -> usize {
        self.above.open_count() + self.left_of.open_count()
    }

    /// Number of wall cells over both planes, boundary included.
    pub fn wall_count(&self) -> usize {
        self.above.closed.len() + self.left_of.closed.len()
    }

    /// All wall ids, `above` plane first, each plane in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = WallId> + '_ {
        let above = plane_ids(&self.above, WallId::above);
        let left_of = plane_ids(&self.left_of, WallId::left_of);
        above.chain(left_of)
    }

    fn plane(&self, axis: WallAxis) -> &WallPlane {
        match axis {
            WallAxis::Above => &self.above,
            WallAxis::LeftOf => &self.left_of,
        }
    }
}

fn plane_ids(plane: &WallPlane,
             make_id: fn(u32, u32) -> WallId)
             -> impl Iterator<Item = WallId> {
    let columns = plane.columns();
    (0..plane.rows() * columns).map(move |offset| {
        make_id((offset % columns) as u32, (offset / columns) as u32)
    })
}
