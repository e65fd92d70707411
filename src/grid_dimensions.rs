use error_chain::bail;
use log::warn;

use crate::errors::*;
use crate::units::{EdgesCount, Height, NodesCount, Width};

pub const MIN_SIDE: usize = 1;
pub const MAX_SIDE: usize = 10;
pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 5;


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeDimensions {
    width: Width,
    height: Height,
}

impl MazeDimensions {
    /// Strict construction: both sides must be within `MIN_SIDE..=MAX_SIDE`.
    pub fn new(width: Width, height: Height) -> Result<MazeDimensions> {
        if is_supported_side(width.0 as i64) && is_supported_side(height.0 as i64) {
            Ok(MazeDimensions { width, height })
        } else {
            bail!(ErrorKind::DimensionOutOfRange(width.0 as i64, height.0 as i64))
        }
    }

    /// Lenient construction: any side that is non-positive or too large is replaced by the
    /// default for that axis. Never fails.
    pub fn clamped(width: i64, height: i64) -> MazeDimensions {
        if !Self::is_supported(width, height) {
            warn!("{}, falling back to the default for each bad side",
                  Error::from(ErrorKind::DimensionOutOfRange(width, height)));
        }
        let w = if is_supported_side(width) { width as usize } else { DEFAULT_WIDTH };
        let h = if is_supported_side(height) { height as usize } else { DEFAULT_HEIGHT };

        MazeDimensions {
            width: Width(w),
            height: Height(h),
        }
    }

    pub fn is_supported(width: i64, height: i64) -> bool {
        is_supported_side(width) && is_supported_side(height)
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    /// Cells and passages of a perfect maze over these dimensions.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (cells_count, EdgesCount(cells_count.0 - 1))
    }
}

impl Default for MazeDimensions {
    fn default() -> Self {
        MazeDimensions {
            width: Width(DEFAULT_WIDTH),
            height: Height(DEFAULT_HEIGHT),
        }
    }
}

fn is_supported_side(side: i64) -> bool {
    side >= MIN_SIDE as i64 && side <= MAX_SIDE as i64
}
