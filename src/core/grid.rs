use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use geo_types::{Rect, coord};

use crate::coord::Coordinate;
use crate::core::constants::{AREA_EXTENTS, MARCO_ZERO_X, MARCO_ZERO_Y};
use crate::core::level::tile_size_for_level;
use crate::error::BrGridError;

/// Per-level grids are pure functions of the fixed area constants; computed
/// once, then shared read-only for the process lifetime.
static GRID_CACHE: OnceLock<RwLock<HashMap<i32, TileGrid>>> = OnceLock::new();

/// Integer cell-index bounds of the grid tiling the coverage area at one
/// resolution level.
///
/// Cell indices are absolute, relative to the Marco Zero marker, which sits
/// at the center of cell `(0, 0)` thanks to the half-tile-shifted origin.
/// `min_*`/`max_*` are inclusive; boundary tiles may extend past the area
/// maxima so that the area is fully covered.
///
/// # Example
/// ```
/// use brgrid_rs::TileGrid;
///
/// # fn main() -> Result<(), brgrid_rs::BrGridError> {
/// let grid = TileGrid::for_level(0)?;
/// assert_eq!(grid.width(), 51);
/// assert_eq!(grid.height(), 61);
/// assert_eq!(grid.curve_order(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    pub level: i32,
    /// Tile edge length in meters.
    pub tile_size: f64,
    pub min_col: i64,
    pub min_row: i64,
    pub max_col: i64,
    pub max_row: i64,
}

impl TileGrid {
    /// Returns the grid for a level, computing and caching it on first use.
    pub fn for_level(level: i32) -> Result<Self, BrGridError> {
        let cache = GRID_CACHE.get_or_init(|| RwLock::new(HashMap::new()));

        {
            let grids = cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(grid) = grids.get(&level) {
                return Ok(*grid);
            }
        }

        let grid = Self::compute(level)?;
        let mut grids = cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(*grids.entry(level).or_insert(grid))
    }

    fn compute(level: i32) -> Result<Self, BrGridError> {
        let tile_size = tile_size_for_level(level)?;
        let ox = MARCO_ZERO_X - tile_size / 2.0;
        let oy = MARCO_ZERO_Y - tile_size / 2.0;
        let [x_min, y_min, x_max, y_max] = AREA_EXTENTS;

        Ok(Self {
            level,
            tile_size,
            min_col: ((x_min - ox) / tile_size).floor() as i64,
            min_row: ((y_min - oy) / tile_size).floor() as i64,
            max_col: ((x_max - ox) / tile_size).ceil() as i64 - 1,
            max_row: ((y_max - oy) / tile_size).ceil() as i64 - 1,
        })
    }

    /// Number of columns in the grid.
    pub fn width(&self) -> i64 {
        self.max_col - self.min_col + 1
    }

    /// Number of rows in the grid.
    pub fn height(&self) -> i64 {
        self.max_row - self.min_row + 1
    }

    /// Hilbert curve order: the smallest power-of-two exponent whose square
    /// grid contains this one, with a floor of 1.
    pub fn curve_order(&self) -> u32 {
        let side = self.width().max(self.height()) as u64;
        side.next_power_of_two().trailing_zeros().max(1)
    }

    /// Exclusive upper bound of valid curve distances, `4^curve_order`.
    pub fn max_distance(&self) -> u64 {
        let side = 1u64 << self.curve_order();
        side * side
    }

    /// X coordinate of the half-tile-shifted grid origin.
    pub fn origin_x(&self) -> f64 {
        MARCO_ZERO_X - self.tile_size / 2.0
    }

    /// Y coordinate of the half-tile-shifted grid origin.
    pub fn origin_y(&self) -> f64 {
        MARCO_ZERO_Y - self.tile_size / 2.0
    }

    /// Bounding box of the cell at absolute indices `(col, row)`.
    pub fn cell_bbox(&self, col: i64, row: i64) -> Rect<f64> {
        let x_min = self.origin_x() + col as f64 * self.tile_size;
        let y_min = self.origin_y() + row as f64 * self.tile_size;
        Rect::new(
            coord! { x: x_min, y: y_min },
            coord! { x: x_min + self.tile_size, y: y_min + self.tile_size },
        )
    }

    /// Absolute cell indices `(col, row)` of the tile containing a planar
    /// point. Floor-based, so a point exactly on a boundary belongs to the
    /// tile whose half-open interval starts there.
    pub fn point_to_cell(&self, point: &impl Coordinate) -> (i64, i64) {
        (
            ((point.x() - self.origin_x()) / self.tile_size).floor() as i64,
            ((point.y() - self.origin_y()) / self.tile_size).floor() as i64,
        )
    }

    /// Shifts absolute indices into the grid-relative frame.
    pub fn normalize(&self, col: i64, row: i64) -> (i64, i64) {
        (col - self.min_col, row - self.min_row)
    }

    /// Shifts grid-relative indices back to the absolute frame.
    pub fn denormalize(&self, norm_col: i64, norm_row: i64) -> (i64, i64) {
        (norm_col + self.min_col, norm_row + self.min_row)
    }

    /// Whether normalized indices fall inside the real coverage rectangle,
    /// as opposed to the curve's padding region.
    pub fn contains_normalized(&self, norm_col: i64, norm_row: i64) -> bool {
        norm_col >= 0 && norm_row >= 0 && norm_col < self.width() && norm_row < self.height()
    }
}
