use geo_types::{Point, Polygon, Rect};

use crate::core::geometry::create_square_from_rect;

/// A single square tile of the Hilbert-ordered grid.
///
/// Tiles are immutable values built per request. The identifier, the curve
/// distance and the normalized cell are bijective for a given level, so two
/// tiles compare equal exactly when they name the same cell of the same grid.
///
/// # Example
///
/// ```
/// use brgrid_rs::TileIndexer;
///
/// # fn main() -> Result<(), brgrid_rs::BrGridError> {
/// let indexer = TileIndexer::new();
/// let tile = indexer.tile_from_id(0, "1c")?;
///
/// assert_eq!(tile.id, "1C");
/// assert_eq!(tile.tile_size(), 100_000.0);
/// let polygon = tile.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Base-36 identifier, canonically uppercase.
    pub id: String,
    /// Resolution level this tile belongs to.
    pub level: i32,
    /// Planar bounding box (Brazil Albers meters).
    pub bbox: Rect<f64>,
    /// Absolute column index relative to the Marco Zero marker.
    pub col: i64,
    /// Absolute row index relative to the Marco Zero marker.
    pub row: i64,
    /// Column index relative to the grid's minimum column.
    pub norm_col: u32,
    /// Row index relative to the grid's minimum row.
    pub norm_row: u32,
    /// Position of the tile along the level's Hilbert curve.
    pub curve_distance: u64,
}

impl Tile {
    pub(crate) fn new(
        id: String,
        level: i32,
        bbox: Rect<f64>,
        col: i64,
        row: i64,
        norm_col: u32,
        norm_row: u32,
        curve_distance: u64,
    ) -> Self {
        Self {
            id,
            level,
            bbox,
            col,
            row,
            norm_col,
            norm_row,
            curve_distance,
        }
    }

    /// Planar center of the tile.
    pub fn center(&self) -> Point<f64> {
        self.bbox.center().into()
    }

    /// Tile edge length in meters.
    pub fn tile_size(&self) -> f64 {
        self.bbox.width()
    }

    /// Converts this tile to its closed square polygon in planar coordinates.
    pub fn to_polygon(&self) -> Polygon<f64> {
        create_square_from_rect(&self.bbox)
    }
}
