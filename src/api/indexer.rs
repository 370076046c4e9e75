use std::marker::PhantomData;

use geojson::{Feature, FeatureCollection};

use crate::api::feature::{build_feature_collection, build_tile_feature};
use crate::api::tile::Tile;
use crate::coord::{Coordinate, PlanarProjection, SirgasAlbers};
use crate::core::grid::TileGrid;
use crate::curve::{HilbertCurve, SpaceFillingCurve};
use crate::error::BrGridError;
use crate::geom::parse::{parse_query_geometry, representative_point};
use crate::util::base36::{from_base36, to_base36};

/// The tile indexing engine.
///
/// Composes the per-level grid, the space-filling curve and the base-36
/// codec into the three public operations: generate every tile of a level,
/// resolve a tile by identifier, and resolve a tile by coordinate. The
/// projection and the curve are both swappable seams; the defaults are the
/// Brazil Albers projection and the Hilbert curve.
///
/// # Example
///
/// ```
/// use brgrid_rs::TileIndexer;
///
/// # fn main() -> Result<(), brgrid_rs::BrGridError> {
/// let indexer = TileIndexer::new();
///
/// let tiles = indexer.generate_level(0)?;
/// assert_eq!(tiles.len(), 3111);
///
/// let tile = indexer.tile_from_id(0, &tiles[0].id)?;
/// assert_eq!(tile, tiles[0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TileIndexer<P = SirgasAlbers, C = HilbertCurve>
where
    P: PlanarProjection,
    C: SpaceFillingCurve,
{
    projection: P,
    curve: PhantomData<C>,
}

impl TileIndexer {
    /// Creates an indexer with the default projection and curve.
    pub fn new() -> Self {
        Self {
            projection: SirgasAlbers,
            curve: PhantomData,
        }
    }
}

impl Default for TileIndexer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C> TileIndexer<P, C>
where
    P: PlanarProjection,
    C: SpaceFillingCurve,
{
    /// Creates an indexer over a custom projection boundary.
    pub fn with_projection(projection: P) -> Self {
        Self {
            projection,
            curve: PhantomData,
        }
    }

    /// Generates every tile of a level, ordered by curve distance.
    ///
    /// The output holds `width * height` tiles and is materialized eagerly;
    /// the engine does not cap it, so the caller picks levels whose tile
    /// count is tractable.
    pub fn generate_level(&self, level: i32) -> Result<Vec<Tile>, BrGridError> {
        let grid = TileGrid::for_level(level)?;
        let curve = C::with_order(grid.curve_order());

        let mut tiles = Vec::with_capacity((grid.width() * grid.height()) as usize);
        for row in grid.min_row..=grid.max_row {
            for col in grid.min_col..=grid.max_col {
                let (norm_col, norm_row) = grid.normalize(col, row);
                let distance = curve.point_to_distance(norm_col as u32, norm_row as u32);
                tiles.push(build_tile(&grid, to_base36(distance), col, row, distance));
            }
        }

        // Generation order and curve order coincide by construction; the
        // explicit sort keeps the guarantee independent of the iteration
        // scheme.
        tiles.sort_by_key(|tile| tile.curve_distance);
        Ok(tiles)
    }

    /// Resolves a tile by its base-36 identifier.
    ///
    /// The returned identifier is the input trimmed and uppercased. Fails
    /// with [`BrGridError::TileIdOutOfRange`] when the decoded distance
    /// exceeds the level's curve capacity, and with
    /// [`BrGridError::UnmappedTile`] when the distance lands in the curve's
    /// padding region outside the coverage rectangle.
    ///
    /// # Example
    /// ```
    /// use brgrid_rs::TileIndexer;
    ///
    /// # fn main() -> Result<(), brgrid_rs::BrGridError> {
    /// let tile = TileIndexer::new().tile_from_id(0, " 2s ")?;
    /// assert_eq!(tile.id, "2S");
    /// assert_eq!(tile.curve_distance, 100);
    /// # Ok(())
    /// # }
    /// ```
    pub fn tile_from_id(&self, level: i32, id: &str) -> Result<Tile, BrGridError> {
        let grid = TileGrid::for_level(level)?;
        let curve = C::with_order(grid.curve_order());

        let distance = from_base36(id)?;
        let (norm_col, norm_row) = curve.distance_to_point(distance)?;
        if !grid.contains_normalized(norm_col as i64, norm_row as i64) {
            return Err(BrGridError::UnmappedTile(distance));
        }

        let (col, row) = grid.denormalize(norm_col as i64, norm_row as i64);
        Ok(build_tile(&grid, id.trim().to_uppercase(), col, row, distance))
    }

    /// Resolves the tile containing a planar (Brazil Albers) point.
    ///
    /// No curve roundtrip is needed in this direction; the cell follows
    /// directly from floor-based indexing, so a point exactly on a tile
    /// boundary belongs to the tile whose half-open interval starts there.
    pub fn tile_for_planar(
        &self,
        level: i32,
        point: &impl Coordinate,
    ) -> Result<Tile, BrGridError> {
        let grid = TileGrid::for_level(level)?;

        let (col, row) = grid.point_to_cell(point);
        let (norm_col, norm_row) = grid.normalize(col, row);
        if !grid.contains_normalized(norm_col, norm_row) {
            return Err(BrGridError::CoordinateOutOfArea(point.x(), point.y()));
        }

        let curve = C::with_order(grid.curve_order());
        let distance = curve.point_to_distance(norm_col as u32, norm_row as u32);
        Ok(build_tile(&grid, to_base36(distance), col, row, distance))
    }

    /// Resolves the tile containing a WGS84 lon/lat coordinate.
    pub fn tile_for_coordinates(
        &self,
        level: i32,
        coord: &impl Coordinate,
    ) -> Result<Tile, BrGridError> {
        let planar = self.projection.global_to_planar(coord)?;
        self.tile_for_planar(level, &planar)
    }

    /// Resolves the tile for a WKT or GeoJSON query geometry in WGS84.
    ///
    /// Non-point geometries resolve through their centroid.
    pub fn tile_for_geometry(&self, level: i32, geometry: &str) -> Result<Tile, BrGridError> {
        let geom = parse_query_geometry(geometry)?;
        let point = representative_point(&geom)?;
        self.tile_for_coordinates(level, &point)
    }

    /// Converts a resolved tile into a GeoJSON feature in WGS84.
    pub fn feature_for(&self, tile: &Tile) -> Result<Feature, BrGridError> {
        build_tile_feature(tile, &self.projection)
    }

    /// Generates a level and converts every tile into a GeoJSON feature.
    pub fn features_for_level(&self, level: i32) -> Result<FeatureCollection, BrGridError>
    where
        P: Sync,
    {
        let tiles = self.generate_level(level)?;
        build_feature_collection(&tiles, &self.projection)
    }
}

/// Single construction path for all three operations, so identifier, cell
/// indices and bounding box always agree.
fn build_tile(grid: &TileGrid, id: String, col: i64, row: i64, distance: u64) -> Tile {
    let (norm_col, norm_row) = grid.normalize(col, row);
    Tile::new(
        id,
        grid.level,
        grid.cell_bbox(col, row),
        col,
        row,
        norm_col as u32,
        norm_row as u32,
        distance,
    )
}
