//! # brgrid-rs
//!
//! Hilbert-ordered square tile indexing over the SIRGAS 2000 / Brazil Albers
//! grid. Tiles at every resolution level carry compact base-36 identifiers
//! that sort by position along a Hilbert curve, so spatially close tiles get
//! numerically close identifiers.
//!
//! There are three main entry points, all on [`TileIndexer`].
//!
//! ### 1. Generate every tile of a level
//!
//! ```
//! use brgrid_rs::TileIndexer;
//!
//! # fn main() -> Result<(), brgrid_rs::BrGridError> {
//! let indexer = TileIndexer::new();
//! let tiles = indexer.generate_level(0)?;
//!
//! assert_eq!(tiles.len(), 3111);
//! println!("{}", tiles[0].id);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Resolve a tile by identifier
//!
//! ```
//! use brgrid_rs::TileIndexer;
//!
//! # fn main() -> Result<(), brgrid_rs::BrGridError> {
//! let tile = TileIndexer::new().tile_from_id(0, "1c")?;
//!
//! assert_eq!(tile.id, "1C");
//! let polygon = tile.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Resolve a tile by coordinate
//!
//! Lookups accept WGS84 lon/lat (projected through the `proj` crate), raw
//! planar coordinates, or a WKT/GeoJSON geometry string:
//!
//! ```no_run
//! use brgrid_rs::TileIndexer;
//!
//! # fn main() -> Result<(), brgrid_rs::BrGridError> {
//! let indexer = TileIndexer::new();
//!
//! let tile = indexer.tile_for_coordinates(5, &(-34.8711, -8.0632))?;
//! let same = indexer.tile_for_geometry(5, "POINT(-34.8711 -8.0632)")?;
//! assert_eq!(tile.id, same.id);
//!
//! let feature = indexer.feature_for(&tile)?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod coord;
pub mod core;
pub mod curve;
pub mod error;
pub mod geom;
pub mod util;

pub use api::{Tile, TileIndexer, build_feature_collection, build_tile_feature};
pub use coord::{Coordinate, PlanarProjection, SirgasAlbers, albers_to_wgs84, wgs84_to_albers};
pub use self::core::{
    AREA_EXTENTS, BASE_TILE_SIZE, MARCO_ZERO_X, MARCO_ZERO_Y, MIN_TILE_SIZE, TileGrid,
    create_square, create_square_from_rect, tile_size_for_level,
};
pub use curve::{HilbertCurve, SpaceFillingCurve};
pub use error::BrGridError;
pub use geom::{parse_query_geometry, representative_point};
pub use util::{from_base36, to_base36};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_round_trip_identity_across_levels() -> Result<(), BrGridError> {
        let indexer = TileIndexer::new();

        for level in [0, 1] {
            for tile in indexer.generate_level(level)? {
                assert_eq!(indexer.tile_from_id(level, &tile.id)?, tile);
            }
        }
        Ok(())
    }

    #[test]
    fn test_generated_union_covers_area() -> Result<(), BrGridError> {
        let indexer = TileIndexer::new();
        let [x_min, y_min, x_max, y_max] = AREA_EXTENTS;

        for level in [0, 1, 2] {
            let tiles = indexer.generate_level(level)?;

            let covered_x_min = tiles.iter().map(|t| t.bbox.min().x).fold(f64::MAX, f64::min);
            let covered_y_min = tiles.iter().map(|t| t.bbox.min().y).fold(f64::MAX, f64::min);
            let covered_x_max = tiles.iter().map(|t| t.bbox.max().x).fold(f64::MIN, f64::max);
            let covered_y_max = tiles.iter().map(|t| t.bbox.max().y).fold(f64::MIN, f64::max);

            assert!(covered_x_min <= x_min);
            assert!(covered_y_min <= y_min);
            assert!(covered_x_max >= x_max);
            assert!(covered_y_max >= y_max);

            // The generated rectangle is gap-free: exactly width * height
            // distinct cells.
            let grid = TileGrid::for_level(level)?;
            let distinct: std::collections::HashSet<(i64, i64)> =
                tiles.iter().map(|t| (t.col, t.row)).collect();
            assert_eq!(distinct.len(), (grid.width() * grid.height()) as usize);
        }
        Ok(())
    }

    #[test]
    fn test_consecutive_identifiers_are_spatial_neighbors() -> Result<(), BrGridError> {
        let tiles = TileIndexer::new().generate_level(0)?;

        let by_distance: HashMap<u64, &Tile> =
            tiles.iter().map(|t| (t.curve_distance, t)).collect();

        let mut checked = 0usize;
        for tile in &tiles {
            let Some(next) = by_distance.get(&(tile.curve_distance + 1)) else {
                continue;
            };
            let step = tile.norm_col.abs_diff(next.norm_col) + tile.norm_row.abs_diff(next.norm_row);
            assert_eq!(
                step, 1,
                "tiles {} and {} are curve-consecutive but not grid-adjacent",
                tile.id, next.id
            );
            checked += 1;
        }

        // The padding region must not have swallowed the property entirely.
        assert!(checked > tiles.len() / 2);
        Ok(())
    }

    #[test]
    fn test_identifiers_sort_like_distances() -> Result<(), BrGridError> {
        let tiles = TileIndexer::new().generate_level(0)?;

        // Base-36 strings of equal length preserve numeric order; across
        // lengths the shorter one is always the smaller value.
        for pair in tiles.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.id.len() < b.id.len() || (a.id.len() == b.id.len() && a.id < b.id));
        }
        Ok(())
    }

    #[test]
    fn test_wgs84_lookup_end_to_end() -> Result<(), BrGridError> {
        let indexer = TileIndexer::new();

        // Recife, well inside the coverage area.
        let tile = indexer.tile_for_coordinates(3, &(-34.8711, -8.0632))?;
        let resolved = indexer.tile_from_id(3, &tile.id)?;
        assert_eq!(resolved, tile);

        let from_geometry = indexer.tile_for_geometry(3, "POINT(-34.8711 -8.0632)")?;
        assert_eq!(from_geometry.id, tile.id);

        let feature = indexer.feature_for(&tile)?;
        let properties = feature.properties.expect("feature has no properties");
        assert_eq!(properties["id"], tile.id.as_str());
        assert_eq!(properties["level"], 3);
        Ok(())
    }

    #[test]
    fn test_origin_marker_tile_via_projection() -> Result<(), BrGridError> {
        let indexer = TileIndexer::new();

        // The origin marker is the natural origin of the CRS.
        let tile = indexer.tile_for_coordinates(0, &(-54.0, -12.0))?;
        assert_eq!((tile.col, tile.row), (0, 0));
        Ok(())
    }
}
