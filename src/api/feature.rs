use geo_types::{Coord, LineString, Polygon};
use geojson::{Feature, FeatureCollection, JsonObject};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::api::tile::Tile;
use crate::coord::PlanarProjection;
use crate::error::BrGridError;

/// Flat property record attached to every tile feature. Field names are a
/// contract with downstream consumers.
#[derive(Debug, Serialize)]
struct TileProperties {
    id: String,
    level: i32,
    center_x: f64,
    center_y: f64,
    center_lon: f64,
    center_lat: f64,
    tile_size: f64,
    bbox: BboxRecord,
    grid_coords: CellRecord,
    normalized_grid_coords: CellRecord,
    hilbert_distance: u64,
}

#[derive(Debug, Serialize)]
struct BboxRecord {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

#[derive(Debug, Serialize)]
struct CellRecord {
    col: i64,
    row: i64,
}

/// Converts a resolved tile into a GeoJSON feature.
///
/// The geometry is the tile's square ring with all four corners converted to
/// WGS84 and the first vertex repeated to close it. The input tile is
/// assumed valid; no bounds checking happens here.
pub fn build_tile_feature(
    tile: &Tile,
    projection: &impl PlanarProjection,
) -> Result<Feature, BrGridError> {
    let center = tile.center();
    let center_global = projection.planar_to_global(&center)?;

    let (min, max) = (tile.bbox.min(), tile.bbox.max());
    let corners = [
        (min.x, min.y),
        (max.x, min.y),
        (max.x, max.y),
        (min.x, max.y),
    ];

    let mut ring: Vec<Coord<f64>> = Vec::with_capacity(5);
    for corner in corners {
        let vertex = projection.planar_to_global(&corner)?;
        ring.push(Coord {
            x: vertex.x(),
            y: vertex.y(),
        });
    }
    ring.push(ring[0]);
    let polygon = Polygon::new(LineString::from(ring), vec![]);

    let properties = TileProperties {
        id: tile.id.clone(),
        level: tile.level,
        center_x: center.x(),
        center_y: center.y(),
        center_lon: center_global.x(),
        center_lat: center_global.y(),
        tile_size: tile.tile_size(),
        bbox: BboxRecord {
            x_min: min.x,
            y_min: min.y,
            x_max: max.x,
            y_max: max.y,
        },
        grid_coords: CellRecord {
            col: tile.col,
            row: tile.row,
        },
        normalized_grid_coords: CellRecord {
            col: tile.norm_col as i64,
            row: tile.norm_row as i64,
        },
        hilbert_distance: tile.curve_distance,
    };

    Ok(Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::from(&polygon)),
        id: None,
        properties: Some(properties_to_map(&properties)?),
        foreign_members: None,
    })
}

/// Converts a batch of tiles into a feature collection, projecting tiles in
/// parallel.
pub fn build_feature_collection(
    tiles: &[Tile],
    projection: &(impl PlanarProjection + Sync),
) -> Result<FeatureCollection, BrGridError> {
    let features = tiles
        .par_iter()
        .map(|tile| build_tile_feature(tile, projection))
        .collect::<Result<Vec<Feature>, BrGridError>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn properties_to_map(properties: &TileProperties) -> Result<JsonObject, BrGridError> {
    match serde_json::to_value(properties) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(BrGridError::EncodingError(
            "tile properties did not serialize to an object".to_string(),
        )),
        Err(e) => Err(BrGridError::EncodingError(e.to_string())),
    }
}
