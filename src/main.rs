use brgrid_rs::{BrGridError, TileIndexer};
use geojson::GeoJson;

fn main() -> Result<(), BrGridError> {
    let indexer = TileIndexer::new();

    // Marco Zero square, Recife.
    let lon = -34.8711;
    let lat = -8.0632;

    let tile = indexer.tile_for_coordinates(5, &(lon, lat))?;

    println!("Tile ID: {}", tile.id);
    println!("Level: {} ({} m tiles)", tile.level, tile.tile_size());
    println!("Cell: col {}, row {}", tile.col, tile.row);
    println!("Curve distance: {}", tile.curve_distance);

    let feature = indexer.feature_for(&tile)?;
    let geojson: GeoJson = feature.into();
    println!("{}", geojson);

    Ok(())
}
