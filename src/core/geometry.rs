use geo_types::{Coord, LineString, Polygon, Rect};

/// Builds the closed square ring for a tile from its lower-left corner and
/// edge length.
pub fn create_square(x_min: f64, y_min: f64, size: f64) -> Polygon<f64> {
    let x_max = x_min + size;
    let y_max = y_min + size;

    let coords = vec![
        Coord { x: x_min, y: y_min },
        Coord { x: x_max, y: y_min },
        Coord { x: x_max, y: y_max },
        Coord { x: x_min, y: y_max },
        Coord { x: x_min, y: y_min },
    ];

    Polygon::new(LineString::from(coords), vec![])
}

/// Builds the closed square ring for a tile bounding box.
pub fn create_square_from_rect(bbox: &Rect<f64>) -> Polygon<f64> {
    create_square(bbox.min().x, bbox.min().y, bbox.width())
}
