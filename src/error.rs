/// Error type for brgrid-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BrGridError {
    /// The resolution level is negative.
    InvalidLevel(i32),
    /// The tile identifier is malformed (empty, non-base-36, or unrepresentable).
    InvalidTileId(String),
    /// The decoded curve distance exceeds the level's curve-order capacity.
    TileIdOutOfRange(u64),
    /// The curve distance is valid but falls in the padding region outside the
    /// configured coverage rectangle.
    UnmappedTile(u64),
    /// The coordinate maps to a cell outside the configured coverage rectangle.
    CoordinateOutOfArea(f64, f64),
    /// Coordinate projection failed (WGS84 to Brazil Albers or back).
    ProjectionError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// Failed to serialize feature properties.
    EncodingError(String),
}

impl std::fmt::Display for BrGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrGridError::InvalidLevel(level) => write!(f, "Invalid level: {}", level),
            BrGridError::InvalidTileId(msg) => write!(f, "Invalid tile identifier: {}", msg),
            BrGridError::TileIdOutOfRange(distance) => {
                write!(f, "Tile identifier is out of bounds for the level: {}", distance)
            }
            BrGridError::UnmappedTile(distance) => write!(
                f,
                "Tile identifier does not map to the configured area extent: {}",
                distance
            ),
            BrGridError::CoordinateOutOfArea(x, y) => write!(
                f,
                "Coordinates fall outside of the configured area extent: ({}, {})",
                x, y
            ),
            BrGridError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            BrGridError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            BrGridError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for BrGridError {}
