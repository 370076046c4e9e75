/// Planar coordinates of the Marco Zero origin marker, which doubles as the
/// false origin of the SIRGAS 2000 / Brazil Albers system.
pub const MARCO_ZERO_X: f64 = 5_000_000.0;
pub const MARCO_ZERO_Y: f64 = 10_000_000.0;

/// Coverage area extents [min_x, min_y, max_x, max_y] in planar meters.
///
/// Every tile identifier is defined relative to these extents and the Marco
/// Zero marker; changing either constant changes the meaning of all
/// previously issued identifiers.
pub const AREA_EXTENTS: [f64; 4] = [2_290_000.0, 6_300_000.0, 7_330_000.0, 12_300_000.0];

/// Tile edge length at level 0, in meters.
pub const BASE_TILE_SIZE: f64 = 100_000.0;

/// Minimum tile edge length, in meters. Levels whose computed size would fall
/// below this share the same 1 m grid.
pub const MIN_TILE_SIZE: f64 = 1.0;

/// Geographic CRS for coordinate input/output.
pub const WGS84_CRS: &str = "EPSG:4326";

/// Albers equal-area conic definition for Brazil (IBGE), with its false
/// origin at the Marco Zero marker.
pub const BRAZIL_ALBERS_CRS: &str = "+proj=aea +lat_0=-12 +lon_0=-54 +lat_1=-2 +lat_2=-22 \
     +x_0=5000000 +y_0=10000000 +ellps=GRS80 +units=m +no_defs +type=crs";
