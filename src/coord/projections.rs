use geo_types::Point;
use proj::Proj;

use crate::coord::Coordinate;
use crate::core::constants::{BRAZIL_ALBERS_CRS, WGS84_CRS};
use crate::error::BrGridError;

/// Forward/inverse pair between the global lon/lat system and the planar
/// system the grid lives in.
///
/// The two functions must be exact inverses of each other within
/// floating-point tolerance. The indexing engine treats this as a black box;
/// any CRS-correct implementation can be substituted.
pub trait PlanarProjection {
    /// Converts a lon/lat coordinate to planar easting/northing.
    fn global_to_planar(&self, coord: &impl Coordinate) -> Result<Point<f64>, BrGridError>;
    /// Converts a planar easting/northing coordinate back to lon/lat.
    fn planar_to_global(&self, coord: &impl Coordinate) -> Result<Point<f64>, BrGridError>;
}

/// WGS84 <-> SIRGAS 2000 / Brazil Albers, backed by the `proj` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SirgasAlbers;

impl PlanarProjection for SirgasAlbers {
    fn global_to_planar(&self, coord: &impl Coordinate) -> Result<Point<f64>, BrGridError> {
        let proj = Proj::new_known_crs(WGS84_CRS, BRAZIL_ALBERS_CRS, None)
            .map_err(|e| BrGridError::ProjectionError(e.to_string()))?;

        let (easting, northing) = proj
            .convert((coord.x(), coord.y()))
            .map_err(|e| BrGridError::ProjectionError(e.to_string()))?;
        Ok(Point::new(easting, northing))
    }

    fn planar_to_global(&self, coord: &impl Coordinate) -> Result<Point<f64>, BrGridError> {
        let proj = Proj::new_known_crs(BRAZIL_ALBERS_CRS, WGS84_CRS, None)
            .map_err(|e| BrGridError::ProjectionError(e.to_string()))?;

        let (lon, lat) = proj
            .convert((coord.x(), coord.y()))
            .map_err(|e| BrGridError::ProjectionError(e.to_string()))?;
        Ok(Point::new(lon, lat))
    }
}

/// Converts a WGS84 lon/lat coordinate to Brazil Albers easting/northing.
pub fn wgs84_to_albers(coord: &impl Coordinate) -> Result<Point<f64>, BrGridError> {
    SirgasAlbers.global_to_planar(coord)
}

/// Converts a Brazil Albers easting/northing coordinate to WGS84 lon/lat.
pub fn albers_to_wgs84(coord: &impl Coordinate) -> Result<Point<f64>, BrGridError> {
    SirgasAlbers.planar_to_global(coord)
}
