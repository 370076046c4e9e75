use std::str::FromStr;

use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use wkt::Wkt;

use crate::error::BrGridError;

/// Parses a query geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_query_geometry(s: &str) -> Result<Geometry<f64>, BrGridError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON geometry or feature string into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, BrGridError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| BrGridError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| BrGridError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| BrGridError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| BrGridError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(BrGridError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, BrGridError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| BrGridError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        BrGridError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

/// Reduces a query geometry to the single point used for tile lookup.
///
/// Points pass through unchanged; any other geometry contributes its
/// centroid. Degenerate geometries (e.g. an empty multi-point) have none.
pub fn representative_point(geometry: &Geometry<f64>) -> Result<Point<f64>, BrGridError> {
    match geometry {
        Geometry::Point(point) => Ok(*point),
        other => other.centroid().ok_or_else(|| {
            BrGridError::GeometryParseError(
                "geometry has no representative point".to_string(),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geojson_point() -> Result<(), BrGridError> {
        let json = r#"{"type":"Point","coordinates":[-34.87,-8.06]}"#;
        let geom = parse_query_geometry(json)?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - (-34.87)).abs() < 0.001);
                assert!((pt.y() - (-8.06)).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_geojson_feature() -> Result<(), BrGridError> {
        let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[-54.0,-12.0]},"properties":{}}"#;
        let geom = parse_query_geometry(json)?;
        assert!(matches!(geom, Geometry::Point(_)));
        Ok(())
    }

    #[test]
    fn test_parse_wkt_point() -> Result<(), BrGridError> {
        let geom = parse_query_geometry("POINT(-54.0 -12.0)")?;
        match geom {
            Geometry::Point(pt) => {
                assert!((pt.x() - (-54.0)).abs() < 0.001);
                assert!((pt.y() - (-12.0)).abs() < 0.001);
            }
            _ => panic!("Expected Point"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_query_geometry("not a geometry"),
            Err(BrGridError::GeometryParseError(_))
        ));
        assert!(matches!(
            parse_query_geometry("{\"type\":\"Nope\"}"),
            Err(BrGridError::GeometryParseError(_))
        ));
    }

    #[test]
    fn test_representative_point_of_polygon_is_centroid() -> Result<(), BrGridError> {
        let geom = parse_query_geometry("POLYGON((0 0, 2 0, 2 2, 0 2, 0 0))")?;
        let point = representative_point(&geom)?;

        assert!((point.x() - 1.0).abs() < 1e-9);
        assert!((point.y() - 1.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_feature_collection_is_rejected() {
        let json = r#"{"type":"FeatureCollection","features":[]}"#;
        assert!(matches!(
            parse_query_geometry(json),
            Err(BrGridError::GeometryParseError(_))
        ));
    }
}
