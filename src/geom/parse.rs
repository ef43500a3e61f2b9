use crate::error::PlusCodeError;
use geo_types::Geometry;
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

fn geometry_error(e: impl ToString) -> PlusCodeError {
    PlusCodeError::GeometryParseError(e.to_string())
}

/// Parses a geometry string as GeoJSON when it starts with `{`, otherwise as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, PlusCodeError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(geometry_error("empty geometry"));
    }
    match s.starts_with('{') {
        true => parse_geojson(s),
        false => parse_wkt(s),
    }
}

/// Parses a GeoJSON geometry or feature.
///
/// Feature collections are rejected since a row maps to a single location.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, PlusCodeError> {
    let geometry = match GeoJson::from_str(s).map_err(geometry_error)? {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature
            .geometry
            .ok_or_else(|| geometry_error("feature without geometry"))?,
        GeoJson::FeatureCollection(_) => {
            return Err(geometry_error("feature collections are not supported"));
        }
    };
    Geometry::try_from(geometry).map_err(geometry_error)
}

/// Parses a WKT string.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, PlusCodeError> {
    let wkt = Wkt::<f64>::from_str(s).map_err(geometry_error)?;
    Geometry::try_from(wkt).map_err(|_| geometry_error(format!("unsupported WKT: {}", s)))
}
