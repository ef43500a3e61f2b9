use crate::area::CodeArea;
use crate::error::PlusCodeError;
use std::fmt;
use std::str::FromStr;
use wkt::ToWkt;

/// Text encoding used when writing a code's area as a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryFormat {
    /// Well-Known Text, e.g. `POLYGON((...))`
    #[default]
    Wkt,
    /// GeoJSON geometry object
    GeoJson,
}

impl GeometryFormat {
    /// Renders the bounding box of an area as a closed polygon.
    pub fn render(&self, area: &CodeArea) -> String {
        match self {
            GeometryFormat::Wkt => area_to_wkt(area),
            GeometryFormat::GeoJson => area_to_geojson(area),
        }
    }
}

impl fmt::Display for GeometryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryFormat::Wkt => f.write_str("wkt"),
            GeometryFormat::GeoJson => f.write_str("geojson"),
        }
    }
}

impl FromStr for GeometryFormat {
    type Err = PlusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wkt" => Ok(GeometryFormat::Wkt),
            "geojson" | "json" => Ok(GeometryFormat::GeoJson),
            other => Err(PlusCodeError::GeometryParseError(format!(
                "unknown geometry format '{}'",
                other
            ))),
        }
    }
}

/// Writes the area of a code as a WKT polygon.
pub fn area_to_wkt(area: &CodeArea) -> String {
    area.to_polygon().wkt_string()
}

/// Writes the area of a code as a GeoJSON polygon.
pub fn area_to_geojson(area: &CodeArea) -> String {
    geojson::Geometry::from(&area.to_polygon()).to_string()
}
