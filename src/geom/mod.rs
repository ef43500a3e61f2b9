mod format;
mod parse;

pub use format::{GeometryFormat, area_to_geojson, area_to_wkt};
pub use parse::{parse_geojson, parse_geometry, parse_wkt};
