//! # pluscode-rs
//!
//! Open Location Codes ("Plus Codes") for WGS84 coordinates.
//!
//! ### 1. Free functions - string in, string out
//!
//! ```
//! use pluscode_rs::{decode, encode, recover_nearest, shorten};
//!
//! # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
//! let code = encode(47.365590, 8.524997, 10)?;
//! assert_eq!(code, "8FVC9G8F+6X");
//!
//! let area = decode(&code)?;
//! assert!(area.latitude_lo() <= 47.365590 && 47.365590 < area.latitude_hi());
//!
//! let short = shorten(&code, 47.5, 8.5)?;
//! assert_eq!(short, "9G8F+6X");
//! assert_eq!(recover_nearest(&short, 47.4, 8.6)?, code);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PlusCode` - validated codes with their area
//!
//! ```
//! use pluscode_rs::PlusCode;
//!
//! # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
//! let code = PlusCode::from_wgs84(&(8.524997, 47.365590), 11)?;
//! println!("{}", code);
//! let polygon = code.area().to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToPlusCode` - CSV file conversion
//!
//! ```no_run
//! use pluscode_rs::{CsvToPlusCode, CsvPlusCodeConfig, GeometryFormat};
//!
//! let config = CsvPlusCodeConfig::from_coords("Longitude", "Latitude", 10)
//!     .with_area_geometry(GeometryFormat::GeoJson);
//!
//! "input.csv".to_plus_code_csv("output.csv", &config).unwrap();
//! ```

pub mod area;
pub mod code;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;

pub use area::CodeArea;
pub use code::{MAX_SEGMENT_SAMPLES, PlusCode};
pub use coord::{Coordinate, clip_latitude, normalize_longitude};
pub use error::PlusCodeError;
pub use geom::{GeometryFormat, area_to_geojson, area_to_wkt, parse_geometry};
pub use index::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, MAX_DIGIT_COUNT, MIN_TRIMMABLE_CODE_LEN,
    PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION, compute_latitude_precision,
    compute_longitude_precision, decode, encode, encode_integers, is_full, is_short, is_valid,
    location_to_integers, recover_nearest, shorten,
};
pub use io::{CoordinateSource, CsvPlusCodeConfig, CsvToPlusCode, csv_to_plus_code_csv};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), PlusCodeError> {
        let code = encode(20.375, 2.775, 6)?;
        assert_eq!(code, "7FG49Q00+");
        assert!(is_valid(&code) && is_full(&code) && !is_short(&code));

        let area = decode(&code)?;
        assert_eq!(area.code_length(), 6);
        assert!((area.latitude_center() - 20.375).abs() < 1e-10);
        assert!((area.longitude_center() - 2.775).abs() < 1e-10);
        Ok(())
    }

    #[test]
    fn test_encode_clips_and_wraps() -> Result<(), PlusCodeError> {
        assert_eq!(encode(95.0, 8.524997, 4)?, encode(90.0, 8.524997, 4)?);
        assert_eq!(encode(47.36559, 368.524997, 10)?, "8FVC9G8F+6X");
        assert_eq!(clip_latitude(-100.0), -90.0);
        assert_eq!(normalize_longitude(190.0), -170.0);
        Ok(())
    }

    #[test]
    fn test_plus_code_matches_free_functions() -> Result<(), PlusCodeError> {
        let pt = point! { x: 151.215297, y: -33.856784 };
        let code = PlusCode::from_wgs84(&pt, 11)?;

        assert_eq!(code.as_str(), encode(pt.y(), pt.x(), 11)?);
        assert_eq!(code.area(), &decode(code.as_str())?);
        assert!(code.contains(&pt));
        Ok(())
    }

    #[test]
    fn test_short_code_workflow() -> Result<(), PlusCodeError> {
        let reference = (8.5, 47.5);
        let code: PlusCode = "8FVC9G8F+6X".parse()?;
        let short = code.shorten(&reference)?;

        assert!(is_short(&short));
        assert_eq!(PlusCode::recover(&short, &reference)?, code);
        Ok(())
    }

    #[test]
    fn test_precision_covers_decoded_area() -> Result<(), PlusCodeError> {
        let area = decode("8FVC9G8F+6XQ")?;
        let height = area.latitude_hi() - area.latitude_lo();
        let width = area.longitude_hi() - area.longitude_lo();
        assert!((height - compute_latitude_precision(11)).abs() < 1e-12);
        assert!((width - compute_longitude_precision(11)).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_geometry_round_trip_through_wkt() -> Result<(), PlusCodeError> {
        let code: PlusCode = "7FG49Q00+".parse()?;
        let geom = parse_geometry(&area_to_wkt(code.area()))?;
        let codes = PlusCode::from_geometry(geom, 6)?;
        assert_eq!(codes, vec![code]);
        Ok(())
    }
}
