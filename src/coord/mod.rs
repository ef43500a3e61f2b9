mod normalize;

pub use normalize::{clip_latitude, normalize_longitude};

use geo_types::{Coord, Point};

/// Trait for types that can provide WGS84 longitude/latitude values.
///
/// Implemented for `(lng, lat)` tuples, `geo_types::Point<f64>` and
/// `geo_types::Coord<f64>`, following the x/y axis order of `geo_types`.
/// This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the longitude (x-coordinate) in degrees.
    fn lng(&self) -> f64;
    /// Returns the latitude (y-coordinate) in degrees.
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lng(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lng(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for Coord<f64> {
    fn lng(&self) -> f64 {
        self.x
    }
    fn lat(&self) -> f64 {
        self.y
    }
}
