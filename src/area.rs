use crate::coord::Coordinate;
use crate::index::constants::{LATITUDE_MAX, LONGITUDE_MAX};
use geo_types::{Point, Polygon, Rect, coord};
use serde::Serialize;

/// The area covered by a decoded Plus Code.
///
/// Holds the south-west and north-east corners of the bounding box in degrees,
/// its center and the number of significant digits in the code it came from.
/// Values are produced by [`crate::decode`] and never change afterwards; any
/// adjustment builds a new `CodeArea`.
///
/// # Example
///
/// ```
/// use pluscode_rs::decode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// let area = decode("8FVC9G8F+6X")?;
/// let (lat, lng) = area.lat_lng();
/// assert!(area.contains(&(lng, lat)));
///
/// // Convert to a polygon for GIS operations
/// let polygon = area.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodeArea {
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    latitude_center: f64,
    longitude_center: f64,
    code_length: usize,
}

impl CodeArea {
    pub(crate) fn new(
        latitude_lo: f64,
        longitude_lo: f64,
        latitude_hi: f64,
        longitude_hi: f64,
        code_length: usize,
    ) -> Self {
        Self {
            latitude_lo,
            longitude_lo,
            latitude_hi,
            longitude_hi,
            latitude_center: (latitude_lo + (latitude_hi - latitude_lo) / 2.0).min(LATITUDE_MAX),
            longitude_center: (longitude_lo + (longitude_hi - longitude_lo) / 2.0)
                .min(LONGITUDE_MAX),
            code_length,
        }
    }

    /// Returns a copy of this area moved by the given offsets in degrees.
    pub(crate) fn shifted(&self, lat_offset: f64, lng_offset: f64) -> Self {
        Self::new(
            self.latitude_lo + lat_offset,
            self.longitude_lo + lng_offset,
            self.latitude_hi + lat_offset,
            self.longitude_hi + lng_offset,
            self.code_length,
        )
    }

    /// Latitude of the south-west corner in degrees.
    pub fn latitude_lo(&self) -> f64 {
        self.latitude_lo
    }

    /// Longitude of the south-west corner in degrees.
    pub fn longitude_lo(&self) -> f64 {
        self.longitude_lo
    }

    /// Latitude of the north-east corner in degrees.
    pub fn latitude_hi(&self) -> f64 {
        self.latitude_hi
    }

    /// Longitude of the north-east corner in degrees.
    pub fn longitude_hi(&self) -> f64 {
        self.longitude_hi
    }

    /// Latitude of the center, never above 90.
    pub fn latitude_center(&self) -> f64 {
        self.latitude_center
    }

    /// Longitude of the center, never above 180.
    pub fn longitude_center(&self) -> f64 {
        self.longitude_center
    }

    /// Number of significant digits in the decoded code (separator and padding excluded).
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Returns the center as `(latitude, longitude)`.
    pub fn lat_lng(&self) -> (f64, f64) {
        (self.latitude_center, self.longitude_center)
    }

    /// Returns the center as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude_center, self.latitude_center)
    }

    /// Checks whether a location falls inside this area.
    ///
    /// The box is closed on its south and west edges and open on its north and
    /// east edges, except that the north edge is included when it lies on the pole.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let lat = coord.lat();
        let lng = coord.lng();
        let north_ok =
            lat < self.latitude_hi || (self.latitude_hi >= LATITUDE_MAX && lat <= self.latitude_hi);
        lat >= self.latitude_lo && north_ok && lng >= self.longitude_lo && lng < self.longitude_hi
    }

    /// Returns the bounding box as a `geo_types::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.longitude_lo, y: self.latitude_lo },
            coord! { x: self.longitude_hi, y: self.latitude_hi },
        )
    }

    /// Converts this area to a closed rectangular polygon.
    ///
    /// Suitable for spatial operations or WKT/GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}
