use crate::area::CodeArea;
use crate::coord::{Coordinate, clip_latitude, normalize_longitude};
use crate::error::PlusCodeError;
use crate::index::{
    MAX_DIGIT_COUNT, PADDING_CHARACTER, compute_latitude_precision, compute_longitude_precision,
    decode, encode, is_full, recover_nearest, shorten,
};
use geo::Centroid;
use geo_types::{Geometry, LineString, Polygon};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Upper bound on sample points taken along one line segment.
pub const MAX_SEGMENT_SAMPLES: usize = 1_000_000;

/// A validated full Plus Code together with the area it decodes to.
///
/// The code is stored upper case, so two `PlusCode`s compare equal when their
/// codes match regardless of the case they were parsed from.
///
/// # Example
///
/// ```
/// use pluscode_rs::PlusCode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// // Create from WGS84 (lng, lat) coordinates
/// let code = PlusCode::from_wgs84(&(8.524997, 47.365590), 10)?;
/// assert_eq!(code.as_str(), "8FVC9G8F+6X");
///
/// // Parse an existing code
/// let parsed: PlusCode = "8fvc9g8f+6x".parse()?;
/// assert_eq!(parsed, code);
///
/// // Share it relative to a nearby town
/// assert_eq!(code.shorten(&(8.5, 47.5))?, "9G8F+6X");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlusCode {
    code: String,
    area: CodeArea,
}

impl PlusCode {
    fn from_full(code: &str) -> Result<Self, PlusCodeError> {
        let area = decode(code)?;
        Ok(Self {
            code: code.to_ascii_uppercase(),
            area,
        })
    }

    /// Create a PlusCode from WGS84 (lng/lat) coordinates.
    ///
    /// # Example
    /// ```
    /// use pluscode_rs::PlusCode;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
    /// // From tuple
    /// let code = PlusCode::from_wgs84(&(2.294481, 48.858370), 10)?;
    /// // From Point
    /// let same = PlusCode::from_wgs84(&Point::new(2.294481, 48.858370), 10)?;
    /// assert_eq!(code, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, code_length: usize) -> Result<Self, PlusCodeError> {
        let code = encode(coord.lat(), coord.lng(), code_length)?;
        Self::from_full(&code)
    }

    /// Recover the nearest full code for a short code and a reference location.
    pub fn recover(short_code: &str, reference: &impl Coordinate) -> Result<Self, PlusCodeError> {
        let code = recover_nearest(short_code, reference.lat(), reference.lng())?;
        Self::from_full(&code)
    }

    /// Encodes many coordinates at once, in parallel.
    ///
    /// Results keep the input order. The first failure is returned.
    pub fn encode_all<C>(coords: &[C], code_length: usize) -> Result<Vec<Self>, PlusCodeError>
    where
        C: Coordinate + Sync,
    {
        coords
            .par_iter()
            .map(|coord| Self::from_wgs84(coord, code_length))
            .collect()
    }

    /// Create PlusCodes along a LineString in WGS84 coordinates.
    ///
    /// Samples points every half cell along the line and returns all unique
    /// codes that it passes through, in order of first contact. Latitudes are
    /// clipped and each segment follows the shorter way around in longitude.
    ///
    /// # Errors
    ///
    /// - [`PlusCodeError::GeometryTooLarge`] - a segment needs more than
    ///   [`MAX_SEGMENT_SAMPLES`] samples at this code length
    pub fn from_line_string(line: &LineString, code_length: usize) -> Result<Vec<Self>, PlusCodeError> {
        let sampled_length = code_length.min(MAX_DIGIT_COUNT);
        let step_size = compute_latitude_precision(sampled_length)
            .min(compute_longitude_precision(sampled_length))
            * 0.5;

        let mut seen: HashSet<String> = HashSet::new();
        let mut codes: Vec<PlusCode> = Vec::new();

        for window in line.0.windows(2) {
            let (start, end) = (&window[0], &window[1]);
            let start_lat = clip_latitude(start.y);
            let start_lng = normalize_longitude(start.x);
            let end_lat = clip_latitude(end.y);

            let dx = normalize_longitude(normalize_longitude(end.x) - start_lng);
            let dy = end_lat - start_lat;
            let samples = ((dx * dx + dy * dy).sqrt() / step_size).ceil();
            if !samples.is_finite() || samples > MAX_SEGMENT_SAMPLES as f64 {
                return Err(PlusCodeError::GeometryTooLarge(format!(
                    "segment ({}, {}) to ({}, {}) exceeds {} samples at length {}",
                    start.x, start.y, end.x, end.y, MAX_SEGMENT_SAMPLES, code_length
                )));
            }
            let steps = samples as usize;

            for i in 0..=steps {
                let t = if steps == 0 {
                    0.0
                } else {
                    i as f64 / steps as f64
                };
                let code = encode(start_lat + t * dy, start_lng + t * dx, code_length)?;
                if seen.insert(code.clone()) {
                    codes.push(Self::from_full(&code)?);
                }
            }
        }

        if let [only] = line.0.as_slice() {
            codes.push(Self::from_wgs84(only, code_length)?);
        }

        Ok(codes)
    }

    /// Create PlusCodes from an arbitrary `geo_types::Geometry` in WGS84.
    ///
    /// Points and polygon centroids produce a single code; lines and
    /// collections may produce many.
    pub fn from_geometry(geom: Geometry<f64>, code_length: usize) -> Result<Vec<Self>, PlusCodeError> {
        match geom {
            Geometry::Point(pt) => Ok(vec![Self::from_wgs84(&pt, code_length)?]),
            Geometry::MultiPoint(mp) => mp
                .0
                .iter()
                .map(|pt| Self::from_wgs84(pt, code_length))
                .collect(),
            Geometry::Line(line) => {
                Self::from_line_string(&LineString::from(vec![line.start, line.end]), code_length)
            }
            Geometry::LineString(line) => Self::from_line_string(&line, code_length),
            Geometry::MultiLineString(mls) => {
                let mut all_codes = Vec::new();
                for line in &mls.0 {
                    all_codes.extend(Self::from_line_string(line, code_length)?);
                }
                Ok(all_codes)
            }
            Geometry::Polygon(poly) => Self::from_polygon_centroid(&poly, code_length),
            Geometry::MultiPolygon(mp) => {
                let mut codes = Vec::new();
                for poly in &mp.0 {
                    codes.extend(Self::from_polygon_centroid(poly, code_length)?);
                }
                Ok(codes)
            }
            Geometry::Rect(rect) => Self::from_polygon_centroid(&rect.to_polygon(), code_length),
            Geometry::Triangle(tri) => Self::from_polygon_centroid(&tri.to_polygon(), code_length),
            Geometry::GeometryCollection(gc) => {
                let mut all_codes = Vec::new();
                for g in gc.0 {
                    all_codes.extend(Self::from_geometry(g, code_length)?);
                }
                Ok(all_codes)
            }
        }
    }

    fn from_polygon_centroid(poly: &Polygon<f64>, code_length: usize) -> Result<Vec<Self>, PlusCodeError> {
        match poly.centroid() {
            Some(centroid) => Ok(vec![Self::from_wgs84(&centroid, code_length)?]),
            None => Ok(vec![]),
        }
    }

    /// Returns the code as an upper case string slice.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns the decoded area of this code.
    pub fn area(&self) -> &CodeArea {
        &self.area
    }

    /// Number of significant digits in the code.
    pub fn code_length(&self) -> usize {
        self.area.code_length()
    }

    /// Whether the code carries padding characters.
    pub fn is_padded(&self) -> bool {
        self.code.contains(PADDING_CHARACTER)
    }

    /// Checks whether a location falls inside the area of this code.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.area.contains(coord)
    }

    /// Shortens this code relative to a reference location.
    ///
    /// See [`crate::shorten`].
    pub fn shorten(&self, reference: &impl Coordinate) -> Result<String, PlusCodeError> {
        shorten(&self.code, reference.lat(), reference.lng())
    }

    /// Returns the code for the cell containing this area's center at a different length.
    pub fn with_length(&self, code_length: usize) -> Result<Self, PlusCodeError> {
        Self::from_wgs84(&self.area.center(), code_length)
    }
}

impl PartialEq for PlusCode {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for PlusCode {}

impl Hash for PlusCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for PlusCode {
    type Err = PlusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_full(s) {
            return Err(PlusCodeError::InvalidCode(s.to_string()));
        }
        Self::from_full(s)
    }
}

impl TryFrom<String> for PlusCode {
    type Error = PlusCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlusCode> for String {
    fn from(code: PlusCode) -> Self {
        code.code
    }
}
