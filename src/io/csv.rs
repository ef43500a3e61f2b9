use crate::code::PlusCode;
use crate::error::PlusCodeError;
use crate::geom::{GeometryFormat, parse_geometry};
use crate::index::DEFAULT_CODE_LENGTH;
use csv::StringRecord;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, trace, warn};

enum SourceIndices {
    Geometry(usize),
    Coordinates { lng_idx: usize, lat_idx: usize },
}

/// Where each CSV row keeps its location.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry in WGS84
    GeometryColumn(String),
    /// Separate longitude and latitude columns in degrees
    CoordinateColumns { lng_column: String, lat_column: String },
}

/// Configuration for CSV to Plus Code conversion.
#[derive(Debug, Clone)]
pub struct CsvPlusCodeConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub code_length: usize,
    pub area_geometry: Option<GeometryFormat>,
    /// Reference location as `(latitude, longitude)` used for the `short_code` column.
    pub reference: Option<(f64, f64)>,
    /// Skip rows that fail to parse or encode instead of aborting.
    pub lenient: bool,
}

impl CsvPlusCodeConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use pluscode_rs::CsvPlusCodeConfig;
    ///
    /// let config = CsvPlusCodeConfig::new("geometry", 10);
    /// ```
    pub fn new(geometry_column: impl Into<String>, code_length: usize) -> Self {
        Self::with_source(
            CoordinateSource::GeometryColumn(geometry_column.into()),
            code_length,
        )
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use pluscode_rs::CsvPlusCodeConfig;
    ///
    /// let config = CsvPlusCodeConfig::from_coords("Longitude", "Latitude", 11)
    ///     .with_reference(47.37, 8.54);
    /// ```
    pub fn from_coords(
        lng_column: impl Into<String>,
        lat_column: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self::with_source(
            CoordinateSource::CoordinateColumns {
                lng_column: lng_column.into(),
                lat_column: lat_column.into(),
            },
            code_length,
        )
    }

    fn with_source(source: CoordinateSource, code_length: usize) -> Self {
        Self {
            source,
            exclude_columns: Vec::new(),
            code_length,
            area_geometry: None,
            reference: None,
            lenient: false,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the polygon of each code's area in an `area_geometry` column.
    pub fn with_area_geometry(mut self, format: GeometryFormat) -> Self {
        self.area_geometry = Some(format);
        self
    }

    /// Add a `short_code` column with codes shortened relative to this location.
    pub fn with_reference(mut self, latitude: f64, longitude: f64) -> Self {
        self.reference = Some((latitude, longitude));
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
}

impl Default for CsvPlusCodeConfig {
    fn default() -> Self {
        Self::from_coords("longitude", "latitude", DEFAULT_CODE_LENGTH)
    }
}

pub trait CsvToPlusCode {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPlusCodeConfig,
    ) -> Result<(), PlusCodeError>;
}

impl<P: AsRef<Path>> CsvToPlusCode for P {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvPlusCodeConfig,
    ) -> Result<(), PlusCodeError> {
        csv_to_plus_code_csv(self, output_path, config)
    }
}

fn column_index(headers: &StringRecord, name: &str, role: &str) -> Result<usize, PlusCodeError> {
    if name.is_empty() {
        return Err(PlusCodeError::CsvError(format!(
            "{} column name cannot be empty",
            role
        )));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PlusCodeError::CsvError(format!("{} column '{}' not found", role, name)))
}

fn parse_degrees(record: &StringRecord, idx: usize, role: &str) -> Result<f64, PlusCodeError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| PlusCodeError::CsvError(format!("Missing {} column at index {}", role, idx)))?
        .trim();
    raw.parse()
        .map_err(|_| PlusCodeError::CsvError(format!("Invalid {}: '{}'", role, raw)))
}

fn row_codes(
    record: &StringRecord,
    source: &SourceIndices,
    code_length: usize,
) -> Result<Vec<PlusCode>, PlusCodeError> {
    match source {
        SourceIndices::Geometry(idx) => {
            let geom_str = record.get(*idx).ok_or_else(|| {
                PlusCodeError::CsvError(format!("Missing geometry column at index {}", idx))
            })?;
            PlusCode::from_geometry(parse_geometry(geom_str)?, code_length)
        }
        SourceIndices::Coordinates { lng_idx, lat_idx } => {
            let lng = parse_degrees(record, *lng_idx, "longitude")?;
            let lat = parse_degrees(record, *lat_idx, "latitude")?;
            Ok(vec![PlusCode::from_wgs84(&(lng, lat), code_length)?])
        }
    }
}

/// Converts a CSV file with geometry or coordinate columns to a CSV file with Plus Codes.
///
/// Each output row starts with `plus_code`, followed by `short_code` when a
/// reference is configured, `area_geometry` when requested, and then every
/// input column that is neither a source column nor excluded. Geometries
/// yielding several codes (lines, multi-points) produce one row per code.
/// Rows are streamed, so memory use does not grow with the file.
///
/// # Example with a geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use pluscode_rs::{csv_to_plus_code_csv, CsvPlusCodeConfig, GeometryFormat};
///
/// let config = CsvPlusCodeConfig::new("Geo Shape", 10)
///     .exclude(vec!["Geo Point".into()])
///     .with_area_geometry(GeometryFormat::Wkt);
///
/// csv_to_plus_code_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use pluscode_rs::{csv_to_plus_code_csv, CsvPlusCodeConfig};
///
/// let config = CsvPlusCodeConfig::from_coords("Longitude", "Latitude", 11).lenient(true);
///
/// csv_to_plus_code_csv("stops.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_plus_code_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvPlusCodeConfig,
) -> Result<(), PlusCodeError> {
    let file = File::open(csv_path).map_err(|e| PlusCodeError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| PlusCodeError::CsvError(e.to_string()))?
        .clone();

    // Source columns never reach the output.
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lng_column,
            lat_column,
        } => {
            let lng_idx = column_index(&headers, lng_column, "Longitude")?;
            let lat_idx = column_index(&headers, lat_column, "Latitude")?;
            (
                SourceIndices::Coordinates { lng_idx, lat_idx },
                HashSet::from([lng_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| PlusCodeError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["plus_code"];
    if config.reference.is_some() {
        header_row.push("short_code");
    }
    if config.area_geometry.is_some() {
        header_row.push("area_geometry");
    }
    header_row.extend(
        headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !exclude_indices.contains(i))
            .map(|(_, h)| h),
    );
    writer
        .write_record(&header_row)
        .map_err(|e| PlusCodeError::CsvError(e.to_string()))?;

    let mut written = 0usize;
    let mut skipped = 0usize;

    for (row_number, result) in reader.records().enumerate() {
        let record = result.map_err(|e| PlusCodeError::CsvError(e.to_string()))?;

        let codes = match row_codes(&record, &source_indices, config.code_length) {
            Ok(codes) => codes,
            Err(e) if config.lenient => {
                warn!(row = row_number + 1, error = %e, "skipping row");
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        trace!(row = row_number + 1, codes = codes.len(), "encoded row");

        for code in codes {
            let mut row: Vec<String> = vec![code.to_string()];

            if let Some((lat, lng)) = config.reference {
                // Padded codes have no short form.
                let short = match code.is_padded() {
                    true => code.to_string(),
                    false => code.shorten(&(lng, lat))?,
                };
                row.push(short);
            }

            if let Some(format) = config.area_geometry {
                row.push(format.render(code.area()));
            }

            row.extend(
                record
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !exclude_indices.contains(i))
                    .map(|(_, field)| field.to_string()),
            );
            writer
                .write_record(&row)
                .map_err(|e| PlusCodeError::CsvError(e.to_string()))?;
            written += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| PlusCodeError::IoError(e.to_string()))?;

    debug!(written, skipped, "finished CSV conversion");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_input(path: &Path, lines: &[&str]) -> Result<(), PlusCodeError> {
        let mut file = File::create(path).map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        for line in lines {
            writeln!(file, "{}", line).map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        }
        Ok(())
    }

    fn read_output(path: &Path) -> Result<Vec<Vec<String>>, PlusCodeError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| PlusCodeError::CsvError(e.to_string()))?;
        reader
            .records()
            .map(|r| {
                r.map(|rec| rec.iter().map(str::to_string).collect())
                    .map_err(|e| PlusCodeError::CsvError(e.to_string()))
            })
            .collect()
    }

    #[test]
    fn test_from_coords() -> Result<(), PlusCodeError> {
        let dir = tempdir().map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("stops.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ID,Longitude,Latitude,Description",
                "1,8.524997,47.365590,Zurich",
                "2,2.775,20.375,Sahara",
            ],
        )?;

        let config = CsvPlusCodeConfig::from_coords("Longitude", "Latitude", 10);
        csv_path.to_plus_code_csv(&output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(rows[0], vec!["plus_code", "ID", "Description"]);
        assert_eq!(rows[1], vec!["8FVC9G8F+6X", "1", "Zurich"]);
        assert_eq!(rows[2][0], "7FG49QGG+22");
        assert_eq!(rows.len(), 3);
        Ok(())
    }

    #[test]
    fn test_geometry_column_with_area_and_reference() -> Result<(), PlusCodeError> {
        let dir = tempdir().map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("assets.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ASSET_ID,TYPE,geometry,Geo Point",
                "A1,Pump,\"{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[8.524997,47.36559]}\",x",
                "A2,Valve,POINT(8.524997 47.36559),y",
            ],
        )?;

        let config = CsvPlusCodeConfig::new("geometry", 10)
            .exclude(vec!["Geo Point".into()])
            .with_reference(47.5, 8.5)
            .with_area_geometry(GeometryFormat::Wkt);
        csv_to_plus_code_csv(&csv_path, &output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(
            rows[0],
            vec!["plus_code", "short_code", "area_geometry", "ASSET_ID", "TYPE"]
        );
        for row in &rows[1..] {
            assert_eq!(row[0], "8FVC9G8F+6X");
            assert_eq!(row[1], "9G8F+6X");
            assert!(row[2].starts_with("POLYGON"));
        }
        assert_eq!(rows[2][3], "A2");
        Ok(())
    }

    #[test]
    fn test_line_geometry_expands_rows() -> Result<(), PlusCodeError> {
        let dir = tempdir().map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("pipes.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &["ID,geometry", "P1,\"LINESTRING(2.70 20.37, 2.90 20.37)\""],
        )?;

        let config = CsvPlusCodeConfig::new("geometry", 6);
        csv_to_plus_code_csv(&csv_path, &output_path, &config)?;

        let rows = read_output(&output_path)?;
        // 0.2 degrees of longitude over 0.05 degree cells touches 5 cells.
        assert_eq!(rows.len() - 1, 5);
        assert!(rows[1..].iter().all(|r| r[1] == "P1"));
        Ok(())
    }

    #[test]
    fn test_bad_row_fails_strict() -> Result<(), PlusCodeError> {
        let dir = tempdir().map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("bad.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["lng,lat", "8.5,47.3", "abc,47.3"])?;

        let config = CsvPlusCodeConfig::from_coords("lng", "lat", 10);
        let result = csv_to_plus_code_csv(&csv_path, &output_path, &config);
        assert!(matches!(result, Err(PlusCodeError::CsvError(_))));
        Ok(())
    }

    #[test]
    fn test_bad_row_skipped_lenient() -> Result<(), PlusCodeError> {
        let dir = tempdir().map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("bad.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["lng,lat,name", "8.5,47.3,a", "abc,47.3,b", "2.775,20.375,c"])?;

        let config = CsvPlusCodeConfig::from_coords("lng", "lat", 10).lenient(true);
        csv_to_plus_code_csv(&csv_path, &output_path, &config)?;

        let rows = read_output(&output_path)?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][1], "a");
        assert_eq!(rows[2][1], "c");
        Ok(())
    }

    #[test]
    fn test_oversized_line_skipped_lenient() -> Result<(), PlusCodeError> {
        let dir = tempdir().map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("lines.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ID,geometry",
                "L1,\"LINESTRING(0 0, 100 0)\"",
                "L2,POINT(8.524997 47.36559)",
            ],
        )?;

        let strict = CsvPlusCodeConfig::new("geometry", 15);
        assert!(matches!(
            csv_to_plus_code_csv(&csv_path, &output_path, &strict),
            Err(PlusCodeError::GeometryTooLarge(_))
        ));

        let lenient = CsvPlusCodeConfig::new("geometry", 15).lenient(true);
        csv_to_plus_code_csv(&csv_path, &output_path, &lenient)?;
        let rows = read_output(&output_path)?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "L2");
        Ok(())
    }

    #[test]
    fn test_invalid_length_is_a_row_error() -> Result<(), PlusCodeError> {
        let dir = tempdir().map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("in.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["lng,lat", "8.5,47.3"])?;

        let config = CsvPlusCodeConfig::from_coords("lng", "lat", 7);
        assert_eq!(
            csv_to_plus_code_csv(&csv_path, &output_path, &config),
            Err(PlusCodeError::InvalidLength(7))
        );
        Ok(())
    }

    #[test]
    fn test_missing_columns() -> Result<(), PlusCodeError> {
        let dir = tempdir().map_err(|e| PlusCodeError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("in.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["x,y", "1,2"])?;

        let config = CsvPlusCodeConfig::new("geometry", 10);
        assert!(matches!(
            csv_to_plus_code_csv(&csv_path, &output_path, &config),
            Err(PlusCodeError::CsvError(msg)) if msg.contains("not found")
        ));

        let config = CsvPlusCodeConfig::from_coords("", "y", 10);
        assert!(csv_to_plus_code_csv(&csv_path, &output_path, &config).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_input_file() {
        let config = CsvPlusCodeConfig::default();
        assert!(matches!(
            csv_to_plus_code_csv("/nonexistent/in.csv", "/nonexistent/out.csv", &config),
            Err(PlusCodeError::IoError(_))
        ));
    }
}
