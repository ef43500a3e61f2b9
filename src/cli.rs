//! CLI argument definitions for pluscode

use clap::{Args, Parser, Subcommand};
use pluscode_rs::{DEFAULT_CODE_LENGTH, GeometryFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pluscode")]
#[command(about = "Encode, decode, shorten and recover Open Location Codes")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a latitude/longitude into a full code
    Encode(EncodeArgs),

    /// Decode a full code into the area it covers
    Decode(DecodeArgs),

    /// Shorten a full code relative to a reference location
    Shorten(ReferenceArgs),

    /// Recover the nearest full code from a short code and a reference location
    Recover(ReferenceArgs),

    /// Report whether codes are valid, short or full
    Validate(ValidateArgs),

    /// Add Plus Codes to every row of a CSV file
    Csv(CsvArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Number of significant digits (2, 4, 6, 8 or 10 to 15)
    #[arg(short, long, default_value_t = DEFAULT_CODE_LENGTH)]
    pub length: usize,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Full code to decode
    pub code: String,

    /// Also print the area as a polygon (wkt or geojson)
    #[arg(long)]
    pub area: Option<GeometryFormat>,
}

#[derive(Args)]
pub struct ReferenceArgs {
    /// Code to transform
    pub code: String,

    /// Reference latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Reference longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Codes to check
    #[arg(required = true)]
    pub codes: Vec<String>,
}

#[derive(Args)]
pub struct CsvArgs {
    /// Input CSV file
    pub input: PathBuf,

    /// Output CSV file
    pub output: PathBuf,

    /// Column holding WKT or GeoJSON geometry
    #[arg(long, conflicts_with_all = ["lng_column", "lat_column"])]
    pub geometry_column: Option<String>,

    /// Column holding longitudes
    #[arg(long, default_value = "longitude")]
    pub lng_column: String,

    /// Column holding latitudes
    #[arg(long, default_value = "latitude")]
    pub lat_column: String,

    /// Number of significant digits
    #[arg(short, long, default_value_t = DEFAULT_CODE_LENGTH)]
    pub length: usize,

    /// Columns to drop from the output
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Add an area_geometry column in this format (wkt or geojson)
    #[arg(long)]
    pub area: Option<GeometryFormat>,

    /// Reference latitude for a short_code column
    #[arg(long, allow_negative_numbers = true, requires = "ref_lng")]
    pub ref_lat: Option<f64>,

    /// Reference longitude for a short_code column
    #[arg(long, allow_negative_numbers = true, requires = "ref_lat")]
    pub ref_lng: Option<f64>,

    /// Skip rows that cannot be encoded instead of failing
    #[arg(long)]
    pub lenient: bool,
}
