pub mod csv;

pub use csv::{CoordinateSource, CsvPlusCodeConfig, CsvToPlusCode, csv_to_plus_code_csv};
