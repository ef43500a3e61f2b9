use thiserror::Error;

/// Error type for pluscode-rs operations.
#[derive(Debug, Error, PartialEq)]
pub enum PlusCodeError {
    /// The code failed the validity or fullness check required by the operation.
    #[error("Invalid code: {0}")]
    InvalidCode(String),
    /// The requested code length is below 2, or odd and below 10.
    #[error("Invalid code length: {0}")]
    InvalidLength(usize),
    /// Padded codes cannot be shortened.
    #[error("Cannot shorten padded code: {0}")]
    PaddedCode(String),
    /// The code has too few significant digits to be shortened.
    #[error("Code length must be at least 6 to shorten, got {0}")]
    TooShort(usize),
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(String),
    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
    /// A line segment needs more samples than a single geometry may produce.
    #[error("Geometry too large to sample: {0}")]
    GeometryTooLarge(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlusCodeError::InvalidCode("9G8F+6X".into()).to_string(),
            "Invalid code: 9G8F+6X"
        );
        assert_eq!(
            PlusCodeError::InvalidLength(7).to_string(),
            "Invalid code length: 7"
        );
        assert_eq!(
            PlusCodeError::TooShort(4).to_string(),
            "Code length must be at least 6 to shorten, got 4"
        );
    }
}
