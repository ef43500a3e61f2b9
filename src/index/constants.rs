/// Separator used to break the code into two parts to aid memorability.
pub const SEPARATOR: char = '+';

/// Number of characters placed before the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Character used to pad codes shorter than the separator position.
pub const PADDING_CHARACTER: char = '0';

/// The 20 symbols used to write code digits, in digit-value order.
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Base of the paired digit scheme (length of `CODE_ALPHABET`).
pub const ENCODING_BASE: i64 = 20;

/// Maximum latitude in degrees.
pub const LATITUDE_MAX: f64 = 90.0;

/// Maximum longitude in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Minimum number of significant digits in a code.
pub const MIN_DIGIT_COUNT: usize = 2;

/// Maximum number of significant digits processed in a code.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Maximum code length using lat/lng pair encoding (roughly 14x14 meters at the equator).
pub const PAIR_CODE_LENGTH: usize = 10;

/// Code length used when none is given.
pub const DEFAULT_CODE_LENGTH: usize = PAIR_CODE_LENGTH;

/// Minimum number of significant digits a code needs before it can be shortened.
pub const MIN_TRIMMABLE_CODE_LEN: usize = 6;

/// Place value of the most significant pair, `ENCODING_BASE ^ (PAIR_CODE_LENGTH / 2 - 1)`.
pub(crate) const PAIR_FIRST_PLACE_VALUE: i64 = 160_000;

/// Inverse of the precision of the pair section, `ENCODING_BASE ^ 3`.
pub(crate) const PAIR_PRECISION: i64 = 8_000;

/// Cell size in degrees after each digit pair.
pub(crate) const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Number of grid refinement digits, `MAX_DIGIT_COUNT - PAIR_CODE_LENGTH`.
pub(crate) const GRID_CODE_LENGTH: u32 = 5;

/// Columns in each grid refinement step.
pub(crate) const GRID_COLUMNS: i64 = 4;

/// Rows in each grid refinement step.
pub(crate) const GRID_ROWS: i64 = 5;

/// Place value of the first latitude grid digit, `GRID_ROWS ^ (GRID_CODE_LENGTH - 1)`.
pub(crate) const GRID_LAT_FIRST_PLACE_VALUE: i64 = 625;

/// Place value of the first longitude grid digit, `GRID_COLUMNS ^ (GRID_CODE_LENGTH - 1)`.
pub(crate) const GRID_LNG_FIRST_PLACE_VALUE: i64 = 256;

/// Latitude lattice scale: `PAIR_PRECISION * GRID_ROWS ^ GRID_CODE_LENGTH`.
pub(crate) const FINAL_LAT_PRECISION: i64 = 25_000_000;

/// Longitude lattice scale: `PAIR_PRECISION * GRID_COLUMNS ^ GRID_CODE_LENGTH`.
pub(crate) const FINAL_LNG_PRECISION: i64 = 8_192_000;

/// A reference must lie within this fraction of a cell to drop the digits above it.
pub(crate) const SHORTEN_RANGE_FACTOR: f64 = 0.3;

/// Decoded edges are rounded to 14 decimal places.
pub(crate) const DECODE_ROUNDING: f64 = 1e14;

/// Returns the digit value of an alphabet byte, ignoring ASCII case.
pub(crate) fn digit_value(byte: u8) -> Option<usize> {
    let upper = byte.to_ascii_uppercase();
    CODE_ALPHABET.bytes().position(|b| b == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        assert_eq!(CODE_ALPHABET.len() as i64, ENCODING_BASE);
        assert_eq!(
            PAIR_FIRST_PLACE_VALUE,
            ENCODING_BASE.pow((PAIR_CODE_LENGTH / 2 - 1) as u32)
        );
        assert_eq!(PAIR_PRECISION, ENCODING_BASE.pow(3));
        assert_eq!(
            FINAL_LAT_PRECISION,
            PAIR_PRECISION * GRID_ROWS.pow(GRID_CODE_LENGTH)
        );
        assert_eq!(
            FINAL_LNG_PRECISION,
            PAIR_PRECISION * GRID_COLUMNS.pow(GRID_CODE_LENGTH)
        );
        assert_eq!(
            GRID_CODE_LENGTH as usize,
            MAX_DIGIT_COUNT - PAIR_CODE_LENGTH
        );
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value(b'2'), Some(0));
        assert_eq!(digit_value(b'X'), Some(19));
        assert_eq!(digit_value(b'x'), Some(19));
        assert_eq!(digit_value(b'c'), Some(8));
        assert_eq!(digit_value(b'0'), None);
        assert_eq!(digit_value(b'A'), None);
        assert_eq!(digit_value(b'+'), None);
    }
}
