use crate::area::CodeArea;
use crate::error::PlusCodeError;
use crate::index::constants::{
    DECODE_ROUNDING, ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_COLUMNS,
    GRID_LAT_FIRST_PLACE_VALUE, GRID_LNG_FIRST_PLACE_VALUE, GRID_ROWS, LATITUDE_MAX,
    LONGITUDE_MAX, MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_FIRST_PLACE_VALUE,
    PAIR_PRECISION, SEPARATOR, digit_value,
};
use crate::index::validate::is_full;

/// Decodes a full Plus Code into the area it covers.
///
/// Separator and padding are ignored, letters may be in either case, and only
/// the first 15 significant digits are used.
///
/// # Process
///
/// 1. Walks up to 10 digits in latitude/longitude pairs, each pair dividing the
///    place value by 20
/// 2. Walks any remaining digits as grid digits, splitting each into a row
///    (latitude, base 5) and a column (longitude, base 4)
/// 3. Scales the integer accumulators back to degrees and rounds the edges to
///    14 decimal places to cancel floating point noise
///
/// # Example
/// ```
/// use pluscode_rs::decode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// let area = decode("8FVC9G8F+6X")?;
/// assert!((area.latitude_center() - 47.365562).abs() < 0.001);
/// assert!((area.longitude_center() - 8.524968).abs() < 0.001);
/// assert_eq!(area.code_length(), 10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PlusCodeError::InvalidCode`] - the code is not a valid full code
pub fn decode(code: &str) -> Result<CodeArea, PlusCodeError> {
    if !is_full(code) {
        return Err(PlusCodeError::InvalidCode(code.to_string()));
    }

    let digits: Vec<i64> = code
        .bytes()
        .filter(|&b| b != SEPARATOR as u8 && b != PADDING_CHARACTER as u8)
        .filter_map(digit_value)
        .take(MAX_DIGIT_COUNT)
        .map(|d| d as i64)
        .collect();

    let mut normal_lat = -(LATITUDE_MAX as i64) * PAIR_PRECISION;
    let mut normal_lng = -(LONGITUDE_MAX as i64) * PAIR_PRECISION;
    let mut grid_lat = 0i64;
    let mut grid_lng = 0i64;

    let pairs = digits[..digits.len().min(PAIR_CODE_LENGTH)].chunks_exact(2);
    let pair_count = pairs.len();
    let mut place_value = PAIR_FIRST_PLACE_VALUE;
    for (n, pair) in pairs.enumerate() {
        normal_lat += pair[0] * place_value;
        normal_lng += pair[1] * place_value;
        if n + 1 < pair_count {
            place_value /= ENCODING_BASE;
        }
    }

    let mut lat_precision = place_value as f64 / PAIR_PRECISION as f64;
    let mut lng_precision = place_value as f64 / PAIR_PRECISION as f64;

    if digits.len() > PAIR_CODE_LENGTH {
        let grid = &digits[PAIR_CODE_LENGTH..];
        let mut row_place_value = GRID_LAT_FIRST_PLACE_VALUE;
        let mut col_place_value = GRID_LNG_FIRST_PLACE_VALUE;
        for (n, &digit) in grid.iter().enumerate() {
            grid_lat += (digit / GRID_COLUMNS) * row_place_value;
            grid_lng += (digit % GRID_COLUMNS) * col_place_value;
            if n + 1 < grid.len() {
                row_place_value /= GRID_ROWS;
                col_place_value /= GRID_COLUMNS;
            }
        }
        lat_precision = row_place_value as f64 / FINAL_LAT_PRECISION as f64;
        lng_precision = col_place_value as f64 / FINAL_LNG_PRECISION as f64;
    }

    let lat = normal_lat as f64 / PAIR_PRECISION as f64 + grid_lat as f64 / FINAL_LAT_PRECISION as f64;
    let lng = normal_lng as f64 / PAIR_PRECISION as f64 + grid_lng as f64 / FINAL_LNG_PRECISION as f64;

    Ok(CodeArea::new(
        round_degrees(lat),
        round_degrees(lng),
        round_degrees(lat + lat_precision),
        round_degrees(lng + lng_precision),
        digits.len(),
    ))
}

fn round_degrees(value: f64) -> f64 {
    (value * DECODE_ROUNDING).round() / DECODE_ROUNDING
}
