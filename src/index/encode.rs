use crate::error::PlusCodeError;
use crate::index::constants::{
    CODE_ALPHABET, ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_CODE_LENGTH,
    GRID_COLUMNS, GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT,
    PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};

/// Encodes a location into a Plus Code of the given length.
///
/// Latitude is clipped to -90..=90 and longitude is wrapped into -180..180.
/// The length is the number of significant digits: even values from 2 to 10
/// use the paired scheme (values below 8 are padded), values above 10 add grid
/// refinement digits and are capped at 15.
///
/// # Example
/// ```
/// use pluscode_rs::encode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// assert_eq!(encode(47.365590, 8.524997, 10)?, "8FVC9G8F+6X");
/// assert_eq!(encode(47.365590, 8.524997, 11)?, "8FVC9G8F+6XQ");
/// assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PlusCodeError::InvalidLength`] - length below 2, or odd and below 10
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, PlusCodeError> {
    let (lat_val, lng_val) = location_to_integers(latitude, longitude);
    encode_integers(lat_val, lng_val, code_length)
}

/// Converts a location in degrees to non-negative positions on the finest lattice.
///
/// Latitude saturates at the poles; longitude wraps around the antimeridian.
/// Together with [`encode_integers`] this splits [`encode`] into its two stages.
pub fn location_to_integers(latitude: f64, longitude: f64) -> (i64, i64) {
    let lat_offset = LATITUDE_MAX as i64 * FINAL_LAT_PRECISION;
    let lat_val = ((latitude * FINAL_LAT_PRECISION as f64).floor() as i64)
        .saturating_add(lat_offset)
        .clamp(0, 2 * lat_offset - 1);

    let lng_offset = LONGITUDE_MAX as i64 * FINAL_LNG_PRECISION;
    let lng_val = ((longitude * FINAL_LNG_PRECISION as f64).floor() as i64)
        .saturating_add(lng_offset)
        .rem_euclid(2 * lng_offset);

    (lat_val, lng_val)
}

/// Writes lattice positions out as a code with `code_length` significant digits.
///
/// Positions outside the lattice are clamped (latitude) or wrapped (longitude)
/// the same way [`location_to_integers`] does.
pub fn encode_integers(
    lat_val: i64,
    lng_val: i64,
    code_length: usize,
) -> Result<String, PlusCodeError> {
    if code_length < MIN_DIGIT_COUNT || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        return Err(PlusCodeError::InvalidLength(code_length));
    }
    let lat_span = 2 * LATITUDE_MAX as i64 * FINAL_LAT_PRECISION;
    let lng_span = 2 * LONGITUDE_MAX as i64 * FINAL_LNG_PRECISION;
    let mut lat_val = lat_val.clamp(0, lat_span - 1);
    let mut lng_val = lng_val.rem_euclid(lng_span);
    let code_length = code_length.min(MAX_DIGIT_COUNT);

    let alphabet = CODE_ALPHABET.as_bytes();
    let mut digits = [0u8; MAX_DIGIT_COUNT];

    if code_length > PAIR_CODE_LENGTH {
        // Grid digits come off the least significant end.
        for slot in digits[PAIR_CODE_LENGTH..].iter_mut().rev() {
            let lat_digit = lat_val % GRID_ROWS;
            let lng_digit = lng_val % GRID_COLUMNS;
            *slot = alphabet[(lat_digit * GRID_COLUMNS + lng_digit) as usize];
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH);
    }

    for pair in digits[..PAIR_CODE_LENGTH].chunks_exact_mut(2).rev() {
        pair[0] = alphabet[(lat_val % ENCODING_BASE) as usize];
        pair[1] = alphabet[(lng_val % ENCODING_BASE) as usize];
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }

    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    if code_length >= SEPARATOR_POSITION {
        code.extend(digits[..SEPARATOR_POSITION].iter().map(|&b| char::from(b)));
        code.push(SEPARATOR);
        code.extend(
            digits[SEPARATOR_POSITION..code_length]
                .iter()
                .map(|&b| char::from(b)),
        );
    } else {
        code.extend(digits[..code_length].iter().map(|&b| char::from(b)));
        code.extend(std::iter::repeat_n(
            PADDING_CHARACTER,
            SEPARATOR_POSITION - code_length,
        ));
        code.push(SEPARATOR);
    }

    Ok(code)
}
