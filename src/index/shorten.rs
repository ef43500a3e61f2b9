use crate::coord::{clip_latitude, normalize_longitude};
use crate::error::PlusCodeError;
use crate::index::constants::{
    DEFAULT_CODE_LENGTH, ENCODING_BASE, LATITUDE_MAX, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER,
    PAIR_RESOLUTIONS, SEPARATOR, SEPARATOR_POSITION, SHORTEN_RANGE_FACTOR,
};
use crate::index::decode::decode;
use crate::index::encode::encode;
use crate::index::validate::{is_full, is_short};
use tracing::debug;

/// Removes leading digits from a full code using a nearby reference location.
///
/// The closer the reference is to the center of the code, the more digit
/// pairs can be dropped: 2, 4 or 6 leading pairs are removed when the reference
/// lies within 30% of the matching cell size. Codes are returned upper case and
/// unchanged when the reference is too far away.
///
/// # Example
/// ```
/// use pluscode_rs::shorten;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// assert_eq!(shorten("8FVC9G8F+6X", 47.5, 8.5)?, "9G8F+6X");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PlusCodeError::InvalidCode`] - the code is not a valid full code
/// - [`PlusCodeError::PaddedCode`] - the code contains padding
/// - [`PlusCodeError::TooShort`] - the code has fewer than 6 significant digits
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String, PlusCodeError> {
    if !is_full(code) {
        return Err(PlusCodeError::InvalidCode(code.to_string()));
    }
    if code.contains(PADDING_CHARACTER) {
        return Err(PlusCodeError::PaddedCode(code.to_string()));
    }

    let code = code.to_ascii_uppercase();
    let area = decode(&code)?;
    if area.code_length() < MIN_TRIMMABLE_CODE_LEN {
        return Err(PlusCodeError::TooShort(area.code_length()));
    }

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    let range = (area.latitude_center() - latitude)
        .abs()
        .max((area.longitude_center() - longitude).abs());

    // Skip the coarsest and finest resolutions.
    for i in (1..PAIR_RESOLUTIONS.len() - 1).rev() {
        if range < PAIR_RESOLUTIONS[i] * SHORTEN_RANGE_FACTOR {
            let trim = (i + 1) * 2;
            debug!(code = %code, range, trim, "shortening code");
            return Ok(code[trim..].to_string());
        }
    }

    debug!(code = %code, range, "reference too far to shorten");
    Ok(code)
}

/// Recovers the nearest full code for a short code and a reference location.
///
/// The missing leading digits are taken from the reference location. Because
/// the reference may sit near a cell edge, the resulting candidate is moved by
/// one cell north, south, east or west when that brings its center closer to
/// the reference. Full codes are returned upper case and unchanged.
///
/// # Example
/// ```
/// use pluscode_rs::recover_nearest;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// assert_eq!(recover_nearest("9G8F+6X", 47.4, 8.6)?, "8FVC9G8F+6X");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PlusCodeError::InvalidCode`] - the code is neither full nor a valid short code
pub fn recover_nearest(
    code: &str,
    reference_latitude: f64,
    reference_longitude: f64,
) -> Result<String, PlusCodeError> {
    if is_full(code) {
        return Ok(code.to_ascii_uppercase());
    }
    if !is_short(code) {
        return Err(PlusCodeError::InvalidCode(code.to_string()));
    }

    let reference_latitude = clip_latitude(reference_latitude);
    let reference_longitude = normalize_longitude(reference_longitude);

    let code = code.to_ascii_uppercase();
    let separator = code
        .find(SEPARATOR)
        .ok_or_else(|| PlusCodeError::InvalidCode(code.clone()))?;
    let missing = SEPARATOR_POSITION - separator;

    // Height and width of the area the missing digits span, in degrees.
    let resolution = (ENCODING_BASE as f64).powi(2 - (missing / 2) as i32);
    let half_resolution = resolution / 2.0;

    let prefix = encode(reference_latitude, reference_longitude, DEFAULT_CODE_LENGTH)?;
    let mut area = decode(&format!("{}{}", &prefix[..missing], code))?;

    let center_lat = area.latitude_center();
    if reference_latitude + half_resolution < center_lat
        && center_lat - resolution >= -LATITUDE_MAX
    {
        debug!(code = %code, "moving candidate one cell south");
        area = area.shifted(-resolution, 0.0);
    } else if reference_latitude - half_resolution > center_lat
        && center_lat + resolution <= LATITUDE_MAX
    {
        debug!(code = %code, "moving candidate one cell north");
        area = area.shifted(resolution, 0.0);
    }

    let center_lng = area.longitude_center();
    if reference_longitude + half_resolution < center_lng {
        debug!(code = %code, "moving candidate one cell west");
        area = area.shifted(0.0, -resolution);
    } else if reference_longitude - half_resolution > center_lng {
        debug!(code = %code, "moving candidate one cell east");
        area = area.shifted(0.0, resolution);
    }

    encode(
        area.latitude_center(),
        area.longitude_center(),
        area.code_length(),
    )
}
