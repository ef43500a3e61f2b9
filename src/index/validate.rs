use crate::index::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
    digit_value,
};

const SEPARATOR_BYTE: u8 = SEPARATOR as u8;
const PADDING_BYTE: u8 = PADDING_CHARACTER as u8;

/// Determines if a string is a valid sequence of Plus Code characters.
///
/// A valid code has exactly one separator at an even offset no greater than 8,
/// any padding forms a single even-length run that is only allowed in codes
/// with 8 characters before the separator and must be followed by the separator
/// as the final character, and the separator is never followed by a single digit.
/// Alphabet letters are accepted in either case.
///
/// # Example
/// ```
/// use pluscode_rs::is_valid;
///
/// assert!(is_valid("8FVC9G8F+6X"));
/// assert!(is_valid("8FVC9G8F+"));
/// assert!(!is_valid("8FVC9G8F"));
/// assert!(!is_valid("8FVC9G8F+6X1"));
/// ```
pub fn is_valid(code: &str) -> bool {
    let bytes = code.as_bytes();

    if bytes.iter().filter(|&&b| b == SEPARATOR_BYTE).count() > 1 {
        return false;
    }
    if bytes.len() == 1 {
        return false;
    }
    let Some(sep) = code.find(SEPARATOR) else {
        return false;
    };
    if sep > SEPARATOR_POSITION || sep % 2 == 1 {
        return false;
    }

    if let Some(pad) = code.find(PADDING_CHARACTER) {
        // Short codes cannot have padding, and padding cannot lead the code.
        if sep < SEPARATOR_POSITION || pad == 0 {
            return false;
        }
        let rpad = code.rfind(PADDING_CHARACTER).unwrap_or(pad);
        let pads = &bytes[pad..=rpad];
        if pads.len() % 2 == 1 || pads.iter().any(|&b| b != PADDING_BYTE) {
            return false;
        }
        if !code.ends_with(SEPARATOR) {
            return false;
        }
    }

    if bytes.len() - sep - 1 == 1 {
        return false;
    }

    bytes
        .iter()
        .all(|&b| b == SEPARATOR_BYTE || b == PADDING_BYTE || digit_value(b).is_some())
}

/// Determines if a code is a valid short code.
///
/// A short code is a valid code with fewer than 8 characters before the separator.
/// It has to be recovered against a reference location before it can be decoded.
pub fn is_short(code: &str) -> bool {
    is_valid(code)
        && code
            .find(SEPARATOR)
            .is_some_and(|sep| sep < SEPARATOR_POSITION)
}

/// Determines if a code is a valid full code.
///
/// Not every valid character sequence decodes to a legal location: the first
/// latitude digit must keep latitude below 90 and the first longitude digit must
/// keep longitude below 180.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let bytes = code.as_bytes();
    let first_lat = leading_degrees(bytes.first().copied());
    if first_lat >= LATITUDE_MAX * 2.0 {
        return false;
    }
    if bytes.len() > 1 {
        let first_lng = leading_degrees(bytes.get(1).copied());
        if first_lng >= LONGITUDE_MAX * 2.0 {
            return false;
        }
    }
    true
}

/// Degrees covered by the digits below a most significant digit.
fn leading_degrees(byte: Option<u8>) -> f64 {
    let value = byte.and_then(digit_value).unwrap_or(0) as i64;
    (value * ENCODING_BASE) as f64
}
