use crate::index::constants::{LATITUDE_MAX, LONGITUDE_MAX};

/// Clips a latitude into the range -90 to 90.
pub fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

/// Normalizes a longitude into the range -180 (inclusive) to 180 (exclusive).
///
/// Steps by whole turns so that exactly 180 maps to -180 and -180 stays put.
pub fn normalize_longitude(longitude: f64) -> f64 {
    if !longitude.is_finite() {
        return longitude;
    }
    let turn = 2.0 * LONGITUDE_MAX;
    // Reduce far-out values before stepping.
    let mut longitude = if longitude.abs() > 2.0 * turn {
        longitude % turn
    } else {
        longitude
    };
    while longitude < -LONGITUDE_MAX {
        longitude += turn;
    }
    while longitude >= LONGITUDE_MAX {
        longitude -= turn;
    }
    longitude
}
