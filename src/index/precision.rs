use crate::index::constants::{ENCODING_BASE, GRID_COLUMNS, GRID_ROWS, PAIR_CODE_LENGTH};

/// Computes the height in degrees of the cell covered by a code of the given length.
///
/// Lengths up to 10 share one precision for latitude and longitude. Beyond 10,
/// every grid digit divides the height by 5 (rows) but the width only by 4
/// (columns), see [`compute_longitude_precision`].
///
/// # Example
/// ```
/// use pluscode_rs::compute_latitude_precision;
///
/// assert!((compute_latitude_precision(10) - 0.000125).abs() < 1e-12);
/// assert_eq!(compute_latitude_precision(2), 20.0);
/// ```
pub fn compute_latitude_precision(code_length: usize) -> f64 {
    grid_precision(code_length, GRID_ROWS)
}

/// Computes the width in degrees of the cell covered by a code of the given length.
pub fn compute_longitude_precision(code_length: usize) -> f64 {
    grid_precision(code_length, GRID_COLUMNS)
}

fn grid_precision(code_length: usize, divisions: i64) -> f64 {
    let base = ENCODING_BASE as f64;
    if code_length <= PAIR_CODE_LENGTH {
        return base.powi(2 - code_length.div_ceil(2) as i32);
    }
    let grid_digits = (code_length - PAIR_CODE_LENGTH) as i32;
    base.powi(-3) / (divisions as f64).powi(grid_digits)
}
