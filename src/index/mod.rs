pub mod constants;
mod decode;
mod encode;
mod precision;
mod shorten;
mod validate;

pub use constants::{
    CODE_ALPHABET, DEFAULT_CODE_LENGTH, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT,
    MIN_DIGIT_COUNT, MIN_TRIMMABLE_CODE_LEN, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR,
    SEPARATOR_POSITION,
};
pub use decode::decode;
pub use encode::{encode, encode_integers, location_to_integers};
pub use precision::{compute_latitude_precision, compute_longitude_precision};
pub use shorten::{recover_nearest, shorten};
pub use validate::{is_full, is_short, is_valid};
