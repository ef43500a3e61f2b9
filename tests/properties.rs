use pluscode_rs::{
    compute_latitude_precision, compute_longitude_precision, decode, encode, is_full, is_valid,
    recover_nearest, shorten,
};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn code_length() -> impl Strategy<Value = usize> {
    prop_oneof![
        prop::sample::select(vec![2usize, 4, 6, 8]),
        10usize..=15,
    ]
}

proptest! {
    #[test]
    fn encoded_codes_are_full_and_decode_to_their_length(
        lat in -89.9f64..89.9,
        lng in -179.9f64..179.9,
        length in code_length(),
    ) {
        let code = encode(lat, lng, length).unwrap();
        prop_assert!(is_valid(&code));
        prop_assert!(is_full(&code));

        let area = decode(&code).unwrap();
        prop_assert_eq!(area.code_length(), length);
    }

    #[test]
    fn decoded_area_contains_the_location(
        lat in -89.9f64..89.9,
        lng in -179.9f64..179.9,
        length in code_length(),
    ) {
        let area = decode(&encode(lat, lng, length).unwrap()).unwrap();

        prop_assert!(area.latitude_lo() - EPSILON <= lat && lat < area.latitude_hi() + EPSILON);
        prop_assert!(area.longitude_lo() - EPSILON <= lng && lng < area.longitude_hi() + EPSILON);

        let height = area.latitude_hi() - area.latitude_lo();
        let width = area.longitude_hi() - area.longitude_lo();
        prop_assert!((height - compute_latitude_precision(length)).abs() < EPSILON);
        prop_assert!((width - compute_longitude_precision(length)).abs() < EPSILON);
    }

    #[test]
    fn center_encodes_back_to_the_same_code(
        lat in -89.9f64..89.9,
        lng in -179.9f64..179.9,
        length in code_length(),
    ) {
        let code = encode(lat, lng, length).unwrap();
        let (center_lat, center_lng) = decode(&code).unwrap().lat_lng();
        prop_assert_eq!(encode(center_lat, center_lng, length).unwrap(), code);
    }

    #[test]
    fn recover_inverts_shorten_near_the_reference(
        lat in -80.0f64..80.0,
        lng in -179.0f64..179.0,
        length in 10usize..=15,
        dlat in -0.01f64..0.01,
        dlng in -0.01f64..0.01,
    ) {
        let code = encode(lat, lng, length).unwrap();
        let (ref_lat, ref_lng) = (lat + dlat, lng + dlng);

        let short = shorten(&code, ref_lat, ref_lng).unwrap();
        prop_assert!(short.len() < code.len());
        prop_assert_eq!(recover_nearest(&short, ref_lat, ref_lng).unwrap(), code);
    }
}
