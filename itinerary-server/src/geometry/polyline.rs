//! Encoded route string decoding.
//!
//! Route geometry arrives as a compact encoded string: each coordinate is a
//! pair of signed deltas from the previous point, zig-zag encoded, split
//! into 5-bit groups, each group offset by 63 with a continuation bit in the
//! high bit. Values are degrees scaled by 1e5.
//!
//! Decoding is best-effort geometry, never itinerary-fatal: empty input
//! yields an empty sequence, and a truncated continuation run at the tail
//! yields no further point. The decoder never reads past the end of the
//! input and never panics.

use crate::domain::LatLng;

/// Precision scale: raw integers are degrees × 100000.
const SCALE: f64 = 1e5;

/// Decode an encoded route string into an ordered coordinate sequence.
///
/// # Examples
///
/// ```
/// use itinerary_server::geometry::polyline;
///
/// assert!(polyline::decode("").is_empty());
///
/// let points = polyline::decode("_p~iF~ps|U");
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].lat(), 38.5);
/// assert_eq!(points[0].lng(), -120.2);
/// ```
pub fn decode(encoded: &str) -> Vec<LatLng> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut points = Vec::new();

    while index < bytes.len() {
        // A point is appended only once both deltas decode; a tail that
        // runs out mid-pair contributes nothing.
        let Some(dlat) = next_delta(bytes, &mut index) else {
            break;
        };
        let Some(dlng) = next_delta(bytes, &mut index) else {
            break;
        };
        lat = lat.wrapping_add(dlat);
        lng = lng.wrapping_add(dlng);
        points.push(LatLng::new(lat as f64 / SCALE, lng as f64 / SCALE));
    }

    points
}

/// Decode one zig-zag varint delta, advancing `index` past its bytes.
///
/// Returns `None` when the input ends inside a continuation run.
fn next_delta(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut shift = 0u32;
    let mut accum = 0u64;

    loop {
        let byte = *bytes.get(*index)?;
        *index += 1;

        let group = byte.wrapping_sub(63) as u64;
        if shift < 64 {
            accum |= (group & 0x1f) << shift;
        }
        shift = shift.saturating_add(5);

        if group < 0x20 {
            break;
        }
    }

    Some(if accum & 1 != 0 {
        !(accum >> 1) as i64
    } else {
        (accum >> 1) as i64
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Decoding arbitrary input never panics, including non-ASCII bytes
        /// and hostile continuation runs.
        #[test]
        fn decode_never_panics(input in ".*") {
            let _ = decode(&input);
        }

        /// Every decoded point consumes at least two input bytes.
        #[test]
        fn output_bounded_by_input(input in ".*") {
            let points = decode(&input);
            prop_assert!(points.len() * 2 <= input.len());
        }

        /// All decoded coordinates are finite (the scale divide cannot
        /// produce NaN or infinity from integer deltas).
        #[test]
        fn decoded_points_are_finite(input in ".*") {
            for p in decode(&input) {
                prop_assert!(p.lat().is_finite());
                prop_assert!(p.lng().is_finite());
            }
        }
    }
}
