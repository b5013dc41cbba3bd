//! Geographic coordinate pairs.
//!
//! Itinerary documents carry coordinates as 2-element JSON arrays
//! `[lat, lng]`. Authors frequently omit or mangle them, so decoding is
//! lenient: anything that is not a 2-element array of finite numbers is
//! treated as "no geometry", never as an error and never as `(0, 0)`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A latitude/longitude pair in degrees.
///
/// Serializes as a 2-element array `[lat, lng]`. Equality is exact numeric
/// equality on both components; the schedule engine relies on this to
/// cross-reference stops that share a coordinate.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::LatLng;
///
/// let p = LatLng::new(40.7580, -73.9855);
/// assert_eq!(p.lat(), 40.7580);
/// assert_eq!(p.lng(), -73.9855);
/// assert_eq!(p, LatLng::new(40.7580, -73.9855));
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng(f64, f64);

impl LatLng {
    /// Create a coordinate pair from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self(lat, lng)
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.0
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.1
    }

    /// Interpret a JSON value as a coordinate pair.
    ///
    /// Returns `None` unless the value is an array of exactly two finite
    /// numbers. This is the single place that decides what counts as valid
    /// geometry.
    pub fn from_value(value: &Value) -> Option<Self> {
        let arr = value.as_array()?;
        if arr.len() != 2 {
            return None;
        }
        let lat = arr[0].as_f64()?;
        let lng = arr[1].as_f64()?;
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        Some(Self(lat, lng))
    }
}

impl fmt::Debug for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLng({}, {})", self.0, self.1)
    }
}

/// Deserialize an optional coordinate field leniently.
///
/// Malformed values (wrong length, non-numeric entries, nulls, objects)
/// become `None` rather than failing the whole document.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<LatLng>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(LatLng::from_value))
}

/// Deserialize an optional raw coordinate sequence leniently.
///
/// The sequence is used only when its first element is a valid pair;
/// otherwise the whole field counts as absent so that resolution can fall
/// through to the encoded or straight-line alternatives. Malformed entries
/// after a valid first element are dropped.
pub fn lenient_path<'de, D>(deserializer: D) -> Result<Option<Vec<LatLng>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(path_from_value))
}

fn path_from_value(value: &Value) -> Option<Vec<LatLng>> {
    let arr = value.as_array()?;
    LatLng::from_value(arr.first()?)?;
    Some(arr.iter().filter_map(LatLng::from_value).collect())
}
