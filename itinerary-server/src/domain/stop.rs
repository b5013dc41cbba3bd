//! Itinerary stop types.

use serde::{Deserialize, Serialize};

use super::coord::{self, LatLng};

/// The kind of a stop.
///
/// The schedule engine gives special treatment to `Airport` and `Transfer`;
/// everything else only affects presentation (icons, line styling). Unknown
/// kinds in the document map to `Other` rather than failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    Airport,
    Transfer,
    Train,
    TravelDay,
    Hotel,
    Activity,
    #[default]
    #[serde(other)]
    Other,
}

/// Schedule fields attached to a stop.
///
/// `arrival_time` and `departure_time` are written by the schedule engine
/// ("HH:MM", absent until propagation runs). `drive_minutes` travels the
/// other way: itinerary documents supply it on transfer stops as the input
/// to the cascade.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Computed {
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub drive_minutes: Option<i64>,
}

/// A discrete itinerary item: airport, hotel, activity, transfer and so on.
///
/// Every field is optional in the document; a stop with no usable
/// coordinates simply gets no marker. Stops are mutated in place by the
/// schedule engine and never removed during a run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stop {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StopKind,
    pub subtype: Option<String>,
    #[serde(deserialize_with = "coord::lenient")]
    pub coords: Option<LatLng>,
    #[serde(deserialize_with = "coord::lenient")]
    pub from_coords: Option<LatLng>,
    #[serde(deserialize_with = "coord::lenient")]
    pub to_coords: Option<LatLng>,
    pub description: Option<String>,
    pub stay_duration_min: Option<i64>,
    pub parking: Option<String>,
    pub price_estimate: Option<String>,
    pub computed: Computed,
}

impl Stop {
    /// The coordinate to place this stop's marker at.
    ///
    /// Stops that represent a transition (transfers, travel days) may only
    /// carry endpoint coordinates, in which case the origin stands in.
    pub fn marker_coords(&self) -> Option<LatLng> {
        self.coords.or(self.from_coords).or(self.to_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_known_and_unknown() {
        let s: Stop = serde_json::from_str(r#"{"name": "JFK", "type": "airport"}"#).unwrap();
        assert_eq!(s.kind, StopKind::Airport);

        let s: Stop = serde_json::from_str(r#"{"name": "?", "type": "spacewalk"}"#).unwrap();
        assert_eq!(s.kind, StopKind::Other);

        let s: Stop = serde_json::from_str(r#"{"name": "untyped"}"#).unwrap();
        assert_eq!(s.kind, StopKind::Other);
    }

    #[test]
    fn travel_day_uses_snake_case() {
        let s: Stop = serde_json::from_str(r#"{"type": "travel_day"}"#).unwrap();
        assert_eq!(s.kind, StopKind::TravelDay);
    }

    #[test]
    fn malformed_coords_become_no_geometry() {
        let s: Stop =
            serde_json::from_str(r#"{"name": "Hotel", "type": "hotel", "coords": "40,-73"}"#)
                .unwrap();
        assert_eq!(s.coords, None);

        let s: Stop = serde_json::from_str(r#"{"coords": [40.0]}"#).unwrap();
        assert_eq!(s.coords, None);
    }

    #[test]
    fn marker_coords_falls_back_to_endpoints() {
        let s: Stop = serde_json::from_str(
            r#"{"type": "transfer", "from_coords": [1.0, 2.0], "to_coords": [3.0, 4.0]}"#,
        )
        .unwrap();
        assert_eq!(s.marker_coords(), Some(LatLng::new(1.0, 2.0)));

        let s: Stop = serde_json::from_str(r#"{"to_coords": [3.0, 4.0]}"#).unwrap();
        assert_eq!(s.marker_coords(), Some(LatLng::new(3.0, 4.0)));

        let s: Stop = serde_json::from_str(r#"{"name": "no geometry"}"#).unwrap();
        assert_eq!(s.marker_coords(), None);
    }

    #[test]
    fn drive_minutes_arrives_inside_computed() {
        let s: Stop = serde_json::from_str(
            r#"{"type": "transfer", "computed": {"drive_minutes": 45}}"#,
        )
        .unwrap();
        assert_eq!(s.computed.drive_minutes, Some(45));
        assert_eq!(s.computed.arrival_time, None);
        assert_eq!(s.computed.departure_time, None);
    }
}
