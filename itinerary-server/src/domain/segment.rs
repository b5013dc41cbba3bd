//! Travel segment types.
//!
//! A segment is a directed leg between two stops, carrying a transport mode
//! and optional route geometry. Segments are read-only to the core: geometry
//! resolution produces a new path, it never writes back into the segment.

use serde::{Deserialize, Serialize};

use super::coord::{self, LatLng};

/// Transport mode of a segment. Affects line styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Drive,
    Rail,
    Hike,
    Walk,
    #[serde(other)]
    Other,
}

/// One end of a segment: a display name and an optional coordinate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub name: Option<String>,
    #[serde(deserialize_with = "coord::lenient")]
    pub coords: Option<LatLng>,
}

/// A directed travel leg between two stops.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub from: Option<Endpoint>,
    pub to: Option<Endpoint>,
    pub mode: TravelMode,
    /// Raw route geometry as coordinate pairs. Only honoured when the first
    /// element is a valid pair; see `coord::lenient_path`.
    #[serde(deserialize_with = "coord::lenient_path")]
    pub polyline: Option<Vec<LatLng>>,
    /// Compact encoded route string, decoded on demand.
    pub encoded_polyline: Option<String>,
    pub summary: Option<String>,
    pub distance_text: Option<String>,
    pub duration_text: Option<String>,
}

impl Segment {
    /// Coordinate of the origin endpoint, if it has one.
    pub fn from_coords(&self) -> Option<LatLng> {
        self.from.as_ref()?.coords
    }

    /// Coordinate of the destination endpoint, if it has one.
    pub fn to_coords(&self) -> Option<LatLng> {
        self.to.as_ref()?.coords
    }
}
