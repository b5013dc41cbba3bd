//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Day, Itinerary, LatLng, Segment, Stop, StopKind, TravelMode};
use crate::geometry::{self, ResolvedPath};
use crate::schedule::Anchor;

/// Query parameters for the itinerary endpoint. Both parts optional; a
/// partial anchor falls back to the document's own defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ItineraryRequest {
    pub landing_date: Option<String>,
    pub landing_time: Option<String>,
}

/// The computed itinerary as served to the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryView {
    pub date_anchor: Option<String>,

    pub start_date: Option<String>,

    /// The anchor the schedule was computed from, echoed back so the
    /// landing form can show what is in effect. Absent when no anchor
    /// could be resolved (placeholder times throughout).
    pub landing_date: Option<String>,
    pub landing_time: Option<String>,

    pub days: Vec<DayView>,
}

/// One itinerary day.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub day: Option<u32>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub stay_summary: Option<String>,
    pub stops: Vec<StopView>,
    pub segments: Vec<SegmentView>,
}

/// A stop with its computed schedule fields.
#[derive(Debug, Clone, Serialize)]
pub struct StopView {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StopKind,
    pub subtype: Option<String>,
    pub coords: Option<LatLng>,
    pub from_coords: Option<LatLng>,
    pub to_coords: Option<LatLng>,
    /// Where to place the marker: `coords`, else origin, else destination.
    pub marker_coords: Option<LatLng>,
    pub description: Option<String>,
    pub stay_duration_min: Option<i64>,
    pub parking: Option<String>,
    pub price_estimate: Option<String>,
    pub computed: ComputedView,
}

/// Computed schedule fields: "HH:MM" strings, or null before propagation.
#[derive(Debug, Clone, Serialize)]
pub struct ComputedView {
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub drive_minutes: Option<i64>,
}

/// A segment with its resolved drawable path.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentView {
    pub mode: TravelMode,
    pub from_name: Option<String>,
    pub to_name: Option<String>,
    pub summary: Option<String>,
    pub distance_text: Option<String>,
    pub duration_text: Option<String>,
    /// Ordered coordinates to draw.
    pub points: Vec<LatLng>,
    /// True when the path is a straight-line fallback; the frontend dashes
    /// these so approximated routes are visually distinct.
    pub approximated: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Conversion implementations

impl ItineraryView {
    /// Build the view over an already-propagated itinerary.
    ///
    /// `anchor` is the anchor propagation ran with (if any); it is echoed
    /// into the view for the landing form.
    pub fn from_itinerary(itinerary: &Itinerary, anchor: Option<Anchor>) -> Self {
        let landing = anchor.map(|a| a.landing_time());

        Self {
            date_anchor: itinerary.date_anchor.clone(),
            start_date: itinerary.start_date.clone(),
            landing_date: landing.map(|t| t.date().to_string()),
            landing_time: landing.map(|t| t.hhmm()),
            days: itinerary.days.iter().map(DayView::from_day).collect(),
        }
    }
}

impl DayView {
    /// Build the view for one day, resolving segment geometry.
    ///
    /// A segment that cannot be resolved is skipped with a warning; one bad
    /// record never aborts the rest of the day.
    pub fn from_day(day: &Day) -> Self {
        let stops = day.stops.iter().map(StopView::from_stop).collect();

        let segments = day
            .segments
            .iter()
            .enumerate()
            .filter_map(|(index, segment)| match geometry::resolve(segment) {
                Ok(path) => Some(SegmentView::from_segment(segment, path)),
                Err(e) => {
                    warn!(segment = index, day = ?day.day, "skipping segment: {e}");
                    None
                }
            })
            .collect();

        Self {
            day: day.day,
            date: day.date.clone(),
            title: day.title.clone(),
            summary: day.summary.clone(),
            stay_summary: day.stay_summary.clone(),
            stops,
            segments,
        }
    }
}

impl StopView {
    /// Create from a domain Stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.clone(),
            name: stop.name.clone(),
            kind: stop.kind,
            subtype: stop.subtype.clone(),
            coords: stop.coords,
            from_coords: stop.from_coords,
            to_coords: stop.to_coords,
            marker_coords: stop.marker_coords(),
            description: stop.description.clone(),
            stay_duration_min: stop.stay_duration_min,
            parking: stop.parking.clone(),
            price_estimate: stop.price_estimate.clone(),
            computed: ComputedView {
                arrival_time: stop.computed.arrival_time.clone(),
                departure_time: stop.computed.departure_time.clone(),
                drive_minutes: stop.computed.drive_minutes,
            },
        }
    }
}

impl SegmentView {
    /// Create from a domain Segment and its resolved path.
    pub fn from_segment(segment: &Segment, path: ResolvedPath) -> Self {
        Self {
            mode: segment.mode,
            from_name: segment.from.as_ref().and_then(|e| e.name.clone()),
            to_name: segment.to.as_ref().and_then(|e| e.name.clone()),
            summary: segment.summary.clone(),
            distance_text: segment.distance_text.clone(),
            duration_text: segment.duration_text.clone(),
            points: path.points,
            approximated: path.approximated,
        }
    }
}
