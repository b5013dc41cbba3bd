//! A single itinerary day.

use serde::Deserialize;

use super::segment::Segment;
use super::stop::Stop;

/// One day of the itinerary: an ordered list of stops and the travel
/// segments between them. Order is chronological and meaningful: the
/// schedule engine walks stops by position.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Day {
    /// Day number as authored in the document (1-based), if present.
    pub day: Option<u32>,
    /// Calendar date as authored ("YYYY-MM-DD"), if present.
    pub date: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub stay_summary: Option<String>,
    pub stops: Vec<Stop>,
    pub segments: Vec<Segment>,
}
