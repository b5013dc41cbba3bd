//! Domain types for the itinerary map server.
//!
//! This module contains the data model for itinerary documents. Parsing is
//! deliberately forgiving at the item level (a malformed coordinate becomes
//! "no geometry", an unknown stop type becomes `Other`) and strict at the
//! structural level (a document without a `days` array is rejected with a
//! distinct error).

mod coord;
mod day;
mod error;
mod itinerary;
mod segment;
mod stop;
mod time;

pub use coord::LatLng;
pub use day::Day;
pub use error::ItineraryError;
pub use itinerary::{Itinerary, ItineraryDoc, Landing};
pub use segment::{Endpoint, Segment, TravelMode};
pub use stop::{Computed, Stop, StopKind};
pub use time::{TimeError, WallTime};
