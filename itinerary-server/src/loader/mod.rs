//! Document loading: the itinerary specification and its sidecar
//! configuration files, from disk or over HTTP.

mod client;
mod error;

pub use client::{IconMap, ItinerarySource, Loader};
pub use error::LoadError;
