//! Travel itinerary map server.
//!
//! A web application that renders a travel itinerary (stops, days, travel
//! segments) onto an interactive map and sidebar, resolving missing or
//! partial route geometry and cascading arrival/departure times through
//! day one from a single anchor event: the flight landing.

pub mod cache;
pub mod domain;
pub mod geometry;
pub mod loader;
pub mod schedule;
pub mod web;
