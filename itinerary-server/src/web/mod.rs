//! Web layer for the itinerary map server.
//!
//! Serves the map page, the computed itinerary JSON, and the icon
//! configuration. Contains no algorithmic behaviour of its own: handlers
//! delegate to the schedule engine and geometry resolver and shape their
//! output into DTOs.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
