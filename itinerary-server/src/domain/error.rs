//! Domain error types.
//!
//! Structural errors are fatal to rendering and are surfaced as a single
//! top-level failure. They are deliberately distinct from per-item problems
//! (a malformed coordinate, an undecodable route), which are isolated and
//! skipped where they occur.

/// Structural errors in an itinerary document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ItineraryError {
    /// The document has no `days` array at all. Distinct from an empty
    /// itinerary: zero days is valid, absent days is not.
    #[error("itinerary document is missing its \"days\" array")]
    MissingDays,
}
