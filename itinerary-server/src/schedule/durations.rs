//! Duration configuration for schedule propagation.

use chrono::Duration;
use serde::Deserialize;

/// Fallback when the configuration omits the baggage-claim offset.
const DEFAULT_BAGGAGE_CLAIM_MINS: i64 = 120;

/// Fallback when the configuration omits the hotel check-in offset.
const DEFAULT_HOTEL_CHECKIN_MINS: i64 = 150;

/// Named minute offsets applied while cascading times from the landing
/// anchor. Immutable for the duration of one propagation run.
///
/// Configuration is never mandatory: a missing file or missing field falls
/// back to the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Durations {
    /// Minutes from landing until the traveller leaves the airport.
    pub baggage_claim_minutes: i64,

    /// Minutes from hotel arrival until the traveller is free again.
    pub hotel_checkin_minutes: i64,
}

impl Durations {
    /// Returns the baggage-claim offset as a Duration.
    pub fn baggage_claim(&self) -> Duration {
        Duration::minutes(self.baggage_claim_minutes)
    }

    /// Returns the hotel check-in offset as a Duration.
    pub fn hotel_checkin(&self) -> Duration {
        Duration::minutes(self.hotel_checkin_minutes)
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            baggage_claim_minutes: DEFAULT_BAGGAGE_CLAIM_MINS,
            hotel_checkin_minutes: DEFAULT_HOTEL_CHECKIN_MINS,
        }
    }
}
