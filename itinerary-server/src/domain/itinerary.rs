//! The itinerary root entity.
//!
//! The wire form (`ItineraryDoc`) tolerates a missing `days` array so that
//! the absence can be reported as a distinct structural error instead of a
//! generic parse failure. The validated `Itinerary` guarantees the array is
//! present; everything downstream works with that.

use serde::Deserialize;

use super::day::Day;
use super::error::ItineraryError;

/// The landing anchor as authored in the document: the flight arrival from
/// which day-one times are derived.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Landing {
    pub arrival_date: Option<String>,
    pub arrival_time: Option<String>,
}

/// An itinerary document as parsed from JSON, before structural validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItineraryDoc {
    pub days: Option<Vec<Day>>,
    pub start_date: Option<String>,
    pub landing: Option<Landing>,
    pub date_anchor: Option<String>,
}

impl ItineraryDoc {
    /// Validate the document into a usable itinerary.
    ///
    /// # Errors
    ///
    /// Returns [`ItineraryError::MissingDays`] when the `days` array is
    /// absent. An empty array passes: zero days renders as an empty view,
    /// not an error.
    pub fn validate(self) -> Result<Itinerary, ItineraryError> {
        let days = self.days.ok_or(ItineraryError::MissingDays)?;
        Ok(Itinerary {
            days,
            start_date: self.start_date,
            landing: self.landing,
            date_anchor: self.date_anchor,
        })
    }
}

/// A structurally valid itinerary.
///
/// Owns all of its days exclusively. The schedule engine mutates stops in
/// place; callers that re-run propagation clone a pristine copy first so
/// that recomputation never compounds.
#[derive(Debug, Clone)]
pub struct Itinerary {
    pub days: Vec<Day>,
    pub start_date: Option<String>,
    pub landing: Option<Landing>,
    pub date_anchor: Option<String>,
}

impl Itinerary {
    /// The document's default landing date: `start_date` if present, else
    /// the first day's date.
    pub fn default_landing_date(&self) -> Option<&str> {
        self.start_date
            .as_deref()
            .or_else(|| self.days.first().and_then(|d| d.date.as_deref()))
    }

    /// The document's default landing time, from the `landing` record.
    pub fn default_landing_time(&self) -> Option<&str> {
        self.landing.as_ref()?.arrival_time.as_deref()
    }
}
