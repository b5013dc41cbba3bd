//! The landing anchor.
//!
//! An itinerary is anchored by a single real-world event: the flight
//! landing. The anchor is all-or-nothing: a date without a time (or the
//! reverse) counts as no anchor at all, and propagation is skipped.

use chrono::NaiveDate;

use crate::domain::{Itinerary, WallTime};

/// Error returned when a supplied anchor component does not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnchorError {
    #[error("invalid anchor date: {0:?}")]
    InvalidDate(String),

    #[error("invalid anchor time: {0:?}")]
    InvalidTime(String),
}

/// The fully resolved landing timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    landing: WallTime,
}

impl Anchor {
    /// Create an anchor directly from a landing time.
    pub fn new(landing: WallTime) -> Self {
        Self { landing }
    }

    /// Resolve an anchor from optional date ("YYYY-MM-DD") and time
    /// ("HH:MM") strings.
    ///
    /// Both parts absent, either part absent, or either part empty yields
    /// `Ok(None)`; a partial anchor is treated as absent, not as an error.
    /// A part that is present but unparseable is an error: it came from
    /// user input and deserves a complaint rather than silence.
    pub fn resolve(
        date: Option<&str>,
        time: Option<&str>,
    ) -> Result<Option<Self>, AnchorError> {
        let (Some(date_str), Some(time_str)) = (date, time) else {
            return Ok(None);
        };
        if date_str.is_empty() || time_str.is_empty() {
            return Ok(None);
        }

        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| AnchorError::InvalidDate(date_str.to_string()))?;
        let landing = WallTime::parse_hhmm(time_str, date)
            .map_err(|_| AnchorError::InvalidTime(time_str.to_string()))?;

        Ok(Some(Self { landing }))
    }

    /// Resolve an anchor for an itinerary, letting explicit values override
    /// the document's own defaults (`start_date` / first day / `landing`).
    pub fn for_itinerary(
        itinerary: &Itinerary,
        date: Option<&str>,
        time: Option<&str>,
    ) -> Result<Option<Self>, AnchorError> {
        let date = date
            .filter(|s| !s.is_empty())
            .or_else(|| itinerary.default_landing_date());
        let time = time
            .filter(|s| !s.is_empty())
            .or_else(|| itinerary.default_landing_time());
        Self::resolve(date, time)
    }

    /// The landing timestamp.
    pub fn landing_time(&self) -> WallTime {
        self.landing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItineraryDoc;

    #[test]
    fn full_anchor_resolves() {
        let anchor = Anchor::resolve(Some("2025-06-01"), Some("14:30"))
            .unwrap()
            .unwrap();
        assert_eq!(anchor.landing_time().hhmm(), "14:30");
        assert_eq!(
            anchor.landing_time().date(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn partial_anchor_is_absent() {
        assert_eq!(Anchor::resolve(Some("2025-06-01"), None).unwrap(), None);
        assert_eq!(Anchor::resolve(None, Some("14:30")).unwrap(), None);
        assert_eq!(Anchor::resolve(None, None).unwrap(), None);
        assert_eq!(Anchor::resolve(Some(""), Some("14:30")).unwrap(), None);
        assert_eq!(Anchor::resolve(Some("2025-06-01"), Some("")).unwrap(), None);
    }

    #[test]
    fn malformed_parts_are_errors() {
        assert!(matches!(
            Anchor::resolve(Some("June 1st"), Some("14:30")),
            Err(AnchorError::InvalidDate(_))
        ));
        assert!(matches!(
            Anchor::resolve(Some("2025-06-01"), Some("2pm")),
            Err(AnchorError::InvalidTime(_))
        ));
    }

    #[test]
    fn itinerary_defaults_fill_missing_parts() {
        let itin: Itinerary = serde_json::from_str::<ItineraryDoc>(
            r#"{
                "days": [{"date": "2025-06-01"}],
                "landing": {"arrival_time": "14:30"}
            }"#,
        )
        .unwrap()
        .validate()
        .unwrap();

        let anchor = Anchor::for_itinerary(&itin, None, None).unwrap().unwrap();
        assert_eq!(anchor.landing_time().hhmm(), "14:30");

        // Explicit values win over the document
        let anchor = Anchor::for_itinerary(&itin, Some("2025-07-04"), Some("09:15"))
            .unwrap()
            .unwrap();
        assert_eq!(anchor.landing_time().hhmm(), "09:15");
        assert_eq!(
            anchor.landing_time().date(),
            NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
        );
    }

    #[test]
    fn no_defaults_means_no_anchor() {
        let itin: Itinerary = serde_json::from_str::<ItineraryDoc>(r#"{"days": []}"#)
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(Anchor::for_itinerary(&itin, None, None).unwrap(), None);
    }
}
