//! Wall-clock time handling for itinerary schedules.
//!
//! Itinerary documents and computed schedule fields carry times as "HH:MM"
//! strings. This module provides a date-aware wrapper so that adding duration
//! offsets (baggage claim, drives, hotel check-in) rolls over midnight
//! correctly instead of wrapping within a single day.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A date-aware "HH:MM" time.
///
/// Schedule propagation chains duration offsets onto a single anchor
/// timestamp. A late landing plus a baggage delay can cross midnight, so the
/// date has to travel with the time; two stops at "00:30" may be on
/// different days.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::WallTime;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let t = WallTime::parse_hhmm("14:30", date).unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallTime {
    date: NaiveDate,
    time: NaiveTime,
}

impl WallTime {
    /// Create a time from date and time components.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse a time from "HH:MM" format with a given base date.
    ///
    /// The input must be exactly five characters with a colon at position 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::domain::WallTime;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// assert!(WallTime::parse_hhmm("00:00", date).is_ok());
    /// assert!(WallTime::parse_hhmm("23:59", date).is_ok());
    /// assert!(WallTime::parse_hhmm("1430", date).is_err());
    /// assert!(WallTime::parse_hhmm("25:00", date).is_err());
    /// ```
    pub fn parse_hhmm(s: &str, date: NaiveDate) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { date, time })
    }

    /// Returns the date component.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> chrono::NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Add a duration, advancing the date across midnight when needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::domain::WallTime;
    /// use chrono::{Duration, NaiveDate};
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let landing = WallTime::parse_hhmm("23:30", date).unwrap();
    ///
    /// let kerbside = landing.checked_add(Duration::minutes(120)).unwrap();
    /// assert_eq!(kerbside.to_string(), "01:30");
    /// assert_eq!(kerbside.date(), NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    /// ```
    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        let dt = self.to_datetime().checked_add_signed(duration)?;
        Some(Self {
            date: dt.date(),
            time: dt.time(),
        })
    }

    /// Subtract a duration from this time.
    pub fn checked_sub(&self, duration: Duration) -> Option<Self> {
        let dt = self.to_datetime().checked_sub_signed(duration)?;
        Some(Self {
            date: dt.date(),
            time: dt.time(),
        })
    }

    /// Returns the duration between two times.
    ///
    /// Negative if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.to_datetime()
            .signed_duration_since(other.to_datetime())
    }

    /// The "HH:MM" rendering used for computed schedule fields.
    pub fn hhmm(&self) -> String {
        self.to_string()
    }
}

impl Ord for WallTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_datetime().cmp(&other.to_datetime())
    }
}

impl PartialOrd for WallTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WallTime({} {:02}:{:02})",
            self.date,
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
