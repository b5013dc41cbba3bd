//! Schedule propagation.
//!
//! A single known timestamp (the flight landing) is cascaded through the
//! chain that follows it: airport, then the transfer that leaves it, then
//! the stop the transfer arrives at. The pass is intentionally single-chain
//! and single-pass; this is not general constraint propagation, and only
//! the first airport stop in the itinerary triggers it.

use chrono::Duration;
use tracing::debug;

use crate::domain::{Day, Itinerary, StopKind, WallTime};

use super::anchor::Anchor;
use super::durations::Durations;

/// Cascade computed arrival/departure times through the itinerary in place.
///
/// With no anchor this is a no-op: computed fields stay absent and the
/// presentation layer shows placeholders. With an anchor, the first
/// airport-type stop (days in order, stops in order) receives the landing
/// time, and times flow forward from there:
///
/// 1. airport: arrival = landing, departure = landing + baggage claim;
/// 2. the positionally next stop, when it is a transfer carrying
///    `drive_minutes`: departure = airport departure, arrival = departure +
///    drive;
/// 3. the first stop in the same day whose coordinates exactly equal the
///    transfer's destination: arrival = transfer arrival, departure =
///    arrival + hotel check-in.
///
/// Only one chain is resolved per run; further airport stops are ignored.
/// Re-running with identical inputs rewrites identical values, so repeated
/// propagation never compounds.
pub fn propagate(itinerary: &mut Itinerary, anchor: Option<Anchor>, durations: &Durations) {
    let Some(anchor) = anchor else {
        debug!("no landing anchor; schedule propagation skipped");
        return;
    };

    for day in &mut itinerary.days {
        if let Some(airport_idx) = day
            .stops
            .iter()
            .position(|s| s.kind == StopKind::Airport)
        {
            propagate_chain(day, airport_idx, anchor.landing_time(), durations);
            return;
        }
    }

    debug!("no airport stop; schedule propagation skipped");
}

/// Walk the chain rooted at the airport stop at `airport_idx`.
///
/// Any overflow in the date arithmetic (absurd offsets) abandons the rest
/// of the chain rather than panicking.
fn propagate_chain(day: &mut Day, airport_idx: usize, landing: WallTime, durations: &Durations) {
    let Some(airport_departure) = landing.checked_add(durations.baggage_claim()) else {
        return;
    };

    let airport = &mut day.stops[airport_idx];
    airport.computed.arrival_time = Some(landing.hhmm());
    airport.computed.departure_time = Some(airport_departure.hhmm());

    // The chain continues only through the positionally next stop, and only
    // when it is a transfer that knows its drive time.
    let transfer_idx = airport_idx + 1;
    let Some(transfer) = day.stops.get(transfer_idx) else {
        return;
    };
    if transfer.kind != StopKind::Transfer {
        return;
    }
    let Some(drive_minutes) = transfer.computed.drive_minutes else {
        return;
    };
    let Some(transfer_arrival) = airport_departure.checked_add(Duration::minutes(drive_minutes))
    else {
        return;
    };

    let destination = day.stops[transfer_idx].to_coords;
    let transfer = &mut day.stops[transfer_idx];
    transfer.computed.departure_time = Some(airport_departure.hhmm());
    transfer.computed.arrival_time = Some(transfer_arrival.hhmm());

    // Cross-reference the transfer's destination by exact coordinate
    // equality. First match wins; stops already written this run keep
    // their higher-priority times.
    let Some(destination) = destination else {
        return;
    };
    let Some(match_idx) = day
        .stops
        .iter()
        .position(|s| s.coords == Some(destination))
    else {
        return;
    };
    if match_idx == airport_idx || match_idx == transfer_idx {
        return;
    }
    let Some(checkin_done) = transfer_arrival.checked_add(durations.hotel_checkin()) else {
        return;
    };

    let stop = &mut day.stops[match_idx];
    stop.computed.arrival_time = Some(transfer_arrival.hhmm());
    stop.computed.departure_time = Some(checkin_done.hhmm());
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::ItineraryDoc;
    use proptest::prelude::*;

    fn arrival_day(drive_minutes: i64) -> Itinerary {
        let json = format!(
            r#"{{
                "days": [{{
                    "stops": [
                        {{"name": "JFK", "type": "airport", "coords": [40.6413, -73.7781]}},
                        {{
                            "name": "Shuttle",
                            "type": "transfer",
                            "to_coords": [40.7580, -73.9855],
                            "computed": {{"drive_minutes": {drive_minutes}}}
                        }},
                        {{"name": "Hotel", "type": "hotel", "coords": [40.7580, -73.9855]}}
                    ]
                }}]
            }}"#
        );
        serde_json::from_str::<ItineraryDoc>(&json)
            .unwrap()
            .validate()
            .unwrap()
    }

    proptest! {
        /// Propagation is idempotent for any anchor minute and offsets.
        #[test]
        fn idempotent_for_any_inputs(
            hour in 0u32..24,
            minute in 0u32..60,
            drive in 0i64..600,
            baggage in 0i64..600,
            checkin in 0i64..600,
        ) {
            let time = format!("{:02}:{:02}", hour, minute);
            let anchor = Anchor::resolve(Some("2025-06-01"), Some(&time)).unwrap();
            let durations = Durations {
                baggage_claim_minutes: baggage,
                hotel_checkin_minutes: checkin,
            };

            let mut once = arrival_day(drive);
            propagate(&mut once, anchor, &durations);

            let mut twice = arrival_day(drive);
            propagate(&mut twice, anchor, &durations);
            propagate(&mut twice, anchor, &durations);

            for (a, b) in once.days[0].stops.iter().zip(&twice.days[0].stops) {
                prop_assert_eq!(&a.computed, &b.computed);
            }
        }

        /// The whole chain always lands on times derived from the anchor:
        /// airport arrival equals the anchor time verbatim.
        #[test]
        fn airport_arrival_is_the_anchor_time(
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let time = format!("{:02}:{:02}", hour, minute);
            let anchor = Anchor::resolve(Some("2025-06-01"), Some(&time)).unwrap();

            let mut itin = arrival_day(45);
            propagate(&mut itin, anchor, &Durations::default());

            prop_assert_eq!(
                itin.days[0].stops[0].computed.arrival_time.as_deref(),
                Some(time.as_str())
            );
        }
    }
}
