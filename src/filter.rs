//! Row predicates for the month / day-of-week filters.

use crate::models::{Month, Trip, TripTable};
use chrono::{Datelike, Weekday};

/// True when the trip started in `month`.
pub fn matches_month(trip: &Trip, month: Month) -> bool {
    trip.start_time.month() == month.number()
}

/// True when the trip started on `day`.
pub fn matches_day(trip: &Trip, day: Weekday) -> bool {
    trip.start_time.weekday() == day
}

/// Build the combined predicate for the active filters.
///
/// Returns `None` when neither filter is active, so callers can skip the scan.
/// With both filters set the two conditions are joined with a logical AND.
pub fn predicate(
    month: Option<Month>,
    day: Option<Weekday>,
) -> Option<Box<dyn Fn(&Trip) -> bool>> {
    match (month, day) {
        (None, None) => None,
        (Some(m), None) => Some(Box::new(move |t: &Trip| matches_month(t, m))),
        (None, Some(d)) => Some(Box::new(move |t: &Trip| matches_day(t, d))),
        (Some(m), Some(d)) => Some(Box::new(move |t: &Trip| {
            matches_month(t, m) && matches_day(t, d)
        })),
    }
}

/// Keep only the trips matching the filters. Optional-column flags are carried over.
pub fn apply(table: TripTable, month: Option<Month>, day: Option<Weekday>) -> TripTable {
    match predicate(month, day) {
        None => table,
        Some(keep) => TripTable {
            trips: table.trips.into_iter().filter(|t| keep(t)).collect(),
            ..table
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;

    fn trip(start: &str) -> Trip {
        let ts = NaiveDateTime::parse_from_str(start, TIMESTAMP_FORMAT).unwrap();
        Trip {
            id: None,
            start_time: ts,
            end_time: Some(ts),
            trip_duration: Some(60.0),
            start_station: "A".into(),
            end_station: "B".into(),
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    fn table() -> TripTable {
        TripTable {
            trips: vec![
                trip("2017-03-06 08:00:00"), // Monday
                trip("2017-03-07 08:00:00"), // Tuesday
                trip("2017-04-03 08:00:00"), // Monday
                trip("2017-04-04 08:00:00"), // Tuesday
            ],
            has_gender: true,
            has_birth_year: false,
        }
    }

    #[test]
    fn no_filter_keeps_everything() {
        assert!(predicate(None, None).is_none());
        assert_eq!(apply(table(), None, None), table());
    }

    #[test]
    fn combined_filter_is_and_of_both() {
        let out = apply(table(), Some(Month::April), Some(Weekday::Mon));
        assert_eq!(out.len(), 1);
        assert_eq!(out.trips[0].start_time.to_string(), "2017-04-03 08:00:00");
        assert!(out.has_gender);
        assert!(!out.has_birth_year);
    }

    #[test]
    fn sequential_filters_equal_combined() {
        let by_month = apply(table(), Some(Month::March), None);
        let seq = apply(by_month, None, Some(Weekday::Tue));
        let combined = apply(table(), Some(Month::March), Some(Weekday::Tue));
        assert_eq!(seq, combined);
    }
}
