use crate::models::{TripTable, WEEKDAYS};
use chrono::{Datelike, TimeDelta, Timelike, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;

/// Most frequent value of a column and how often it occurs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mode<K> {
    pub value: K,
    pub count: usize,
}

/// Count occurrences per distinct value, ordered by value.
pub fn value_counts<K: Ord, I: IntoIterator<Item = K>>(items: I) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_default() += 1;
    }
    counts
}

/// Most frequent value. Ties resolve to the smallest value; `None` for empty input.
pub fn mode<K: Ord, I: IntoIterator<Item = K>>(items: I) -> Option<Mode<K>> {
    let mut best: Option<Mode<K>> = None;
    for (value, count) in value_counts(items) {
        if best.as_ref().is_none_or(|b| count > b.count) {
            best = Some(Mode { value, count });
        }
    }
    best
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeStats {
    /// Calendar month number (`1..=12`).
    pub month: Mode<u32>,
    pub weekday: Mode<Weekday>,
    /// Hour of day, 24h clock.
    pub hour: Mode<u32>,
}

/// Most common start month, weekday and hour.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let starts = || table.trips.iter().map(|t| t.start_time);
    let month = mode(starts().map(|s| s.month()))?;
    let day = mode(starts().map(|s| s.weekday().num_days_from_monday()))?;
    let hour = mode(starts().map(|s| s.hour()))?;
    Some(TimeStats {
        month,
        weekday: Mode {
            value: WEEKDAYS[day.value as usize],
            count: day.count,
        },
        hour,
    })
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationStats {
    pub start: Mode<String>,
    pub end: Mode<String>,
    /// Most frequent (start, end) combination.
    pub trip: Mode<(String, String)>,
}

pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    let trips = &table.trips;
    let start = mode(trips.iter().map(|t| t.start_station.as_str()))?;
    let end = mode(trips.iter().map(|t| t.end_station.as_str()))?;
    let trip = mode(
        trips
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )?;
    Some(StationStats {
        start: Mode {
            value: start.value.to_string(),
            count: start.count,
        },
        end: Mode {
            value: end.value.to_string(),
            count: end.count,
        },
        trip: Mode {
            value: (trip.value.0.to_string(), trip.value.1.to_string()),
            count: trip.count,
        },
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Sum of `end_time - start_time`, skipping trips without an end time.
    pub total: TimeDelta,
    /// Mean of the `Trip Duration` column in seconds, skipping blanks.
    pub mean_secs: Option<f64>,
}

pub fn trip_duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }
    let total = table
        .trips
        .iter()
        .filter_map(|t| t.end_time.map(|end| end - t.start_time))
        .fold(TimeDelta::zero(), |acc, d| acc + d);
    let durations: Vec<f64> = table.trips.iter().filter_map(|t| t.trip_duration).collect();
    let mean_secs = if durations.is_empty() {
        None
    } else {
        Some(durations.iter().sum::<f64>() / durations.len() as f64)
    };
    Some(DurationStats { total, mean_secs })
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: Mode<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserStats {
    /// Trips per user type, sorted by label; blanks are counted as `Unknown`.
    pub user_types: Vec<(String, usize)>,
    /// `None` when the dataset has no `Gender` column.
    pub genders: Option<Vec<(String, usize)>>,
    /// Outer `None`: no `Birth Year` column. Inner `None`: column present but all blank.
    pub birth_years: Option<Option<BirthYearStats>>,
}

const UNKNOWN: &str = "Unknown";

fn label_counts<'a>(labels: impl Iterator<Item = Option<&'a str>>) -> Vec<(String, usize)> {
    value_counts(labels.map(|l| l.filter(|s| !s.is_empty()).unwrap_or(UNKNOWN)))
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

pub fn user_stats(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }
    let trips = &table.trips;
    let user_types = label_counts(trips.iter().map(|t| t.user_type.as_deref()));
    let genders = table
        .has_gender
        .then(|| label_counts(trips.iter().map(|t| t.gender.as_deref())));
    let birth_years = table.has_birth_year.then(|| {
        let years: Vec<i32> = trips
            .iter()
            .filter_map(|t| t.birth_year)
            .map(|y| y.round() as i32)
            .collect();
        let earliest = *years.iter().min()?;
        let most_recent = *years.iter().max()?;
        let most_common = mode(years)?;
        Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        })
    });
    Some(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_prefers_smallest_value_on_ties() {
        let m = mode(["b", "a", "b", "a", "c"]).unwrap();
        assert_eq!(m, Mode { value: "a", count: 2 });
        assert!(mode(Vec::<u32>::new()).is_none());
    }

    #[test]
    fn label_counts_fill_blanks_with_unknown() {
        let got = label_counts([Some("Subscriber"), None, Some(""), Some("Customer")].into_iter());
        assert_eq!(
            got,
            vec![
                ("Customer".to_string(), 1),
                ("Subscriber".to_string(), 1),
                ("Unknown".to_string(), 2),
            ]
        );
    }
}
