use chrono::{NaiveDateTime, Weekday};
use serde::Deserialize;
use std::fmt;

/// Timestamp layout used by the `Start Time` / `End Time` columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cities with a bundled trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case key used when prompting (e.g. `"new york city"`).
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's dataset, relative to the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&capwords(self.key()))
    }
}

/// Months covered by the datasets (first half of 2017).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar number in `1..=6`, comparable with `chrono::Datelike::month`.
    pub fn number(&self) -> u32 {
        *self as u32
    }

    pub fn key(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

/// Full English name for any calendar month number (`1..=12`).
pub fn month_name(number: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    number
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Weekdays in calendar order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Capitalize each whitespace-separated word (`"new york city"` -> `"New York City"`).
pub fn capwords(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The city/month/day triple chosen once per run. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    pub fn all(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }
}

/// One bike rental (one CSV row).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Trip {
    /// Unnamed leading index column of the source file.
    #[serde(rename = "", default)]
    pub id: Option<String>,
    #[serde(rename = "Start Time", deserialize_with = "timestamp::deserialize")]
    pub start_time: NaiveDateTime,
    /// Blank in a handful of rows; such trips are left out of the travel-time total.
    #[serde(rename = "End Time", deserialize_with = "timestamp::deserialize_opt")]
    pub end_time: Option<NaiveDateTime>,
    /// Seconds.
    #[serde(rename = "Trip Duration", default)]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// Loaded (and possibly filtered) trips plus which optional columns the source carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Serde helper: `NaiveDateTime` in [`TIMESTAMP_FORMAT`].
/// Fractional seconds (`.000`) are accepted on input.
mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, de};

    fn parse<E: de::Error>(s: &str) -> Result<NaiveDateTime, E> {
        let s = s.trim();
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
            .map_err(|e| E::custom(format!("invalid timestamp {s:?}: {e}")))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(&String::deserialize(deserializer)?)
    }

    /// Blank fields map to `None`.
    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.trim().is_empty() => parse(&s).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_files() {
        assert_eq!(City::NewYorkCity.key(), "new york city");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(Month::March.key(), "march");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn names() {
        assert_eq!(City::NewYorkCity.to_string(), "New York City");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(Month::June.number(), 6);
        assert_eq!(capwords("nO"), "No");
    }
}
