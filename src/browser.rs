//! Paginated dump of the filtered trips.

use crate::error::Result;
use crate::models::{TIMESTAMP_FORMAT, Trip, TripTable};
use crate::prompt::{Console, YES_NO};
use std::io::{BufRead, Write};

pub const PAGE_SIZE: usize = 5;

fn fmt_opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "NA".to_string())
}

/// Labelled `field value` lines for one trip; optional columns only if the dataset has them.
pub fn trip_fields(trip: &Trip, table: &TripTable) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("ID", fmt_opt(trip.id.as_deref())),
        ("Start Time", trip.start_time.format(TIMESTAMP_FORMAT).to_string()),
        (
            "End Time",
            fmt_opt(trip.end_time.map(|t| t.format(TIMESTAMP_FORMAT))),
        ),
        ("Trip Duration", fmt_opt(trip.trip_duration)),
        ("Start Station", trip.start_station.clone()),
        ("End Station", trip.end_station.clone()),
        ("User Type", fmt_opt(trip.user_type.as_deref())),
    ];
    if table.has_gender {
        fields.push(("Gender", fmt_opt(trip.gender.as_deref())));
    }
    if table.has_birth_year {
        fields.push(("Birth Year", fmt_opt(trip.birth_year)));
    }
    fields
}

fn print_trip<W: Write>(out: &mut W, trip: &Trip, table: &TripTable) -> std::io::Result<()> {
    let fields = trip_fields(trip, table);
    let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (k, v) in fields {
        writeln!(out, "{k:<width$}    {v}")?;
    }
    writeln!(out)
}

/// Offer to show the trips `PAGE_SIZE` at a time.
///
/// Stops when the user answers "no" or every row has been shown. Returns the
/// number of rows printed.
pub fn raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<usize> {
    let answer = console.get_input("Do you want to see the first 5 raw items?", &YES_NO)?;
    if answer == "no" {
        return Ok(0);
    }

    let mut shown = 0;
    for page in table.trips.chunks(PAGE_SIZE) {
        for trip in page {
            print_trip(console.output(), trip, table)?;
        }
        shown += page.len();
        if shown >= table.len() {
            break;
        }
        let answer = console.get_input("Do you want to see the next 5 raw items?", &YES_NO)?;
        if answer == "no" {
            break;
        }
    }
    Ok(shown)
}
