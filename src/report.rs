//! Console reporters: each one runs an aggregation from [`crate::stats`] and
//! prints the result, followed by its elapsed time and a separator line.

use crate::models::{TripTable, month_name, weekday_name};
use crate::stats;
use chrono::TimeDelta;
use num_format::{Locale, ToFormattedString};
use std::io::{self, Write};
use std::time::Instant;

pub const SEPARATOR_WIDTH: usize = 40;
pub const EMPTY_SELECTION: &str = "No trips match the selected filters.";

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn fmt_count(n: usize) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Render a duration the way a timedelta reads: `D days HH:MM:SS`.
pub fn fmt_timedelta(d: TimeDelta) -> String {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    let (days, rem) = (secs / 86_400, secs % 86_400);
    format!(
        "{sign}{days} days {:02}:{:02}:{:02}",
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

fn footer<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", separator())
}

/// Most frequent times of travel.
pub fn time_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    match stats::time_stats(table) {
        Some(s) => {
            writeln!(
                out,
                "Most common start month... {} ({} travels)",
                month_name(s.month.value),
                fmt_count(s.month.count)
            )?;
            writeln!(
                out,
                "Most common start day of week... {} ({} travels)",
                weekday_name(s.weekday.value),
                fmt_count(s.weekday.count)
            )?;
            writeln!(
                out,
                "Most common start hour (24h)... {}:00 ({} travels)",
                s.hour.value,
                fmt_count(s.hour.count)
            )?;
        }
        None => writeln!(out, "{EMPTY_SELECTION}")?,
    }

    footer(out, started)
}

/// Most popular stations and trip.
pub fn station_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    match stats::station_stats(table) {
        Some(s) => {
            writeln!(
                out,
                "Most commonly used Start Station... \"{}\" ({} trips)",
                s.start.value,
                fmt_count(s.start.count)
            )?;
            writeln!(
                out,
                "Most commonly used End Station... \"{}\" ({} trips)",
                s.end.value,
                fmt_count(s.end.count)
            )?;
            writeln!(
                out,
                "Most commonly used combination of start station and end station..."
            )?;
            writeln!(
                out,
                "\"{}\" -> \"{}\" ({} trips)",
                s.trip.value.0,
                s.trip.value.1,
                fmt_count(s.trip.count)
            )?;
        }
        None => writeln!(out, "{EMPTY_SELECTION}")?,
    }

    footer(out, started)
}

/// Total and average trip duration.
pub fn trip_duration_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    match stats::trip_duration_stats(table) {
        Some(s) => {
            writeln!(out, "Total travel time: {}", fmt_timedelta(s.total))?;
            match s.mean_secs {
                Some(mean) => writeln!(out, "Mean travel time: {mean:.1} secs")?,
                None => writeln!(out, "Mean travel time: NA")?,
            }
        }
        None => writeln!(out, "{EMPTY_SELECTION}")?,
    }

    footer(out, started)
}

fn counts_table<W: Write>(out: &mut W, title: &str, rows: &[(String, usize)]) -> io::Result<()> {
    writeln!(out, "\nCounts of {title}")?;
    let counts: Vec<String> = rows.iter().map(|(_, c)| fmt_count(*c)).collect();
    let label_w = rows
        .iter()
        .map(|(l, _)| l.chars().count())
        .chain(std::iter::once(title.len()))
        .max()
        .unwrap_or(0);
    let count_w = counts
        .iter()
        .map(String::len)
        .chain(std::iter::once("Counts".len()))
        .max()
        .unwrap_or(0);
    writeln!(out, "{title:>label_w$}  {:>count_w$}", "Counts")?;
    for ((label, _), count) in rows.iter().zip(&counts) {
        writeln!(out, "{label:>label_w$}  {count:>count_w$}")?;
    }
    Ok(())
}

/// User type, gender and birth-year statistics. Optional columns are skipped with a note.
pub fn user_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    match stats::user_stats(table) {
        Some(s) => {
            counts_table(out, "User Type", &s.user_types)?;

            match &s.genders {
                Some(rows) => counts_table(out, "Gender", rows)?,
                None => writeln!(
                    out,
                    "No gender in this dataset, skipping statistics on gender."
                )?,
            }

            match &s.birth_years {
                Some(Some(b)) => {
                    writeln!(out, "\nYear of birth stats...")?;
                    writeln!(out, "Earliest year: {}", b.earliest)?;
                    writeln!(out, "Most recent year: {}", b.most_recent)?;
                    writeln!(
                        out,
                        "Most common year: {} ({} trips)",
                        b.most_common.value,
                        fmt_count(b.most_common.count)
                    )?;
                }
                Some(None) => writeln!(
                    out,
                    "\nYear of birth stats...\nNo birth years recorded for the selected trips."
                )?,
                None => writeln!(
                    out,
                    "No Birth Year in this dataset, skipping statistics on Birth Year."
                )?,
            }
        }
        None => writeln!(out, "{EMPTY_SELECTION}")?,
    }

    footer(out, started)
}

/// Run all four reporters in order.
pub fn all<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    time_stats(out, table)?;
    station_stats(out, table)?;
    trip_duration_stats(out, table)?;
    user_stats(out, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timedelta_reads_like_days_and_clock() {
        assert_eq!(fmt_timedelta(TimeDelta::seconds(0)), "0 days 00:00:00");
        assert_eq!(
            fmt_timedelta(TimeDelta::seconds(2 * 86_400 + 3 * 3600 + 4 * 60 + 5)),
            "2 days 03:04:05"
        );
        assert_eq!(fmt_timedelta(TimeDelta::seconds(-61)), "-0 days 00:01:01");
    }

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(fmt_count(1_234_567), "1,234,567");
    }
}
