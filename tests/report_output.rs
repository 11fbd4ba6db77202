use bikeshare_rs::models::{TIMESTAMP_FORMAT, Trip, TripTable};
use bikeshare_rs::report;
use chrono::NaiveDateTime;

fn washington() -> TripTable {
    let ts = |s: &str| NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap();
    TripTable {
        trips: vec![Trip {
            id: Some("1621326".into()),
            start_time: ts("2017-06-21 08:36:34"),
            end_time: Some(ts("2017-06-21 08:44:43")),
            trip_duration: Some(489.066),
            start_station: "14th & Belmont St NW".into(),
            end_station: "15th & K St NW".into(),
            user_type: Some("Subscriber".into()),
            gender: None,
            birth_year: None,
        }],
        has_gender: false,
        has_birth_year: false,
    }
}

fn render(table: &TripTable) -> String {
    let mut out = Vec::new();
    report::all(&mut out, table).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn dataset_without_gender_prints_skip_messages() {
    let out = render(&washington());
    assert!(out.contains("No gender in this dataset, skipping statistics on gender."));
    assert!(out.contains("No Birth Year in this dataset, skipping statistics on Birth Year."));
    assert!(out.contains("Counts of User Type"));
    assert!(out.contains("Subscriber"));
}

#[test]
fn every_section_is_printed_with_footer() {
    let out = render(&washington());
    assert!(out.contains("Most common start month... June (1 travels)"));
    assert!(out.contains("Most common start day of week... Wednesday (1 travels)"));
    assert!(out.contains("Most common start hour (24h)... 8:00 (1 travels)"));
    assert!(out.contains("\"14th & Belmont St NW\" -> \"15th & K St NW\" (1 trips)"));
    assert!(out.contains("Total travel time: 0 days 00:08:09"));
    assert!(out.contains("Mean travel time: 489.1 secs"));
    assert_eq!(out.matches("This took ").count(), 4);
    assert_eq!(out.matches(&report::separator()).count(), 4);
}

#[test]
fn empty_selection_does_not_fail() {
    let out = render(&TripTable::default());
    assert_eq!(out.matches(report::EMPTY_SELECTION).count(), 4);
}
