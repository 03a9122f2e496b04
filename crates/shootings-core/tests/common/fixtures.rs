//! Test fixture builders

use chrono::NaiveDate;
use shootings_core::{IncidentRecord, IncidentTable};

/// Parse a `YYYY-MM-DD` date
pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .unwrap_or_else(|_| panic!("Invalid fixture date: {}", text))
}

/// A fully populated record
#[allow(clippy::too_many_arguments)]
pub fn incident(
    day: &str,
    state: &str,
    city: &str,
    manner: &str,
    armed: &str,
    age: f64,
    gender: &str,
    race: &str,
) -> IncidentRecord {
    IncidentRecord::new(date(day), state, city, manner)
        .with_armed(armed)
        .with_age(age)
        .with_gender(gender)
        .with_race(race)
        .with_mental_illness(false)
        .with_threat_level("attack")
        .with_flee("Not fleeing")
        .with_body_camera(false)
}

/// Small table spanning 2015-2017 over three states
pub fn sample_table() -> IncidentTable {
    IncidentTable::from_records(vec![
        incident("2015-01-02", "CA", "Los Angeles", "Shot", "Gun", 53.0, "M", "A"),
        incident("2015-01-04", "CA", "Los Angeles", "Shot", "Knife", 47.0, "M", "W"),
        incident("2015-02-14", "CA", "Fresno", "Shot and Tasered", "Unarmed", 23.0, "M", "H"),
        incident("2015-03-01", "CA", "San Diego", "Shot", "Gun", 32.0, "F", "W"),
        incident("2015-07-19", "TX", "Houston", "Shot", "Gun", 39.0, "M", "B"),
        incident("2015-11-30", "TX", "Houston", "Shot", "Vehicle", 18.0, "M", "H"),
        incident("2016-02-08", "WA", "Seattle", "Shot", "Gun", 61.0, "M", "W"),
        incident("2016-04-22", "CA", "Los Angeles", "Shot", "Gun", 29.0, "M", "B"),
        incident("2016-05-05", "TX", "Austin", "Shot and Tasered", "Knife", 35.0, "F", "W"),
        incident("2016-09-12", "CA", "Fresno", "Shot", "Toy weapon", 16.0, "M", "H"),
        incident("2016-12-24", "WA", "Spokane", "Shot", "Unarmed", 44.0, "M", "N"),
        incident("2017-01-15", "TX", "Dallas", "Shot", "Gun", 27.0, "M", "B"),
        incident("2017-03-03", "CA", "Oakland", "Shot", "Gun", 36.0, "M", "B"),
        incident("2017-06-18", "CA", "Los Angeles", "Shot and Tasered", "Knife", 41.0, "M", "H"),
        incident("2017-08-09", "WA", "Seattle", "Shot", "Gun", 25.0, "F", "W"),
        incident("2017-12-31", "TX", "Houston", "Shot", "Gun", 58.0, "M", "W"),
    ])
}

/// Records only in California, 2015 and 2016
#[allow(dead_code)]
pub fn california_2015_2016() -> IncidentTable {
    IncidentTable::from_records(vec![
        incident("2015-03-10", "CA", "Fresno", "Shot", "Gun", 30.0, "M", "W"),
        incident("2015-08-21", "CA", "Oakland", "Shot", "Knife", 22.0, "M", "B"),
        incident("2016-10-02", "CA", "Fresno", "Shot and Tasered", "Gun", 45.0, "F", "H"),
    ])
}

/// One record in each of `count` states named S00, S01, ...
#[allow(dead_code)]
pub fn one_per_state(count: usize) -> IncidentTable {
    (0..count)
        .map(|i| {
            let state = format!("S{:02}", i);
            incident("2016-05-01", &state, "Springfield", "Shot", "Gun", 20.0 + i as f64, "M", "W")
        })
        .collect()
}
