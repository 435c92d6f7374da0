//! A built-in busy day for trying out the layout without a day file.

use chrono::{NaiveDate, NaiveTime, TimeDelta};

use crate::day_file::{CalendarEvent, DayFile};

/// Start and duration of every sample event, in minutes after midnight.
const SAMPLE_SLOTS: [(i64, i64); 30] = [
    (120, 270),
    (120, 60),
    (135, 120),
    (144, 120),
    (180, 300),
    (201, 180),
    (201, 180),
    (228, 180),
    (228, 540),
    (228, 90),
    (282, 90),
    (420, 90),
    (450, 90),
    (480, 90),
    (510, 90),
    (540, 90),
    (570, 90),
    (600, 30),
    (600, 30),
    (600, 30),
    (672, 120),
    (696, 30),
    (696, 30),
    (696, 30),
    (696, 30),
    (696, 30),
    (696, 30),
    (810, 60),
    (870, 30),
    (900, 15),
];

/// Returns the sample day on the given date.
///
/// Events are named "Event 1" to "Event 30". The day packs long and short
/// meetings that overlap in clusters, a column of six simultaneous slots
/// and a quiet afternoon.
pub fn sample_day(day: NaiveDate) -> DayFile {
    let midnight = day.and_time(NaiveTime::MIN).and_utc();
    let events = SAMPLE_SLOTS
        .iter()
        .enumerate()
        .map(|(index, &(start, duration))| {
            let number = index + 1;
            CalendarEvent::new(
                format!("event-{number}"),
                midnight + TimeDelta::minutes(start),
                duration,
            )
            .with_title(format!("Event {number}"))
        })
        .collect();

    DayFile::new(day, events)
}
