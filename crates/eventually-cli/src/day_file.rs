//! Day files: the events of one day in TOML.
//!
//! ```toml
//! day = "2026-03-02"
//!
//! [[events]]
//! id = "standup"
//! title = "Team standup"
//! start = "2026-03-02T09:00:00Z"
//! duration_minutes = 15
//! ```
//!
//! `start` is an RFC 3339 string. An event without `start` or
//! `duration_minutes`, or with a negative duration, has no interval and is
//! reported as unplaced.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::Deserialize;

use eventually::{event::TimedEvent, interval::DateInterval};

use crate::error::CliError;

/// The parsed contents of a day file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayFile {
    day: NaiveDate,
    #[serde(default)]
    events: Vec<CalendarEvent>,
}

impl DayFile {
    /// Creates a day from its date and events.
    pub fn new(day: NaiveDate, events: Vec<CalendarEvent>) -> Self {
        Self { day, events }
    }

    /// Parses a day file.
    ///
    /// # Arguments
    ///
    /// * `src` - Contents of the file
    /// * `path` - Path the contents were read from, for error reporting
    ///
    /// # Errors
    ///
    /// Returns [`CliError::DayFile`] with the location of the problem when
    /// the TOML is malformed or does not describe a day.
    pub fn parse(src: &str, path: &str) -> Result<Self, CliError> {
        toml::from_str(src)
            .map_err(|err| CliError::new_day_file_error(path, err.message(), err.span(), src))
    }

    /// Returns the date of the day.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Returns 00:00 UTC of the day, the anchor of the timeline.
    pub fn anchor(&self) -> DateTime<Utc> {
        self.day.and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns the events in file order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

/// One entry of a day file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarEvent {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    start: Option<DateTime<Utc>>,
    #[serde(default)]
    duration_minutes: Option<i64>,
}

impl CalendarEvent {
    /// Creates an event starting at `start` and lasting `duration_minutes`.
    pub fn new(id: impl Into<String>, start: DateTime<Utc>, duration_minutes: i64) -> Self {
        Self {
            id: id.into(),
            title: None,
            start: Some(start),
            duration_minutes: Some(duration_minutes),
        }
    }

    /// Sets the display title (builder style).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the title, falling back to the identity.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// Returns the start, if known.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }
}

impl TimedEvent for CalendarEvent {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn interval(&self) -> Option<DateInterval> {
        let duration = TimeDelta::try_minutes(self.duration_minutes?)?;
        DateInterval::new(self.start?, duration).ok()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const WORKDAY: &str = r#"
day = "2026-03-02"

[[events]]
id = "standup"
title = "Team standup"
start = "2026-03-02T09:00:00Z"
duration_minutes = 15

[[events]]
id = "focus"
start = "2026-03-02T10:30:00+01:00"
duration_minutes = 90

[[events]]
id = "someday"
title = "Unscheduled"
"#;

    #[test]
    fn test_parse_day_file() {
        let day = DayFile::parse(WORKDAY, "workday.toml").unwrap();

        assert_eq!(day.day(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(day.anchor(), Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap());
        assert_eq!(day.events().len(), 3);

        let standup = &day.events()[0];
        assert_eq!(standup.id(), "standup");
        assert_eq!(standup.title(), "Team standup");
        assert_eq!(
            standup.interval(),
            Some(
                DateInterval::new(
                    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
                    TimeDelta::minutes(15)
                )
                .unwrap()
            )
        );
    }

    #[test]
    fn test_start_offset_is_normalized_to_utc() {
        let day = DayFile::parse(WORKDAY, "workday.toml").unwrap();
        let focus = &day.events()[1];

        assert_eq!(focus.title(), "focus");
        assert_eq!(
            focus.start(),
            Some(Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_event_without_time_has_no_interval() {
        let day = DayFile::parse(WORKDAY, "workday.toml").unwrap();
        assert_eq!(day.events()[2].interval(), None);
    }

    #[test]
    fn test_negative_duration_has_no_interval() {
        let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        assert_eq!(CalendarEvent::new("late", start, -30).interval(), None);
    }

    #[test]
    fn test_empty_day() {
        let day = DayFile::parse("day = \"2026-03-02\"\n", "empty.toml").unwrap();
        assert!(day.events().is_empty());
    }

    #[test]
    fn test_malformed_day_reports_span() {
        let src = "day = \"2026-03-02\"\n[[events]]\nid = 7\n";
        let err = DayFile::parse(src, "bad.toml").unwrap_err();

        match err {
            CliError::DayFile {
                path, span, src: kept, ..
            } => {
                assert_eq!(path, "bad.toml");
                assert_eq!(kept, src);
                let span = span.expect("TOML errors carry a span");
                assert!(span.start >= src.find("id").unwrap());
            }
            other => panic!("Expected DayFile error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let src = "day = \"2026-03-02\"\n[[events]]\nid = \"a\"\nlocation = \"room 1\"\n";
        assert!(DayFile::parse(src, "bad.toml").is_err());
    }

    #[test]
    fn test_missing_day_is_rejected() {
        assert!(DayFile::parse("[[events]]\nid = \"a\"\n", "bad.toml").is_err());
    }
}
