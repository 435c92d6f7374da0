//! Rendering of a computed day layout.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use eventually::{
    Placements,
    event::TimedEvent,
    geometry::{Bounds, Point, Size},
};

use crate::day_file::DayFile;

/// Outcome of one event of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The event has a rectangle.
    Placed,
    /// The event did not fit and has a zero rectangle.
    Collapsed,
    /// The event has no interval and was left out.
    Unplaced,
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    id: String,
    title: String,
    start: Option<DateTime<Utc>>,
    status: Status,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// The layout of a day, ready to be written out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    day: NaiveDate,
    width: f64,
    hour_height: f64,
    events: Vec<Row>,
}

impl Report {
    /// Builds the report for `day`, one row per event in file order.
    pub fn new(
        day: &DayFile,
        width: f64,
        hour_height: f64,
        placements: &Placements<String>,
    ) -> Self {
        let events = day
            .events()
            .iter()
            .map(|event| {
                let id = event.id();
                let bounds = placements.get(&id);
                let status = match bounds {
                    Some(_) if placements.is_collapsed(&id) => Status::Collapsed,
                    Some(_) => Status::Placed,
                    None => Status::Unplaced,
                };
                let bounds = bounds.unwrap_or_default();
                Row {
                    id,
                    title: event.title().to_string(),
                    start: event.start(),
                    status,
                    x: bounds.min_x(),
                    y: bounds.min_y(),
                    width: bounds.width(),
                    height: bounds.height(),
                }
            })
            .collect();

        Self {
            day: day.day(),
            width,
            hour_height,
            events,
        }
    }

    /// Returns the rows in file order.
    pub fn rows(&self) -> &[Row] {
        &self.events
    }

    /// Returns how many events have the given status.
    pub fn count(&self, status: Status) -> usize {
        self.events.iter().filter(|row| row.status == status).count()
    }

    /// Renders the report as an aligned table.
    pub fn to_text(&self) -> String {
        let id_width = self
            .events
            .iter()
            .map(|row| row.id.len())
            .max()
            .unwrap_or(0)
            .max("ID".len());
        let title_width = self
            .events
            .iter()
            .map(|row| row.title.len())
            .max()
            .unwrap_or(0)
            .max("TITLE".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "Day {} (width {}, hour height {})",
            self.day, self.width, self.hour_height
        );
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<title_width$}  {:>5}  {:>8} {:>8} {:>8} {:>8}  STATUS",
            "ID", "TITLE", "START", "X", "Y", "WIDTH", "HEIGHT"
        );

        for row in &self.events {
            let start = row
                .start
                .map_or_else(|| "-".to_string(), |start| start.format("%H:%M").to_string());
            let _ = write!(
                out,
                "{:<id_width$}  {:<title_width$}  {:>5}  ",
                row.id, row.title, start
            );
            match row.status {
                Status::Placed => {
                    let _ = writeln!(
                        out,
                        "{:>8.2} {:>8.2} {:>8.2} {:>8.2}  placed",
                        row.x, row.y, row.width, row.height
                    );
                }
                Status::Collapsed => {
                    let _ = writeln!(out, "{:>8} {:>8} {:>8} {:>8}  collapsed", "-", "-", "-", "-");
                }
                Status::Unplaced => {
                    let _ = writeln!(out, "{:>8} {:>8} {:>8} {:>8}  unplaced", "-", "-", "-", "-");
                }
            }
        }

        let _ = writeln!(
            out,
            "{} placed, {} collapsed, {} unplaced",
            self.count(Status::Placed),
            self.count(Status::Collapsed),
            self.count(Status::Unplaced)
        );
        out
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error, which only happens for non-finite
    /// numbers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

impl Row {
    /// Returns the event identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the outcome of the event.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the rectangle of the event; zero unless placed.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use eventually::{compute_layout, config::LayoutConfig};

    use super::*;
    use crate::day_file::CalendarEvent;

    fn day() -> DayFile {
        let nine = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        DayFile::new(
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            vec![
                CalendarEvent::new("review", nine, 60),
                CalendarEvent::new("someday", nine, -30),
                CalendarEvent::new("pairing", nine, 60).with_title("Pairing"),
            ],
        )
    }

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height))
    }

    fn report(width: f64) -> Report {
        let day = day();
        let placements =
            compute_layout(day.events(), width, day.anchor(), 60.0, &LayoutConfig::default())
                .unwrap();
        Report::new(&day, width, 60.0, &placements)
    }

    #[test]
    fn test_rows_follow_file_order() {
        let report = report(300.0);
        let ids: Vec<_> = report.rows().iter().map(Row::id).collect();
        assert_eq!(ids, vec!["review", "someday", "pairing"]);
    }

    #[test]
    fn test_statuses() {
        let report = report(300.0);

        assert_eq!(report.rows()[0].status(), Status::Placed);
        assert_eq!(report.rows()[0].bounds(), rect(0.0, 540.0, 149.0, 59.0));
        assert_eq!(report.rows()[1].status(), Status::Unplaced);
        assert_eq!(report.rows()[2].status(), Status::Placed);
        assert_eq!(report.rows()[2].bounds(), rect(150.0, 540.0, 149.0, 59.0));
    }

    #[test]
    fn test_collapsed_when_too_narrow() {
        let report = report(4.0);
        assert_eq!(report.count(Status::Collapsed), 2);
        assert_eq!(report.count(Status::Unplaced), 1);
    }

    #[test]
    fn test_collapsed_in_translated_placements() {
        let day = day();
        let placements =
            compute_layout(day.events(), 4.0, day.anchor(), 60.0, &LayoutConfig::default())
                .unwrap()
                .translate(Point::new(44.0, 10.0));
        let report = Report::new(&day, 4.0, 60.0, &placements);

        assert_eq!(report.rows()[0].status(), Status::Collapsed);
        assert_eq!(report.rows()[2].status(), Status::Collapsed);
        assert_eq!(report.count(Status::Placed), 0);
    }

    #[test]
    fn test_text() {
        let text = report(300.0).to_text();

        assert!(text.starts_with("Day 2026-03-02 (width 300, hour height 60)\n"));
        assert!(text.contains("  Pairing  "));
        assert!(text.contains("  09:00  "));
        assert!(text.contains("  150.00   540.00   149.00    59.00  placed"));
        assert!(text.contains("someday  someday      -"));
        assert!(text.ends_with("2 placed, 0 collapsed, 1 unplaced\n"));
    }

    #[test]
    fn test_json() {
        let json = report(300.0).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["day"], "2026-03-02");
        assert_eq!(value["events"][0]["id"], "review");
        assert_eq!(value["events"][0]["status"], "placed");
        assert_eq!(value["events"][0]["width"], 149.0);
        assert_eq!(value["events"][1]["status"], "unplaced");
        assert_eq!(value["events"][1]["start"], serde_json::Value::Null);
        assert_eq!(value["events"][2]["x"], 150.0);
    }
}
