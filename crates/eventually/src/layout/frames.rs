//! Vertical frames and clusters.
//!
//! The vertical position and height of an event come from its interval
//! alone. Events whose title bands overlap are gathered into a cluster and
//! laid out side by side.

use chrono::{DateTime, Utc};

use eventually_core::{
    geometry::{Bounds, Point, Size, round_down_to},
    interval::DateInterval,
};

use super::ROUNDING_PLACES;
use crate::config::LayoutConfig;

/// Gap left below every event so that back-to-back events do not touch.
const VERTICAL_GAP: f64 = 1.0;

const SECONDS_PER_HOUR: f64 = 3_600.0;
const HOURS_PER_DAY: f64 = 24.0;

/// Conversion between time and vertical panel units.
#[derive(Debug, Clone, Copy)]
pub(super) struct TimeScale {
    points_per_second: f64,
    day_height: f64,
    title_seconds: f64,
}

impl TimeScale {
    pub fn new(hour_height: f64, title_height: f64) -> Self {
        let points_per_second = hour_height / SECONDS_PER_HOUR;
        Self {
            points_per_second,
            day_height: HOURS_PER_DAY * SECONDS_PER_HOUR * points_per_second,
            title_seconds: SECONDS_PER_HOUR / hour_height * title_height,
        }
    }

    /// Duration covered by one title band, in seconds.
    pub fn title_seconds(&self) -> f64 {
        self.title_seconds
    }

    /// Provisional frame of an event: final top and height, full width.
    ///
    /// The top is clamped to the start of the day. The height is clamped to
    /// the rest of the day, raised to the minimum event height, rounded down
    /// to two places and shortened by the vertical gap.
    pub fn vertical_frame(
        &self,
        interval: &DateInterval,
        anchor: DateTime<Utc>,
        container_width: f64,
        config: &LayoutConfig,
    ) -> Bounds {
        let origin_y = interval.seconds_since(anchor).max(0.0) * self.points_per_second;
        let max_height = self.day_height - origin_y;
        let height = (interval.duration_seconds() * self.points_per_second)
            .min(max_height)
            .max(config.min_event_height());
        let height = (round_down_to(height, ROUNDING_PLACES) - VERTICAL_GAP).max(0.0);

        Bounds::new_from_top_left(
            Point::new(0.0, origin_y),
            Size::new(container_width, height),
        )
    }
}

/// Returns true if an event at `origin_y` no longer shares a title band with
/// the first event of the open cluster.
pub(super) fn starts_new_cluster(cluster_top: f64, origin_y: f64, title_height: f64) -> bool {
    origin_y - cluster_top > title_height
}

/// Bounding box of all frames of a cluster, or `None` for an empty cluster.
pub(super) fn combined_frame(frames: &[Bounds]) -> Option<Bounds> {
    let (first, rest) = frames.split_first()?;
    Some(rest.iter().fold(*first, |combined, frame| combined.merge(frame)))
}
