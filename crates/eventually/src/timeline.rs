//! A day timeline that remembers its last layout.
//!
//! Hosting surfaces ask for placements far more often than the width or the
//! events change. [`DayTimeline`] owns everything the layout depends on and
//! keeps the last [`Placements`] keyed by container width. Changing the
//! events, the anchor or the configuration drops the cached layout, since
//! those are not part of the key.

use chrono::{DateTime, Utc};
use log::trace;

use eventually_core::event::TimedEvent;

use crate::{config::AppConfig, error::EventuallyError, layout, placements::Placements};

/// The cached result of the last layout pass.
struct CachedLayout<Id: Eq + std::hash::Hash> {
    width: f64,
    placements: Placements<Id>,
}

/// Events of one displayed day plus the cached layout of them.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use eventually::{DayTimeline, config::AppConfig, event::TimedEvent, interval::DateInterval};
///
/// struct Slot(u32, DateInterval);
///
/// impl TimedEvent for Slot {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.0
///     }
///
///     fn interval(&self) -> Option<DateInterval> {
///         Some(self.1)
///     }
/// }
///
/// let anchor = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
/// let nine = DateInterval::new(anchor + TimeDelta::hours(9), TimeDelta::hours(1)).unwrap();
///
/// let mut timeline = DayTimeline::new(anchor, AppConfig::default()).with_events(vec![Slot(1, nine)]);
///
/// let width = timeline.layout(300.0)?.get(&1).unwrap().width();
/// assert_eq!(width, 299.0);
///
/// // Same width: served from the cache
/// timeline.layout(300.0)?;
/// assert_eq!(timeline.computations(), 1);
/// # Ok::<(), eventually::EventuallyError>(())
/// ```
pub struct DayTimeline<E: TimedEvent> {
    events: Vec<E>,
    anchor: DateTime<Utc>,
    config: AppConfig,
    cache: Option<CachedLayout<E::Id>>,
    computations: usize,
}

impl<E: TimedEvent> DayTimeline<E> {
    /// Creates an empty timeline for the day starting at `anchor`.
    pub fn new(anchor: DateTime<Utc>, config: AppConfig) -> Self {
        Self {
            events: Vec::new(),
            anchor,
            config,
            cache: None,
            computations: 0,
        }
    }

    /// Sets the events (builder style).
    pub fn with_events(mut self, events: Vec<E>) -> Self {
        self.set_events(events);
        self
    }

    /// Returns the events of the day.
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Returns the start of the displayed day.
    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replaces the events and drops the cached layout.
    pub fn set_events(&mut self, events: Vec<E>) {
        self.events = events;
        self.invalidate();
    }

    /// Moves the timeline to another day and drops the cached layout.
    pub fn set_anchor(&mut self, anchor: DateTime<Utc>) {
        self.anchor = anchor;
        self.invalidate();
    }

    /// Changes the height of one hour slot and drops the cached layout.
    pub fn set_hour_height(&mut self, hour_height: f64) {
        self.config = self.config.clone().with_hour_height(hour_height);
        self.invalidate();
    }

    /// Replaces the configuration and drops the cached layout.
    pub fn set_config(&mut self, config: AppConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Drops the cached layout.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            trace!("Invalidated cached day layout");
        }
    }

    /// Returns the width of the cached layout, if any.
    pub fn cached_width(&self) -> Option<f64> {
        self.cache.as_ref().map(|cached| cached.width)
    }

    /// Returns how many times the layout was actually computed.
    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Returns the placements for a container of the given width.
    ///
    /// The layout is computed only if the cache is empty or was computed for
    /// another width.
    ///
    /// # Errors
    ///
    /// Returns the precondition errors of [`compute_layout`](crate::compute_layout).
    /// The cached layout is dropped in that case.
    pub fn layout(&mut self, container_width: f64) -> Result<&Placements<E::Id>, EventuallyError> {
        let cached = match self.cache.take() {
            Some(cached) if cached.width == container_width => {
                trace!(container_width; "Reusing cached day layout");
                cached
            }
            _ => {
                let placements = layout::compute_layout(
                    &self.events,
                    container_width,
                    self.anchor,
                    self.config.timeline().hour_height(),
                    self.config.layout(),
                )?;
                self.computations += 1;
                CachedLayout {
                    width: container_width,
                    placements,
                }
            }
        };

        Ok(&self.cache.insert(cached).placements)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use eventually_core::interval::DateInterval;

    use super::*;
    use crate::config::{LayoutConfig, TimelineConfig};

    #[derive(Debug, Clone)]
    struct Meeting {
        id: u32,
        start_minutes: i64,
        minutes: i64,
    }

    impl TimedEvent for Meeting {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn interval(&self) -> Option<DateInterval> {
            DateInterval::new(
                anchor() + TimeDelta::minutes(self.start_minutes),
                TimeDelta::minutes(self.minutes),
            )
            .ok()
        }
    }

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()
    }

    fn meeting(id: u32, start_minutes: i64, minutes: i64) -> Meeting {
        Meeting {
            id,
            start_minutes,
            minutes,
        }
    }

    fn timeline() -> DayTimeline<Meeting> {
        DayTimeline::new(anchor(), AppConfig::default())
            .with_events(vec![meeting(1, 9 * 60, 60), meeting(2, 9 * 60, 60)])
    }

    #[test]
    fn test_same_width_hits_cache() {
        let mut timeline = timeline();

        let first = timeline.layout(300.0).unwrap().clone();
        let second = timeline.layout(300.0).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(timeline.computations(), 1);
        assert_eq!(timeline.cached_width(), Some(300.0));
    }

    #[test]
    fn test_width_change_recomputes() {
        let mut timeline = timeline();

        let narrow = timeline.layout(200.0).unwrap().get(&2).unwrap();
        let wide = timeline.layout(400.0).unwrap().get(&2).unwrap();

        assert_eq!(narrow.min_x(), 100.0);
        assert_eq!(wide.min_x(), 200.0);
        assert_eq!(timeline.computations(), 2);
    }

    #[test]
    fn test_event_change_invalidates_at_same_width() {
        let mut timeline = timeline();
        timeline.layout(300.0).unwrap();

        timeline.set_events(vec![meeting(1, 9 * 60, 60)]);
        assert_eq!(timeline.cached_width(), None);

        let placements = timeline.layout(300.0).unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements.get(&1).unwrap().width(), 299.0);
        assert_eq!(timeline.computations(), 2);
    }

    #[test]
    fn test_anchor_change_invalidates_at_same_width() {
        let mut timeline = timeline();
        let before = timeline.layout(300.0).unwrap().get(&1).unwrap();

        timeline.set_anchor(anchor() + TimeDelta::hours(1));
        let after = timeline.layout(300.0).unwrap().get(&1).unwrap();

        assert_eq!(before.min_y(), 540.0);
        assert_eq!(after.min_y(), 480.0);
        assert_eq!(timeline.computations(), 2);
    }

    #[test]
    fn test_config_change_invalidates_at_same_width() {
        let mut timeline = timeline();
        timeline.layout(300.0).unwrap();

        timeline.set_config(AppConfig::new(
            LayoutConfig::default().with_h_spacing(0.0),
            TimelineConfig::new(120.0),
        ));
        let placements = timeline.layout(300.0).unwrap();

        assert_eq!(placements.get(&1).unwrap().width(), 150.0);
        assert_eq!(placements.get(&1).unwrap().min_y(), 1_080.0);
        assert_eq!(timeline.computations(), 2);
    }

    #[test]
    fn test_hour_height_change_invalidates_at_same_width() {
        let mut timeline = timeline();
        timeline.layout(300.0).unwrap();

        timeline.set_hour_height(30.0);
        let placements = timeline.layout(300.0).unwrap();

        assert_eq!(placements.get(&1).unwrap().min_y(), 270.0);
        assert_eq!(placements.get(&1).unwrap().height(), 29.0);
        assert_eq!(timeline.config().timeline().hour_height(), 30.0);
        assert_eq!(timeline.computations(), 2);
    }

    #[test]
    fn test_invalid_width_drops_cache() {
        let mut timeline = timeline();
        timeline.layout(300.0).unwrap();

        assert!(timeline.layout(-1.0).is_err());
        assert_eq!(timeline.cached_width(), None);

        timeline.layout(300.0).unwrap();
        assert_eq!(timeline.computations(), 2);
    }
}
