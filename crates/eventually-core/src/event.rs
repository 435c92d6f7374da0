//! The input seam of the placement engine.

use std::hash::Hash;

use crate::interval::DateInterval;

/// An event that can be placed on a day timeline.
///
/// Implemented by the caller's own event type. The engine only reads an
/// event; it never keeps or mutates it.
///
/// # Examples
///
/// ```
/// # use chrono::{TimeDelta, TimeZone, Utc};
/// # use eventually_core::{event::TimedEvent, interval::DateInterval};
/// struct Meeting {
///     id: u32,
///     slot: Option<DateInterval>,
/// }
///
/// impl TimedEvent for Meeting {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn interval(&self) -> Option<DateInterval> {
///         self.slot
///     }
/// }
///
/// let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
/// let standup = Meeting { id: 7, slot: DateInterval::new(start, TimeDelta::minutes(15)).ok() };
/// assert_eq!(standup.id(), 7);
/// ```
pub trait TimedEvent {
    /// Stable identity of the event, used as the key of the layout result.
    type Id: Eq + Hash + Clone;

    /// Returns the identity of this event.
    fn id(&self) -> Self::Id;

    /// Returns the time interval of this event.
    ///
    /// `None` means the event carries no usable interval; it is left out of
    /// the layout instead of failing it.
    fn interval(&self) -> Option<DateInterval>;
}

impl<T: TimedEvent + ?Sized> TimedEvent for &T {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn interval(&self) -> Option<DateInterval> {
        (**self).interval()
    }
}
