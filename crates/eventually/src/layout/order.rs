//! Placement order of events.
//!
//! Events are placed earliest first, except that when two events start
//! within one title band of each other the longer one goes first, so the
//! bigger event anchors the wider, leftmost columns.

use eventually_core::interval::DateInterval;

/// An event that takes part in the layout pass.
#[derive(Debug, Clone, Copy)]
pub(super) struct Entry {
    /// Position of the event in the caller's list.
    pub index: usize,
    pub interval: DateInterval,
}

/// Returns true if `a` must be placed before `b`.
///
/// This relation is not transitive once near-simultaneous starts chain
/// together, so it is only ever evaluated by [`sort_entries`].
fn precedes(a: &DateInterval, b: &DateInterval, title_seconds: f64) -> bool {
    let delta = b.seconds_since(a.start()).abs();
    if delta < title_seconds {
        a.duration() > b.duration()
    } else {
        a.start() < b.start()
    }
}

/// Sorts entries into placement order.
///
/// A stable insertion sort: each entry moves in front of the already-sorted
/// entries it precedes and keeps its input position relative to the rest.
pub(super) fn sort_entries(
    entries: impl IntoIterator<Item = Entry>,
    title_seconds: f64,
) -> Vec<Entry> {
    let mut sorted: Vec<Entry> = Vec::new();
    for entry in entries {
        let position = sorted
            .iter()
            .rposition(|placed| !precedes(&entry.interval, &placed.interval, title_seconds))
            .map_or(0, |index| index + 1);
        sorted.insert(position, entry);
    }
    sorted
}
