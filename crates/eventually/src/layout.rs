//! Placement of events on a day timeline.
//!
//! The vertical position and height of an event follow from its interval.
//! Horizontal position and width are computed so that events stay readable:
//!
//! - Events whose title bands overlap are placed side by side (a *cluster*).
//! - An event never covers the left edge of an event placed before it, below
//!   that event's title band.
//! - Every event tries to take the widest area available to it.
//!
//! # Algorithm
//!
//! 1. Sort events by start; near-simultaneous starts put longer events first.
//! 2. Scan the sorted events, giving each a full-width provisional frame.
//! 3. Close the open cluster when an event starts more than one title band
//!    below the cluster's first event, and at the end of the list.
//! 4. Merge the cluster's frames into a combined frame.
//! 5. Split the combined frame at the left edges of earlier events.
//! 6. Distribute the cluster's events across the resulting slices.
//! 7. Store the final frames; later clusters only read them.

mod distribute;
mod frames;
mod order;
mod split;

use chrono::{DateTime, Utc};
use log::{debug, trace};

use eventually_core::{event::TimedEvent, geometry::Bounds};

use crate::{
    config::{LayoutConfig, TimelineConfig},
    error::EventuallyError,
    placements::Placements,
};
use frames::TimeScale;
use order::Entry;

/// Decimal places geometry is rounded to before it is compared.
const ROUNDING_PLACES: i32 = 2;

/// Lays out `events` on a day timeline.
///
/// Every event with an interval gets exactly one rectangle, relative to the
/// panel's top-left corner. Events without an interval are left out. An event
/// that cannot fit its minimum width gets a zero rectangle at the origin and
/// is reported by [`Placements::collapsed`].
///
/// # Arguments
///
/// * `events` - Events to place, in the caller's order
/// * `container_width` - Width of the panel
/// * `anchor` - 00:00 of the displayed day
/// * `hour_height` - Height of one hour on the timeline
/// * `config` - Spacing and minimum sizes
///
/// # Errors
///
/// Returns [`EventuallyError::InvalidWidth`] for a negative or non-finite
/// width, [`EventuallyError::InvalidHourHeight`] for a non-positive or
/// non-finite hour height and [`EventuallyError::InvalidConfig`] for invalid
/// layout parameters. Nothing is computed in that case.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use eventually::{
///     compute_layout,
///     config::LayoutConfig,
///     event::TimedEvent,
///     interval::DateInterval,
/// };
///
/// struct Slot(&'static str, Option<DateInterval>);
///
/// impl TimedEvent for Slot {
///     type Id = &'static str;
///
///     fn id(&self) -> Self::Id {
///         self.0
///     }
///
///     fn interval(&self) -> Option<DateInterval> {
///         self.1
///     }
/// }
///
/// let anchor = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
/// let at = |hour| DateInterval::new(anchor + TimeDelta::hours(hour), TimeDelta::hours(1)).ok();
/// let events = [Slot("review", at(9)), Slot("pairing", at(9)), Slot("lunch", at(12))];
///
/// let placements = compute_layout(&events, 300.0, anchor, 60.0, &LayoutConfig::default())?;
///
/// let review = placements.get(&"review").unwrap();
/// let pairing = placements.get(&"pairing").unwrap();
/// assert_eq!(review.min_x(), 0.0);
/// assert_eq!(pairing.min_x(), 150.0);
/// assert_eq!(placements.get(&"lunch").unwrap().width(), 299.0);
/// # Ok::<(), eventually::EventuallyError>(())
/// ```
pub fn compute_layout<E: TimedEvent>(
    events: &[E],
    container_width: f64,
    anchor: DateTime<Utc>,
    hour_height: f64,
    config: &LayoutConfig,
) -> Result<Placements<E::Id>, EventuallyError> {
    if !container_width.is_finite() || container_width < 0.0 {
        return Err(EventuallyError::InvalidWidth(container_width));
    }
    TimelineConfig::new(hour_height).validate()?;
    config.validate()?;

    let scale = TimeScale::new(hour_height, config.title_height());
    let entries = order::sort_entries(
        events
            .iter()
            .enumerate()
            .filter_map(|(index, event)| Some(Entry { index, interval: event.interval()? })),
        scale.title_seconds(),
    );

    let placements = place_sorted(&entries, anchor, container_width, &scale, config);

    let clusters = placements.last().map_or(0, |placement| placement.cluster + 1);
    let collapsed = placements
        .iter()
        .filter(|placement| placement.collapsed)
        .count();
    debug!(
        events = events.len(),
        placed = placements.len(),
        clusters,
        collapsed,
        container_width;
        "Computed day layout"
    );

    let mut by_index = vec![None; events.len()];
    for placement in placements {
        by_index[entries[placement.entry].index] = Some((placement.bounds, placement.collapsed));
    }

    Ok(collect_placements(events, by_index))
}

fn collect_placements<E: TimedEvent>(
    events: &[E],
    by_index: Vec<Option<(Bounds, bool)>>,
) -> Placements<E::Id> {
    let mut placements = Placements::default();
    for (event, (bounds, collapsed)) in events
        .iter()
        .zip(by_index)
        .filter_map(|(event, placed)| Some((event, placed?)))
    {
        placements.insert(event.id(), bounds, collapsed);
    }
    placements
}

/// Final rectangle of one sorted entry.
#[derive(Debug, Clone, Copy)]
struct Placement {
    /// Position of the entry in placement order.
    entry: usize,
    /// Cluster the entry was laid out in, counted from zero.
    cluster: usize,
    bounds: Bounds,
    collapsed: bool,
}

/// Lays out entries that are already in placement order.
///
/// `frames` holds one frame per scanned entry. Frames before `cluster_start`
/// are final and only read; the ones after it form the open cluster.
fn place_sorted(
    entries: &[Entry],
    anchor: DateTime<Utc>,
    container_width: f64,
    scale: &TimeScale,
    config: &LayoutConfig,
) -> Vec<Placement> {
    let mut frames: Vec<Bounds> = Vec::with_capacity(entries.len());
    let mut placements = Vec::with_capacity(entries.len());
    let mut cluster_start = 0;
    let mut cluster = 0;

    for entry in entries {
        let frame = scale.vertical_frame(&entry.interval, anchor, container_width, config);

        let closes_cluster = frames.get(cluster_start).is_some_and(|first| {
            frames::starts_new_cluster(first.min_y(), frame.min_y(), config.title_height())
        });
        if closes_cluster {
            close_cluster(
                &mut frames,
                cluster_start,
                cluster,
                container_width,
                config,
                &mut placements,
            );
            cluster_start = frames.len();
            cluster += 1;
        }

        frames.push(frame);
    }

    if cluster_start < frames.len() {
        close_cluster(
            &mut frames,
            cluster_start,
            cluster,
            container_width,
            config,
            &mut placements,
        );
    }

    placements
}

/// Lays out the open cluster `frames[cluster_start..]` against the final
/// frames before it, and records its placements.
fn close_cluster(
    frames: &mut [Bounds],
    cluster_start: usize,
    cluster: usize,
    container_width: f64,
    config: &LayoutConfig,
    placements: &mut Vec<Placement>,
) {
    let (placed, members) = frames.split_at_mut(cluster_start);
    let Some(combined) = frames::combined_frame(members) else {
        return;
    };

    let boundaries =
        split::split_boundaries(combined, placed, container_width, config.title_height());
    let containers = split::frame_containers(&boundaries, combined.height(), config.h_padding());
    let assignments = distribute::distribute(members, &containers);
    trace!(
        cluster,
        members = members.len(),
        boundaries:? = boundaries,
        containers:? = containers,
        assignments:? = assignments;
        "Distributing cluster"
    );

    let collapsed = distribute::place_members(members, &containers, &assignments, config);
    if collapsed > 0 {
        debug!(cluster, collapsed; "Collapsed events that do not fit");
    }

    placements.extend(members.iter().enumerate().map(|(offset, frame)| Placement {
        entry: cluster_start + offset,
        cluster,
        bounds: distribute::emitted(*frame, config.h_spacing()),
        collapsed: frame.is_zero(),
    }));
}
