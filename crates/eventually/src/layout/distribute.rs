//! Distribution of cluster members across frame containers.

use eventually_core::geometry::{Bounds, round_to};

use super::{ROUNDING_PLACES, split::FrameContainer};
use crate::config::LayoutConfig;

/// Assigns every member of a cluster to a frame container.
///
/// Members are taken in placement order. Each goes to the container that
/// would give it the most width once it joins, among the containers whose
/// vertical span holds the member's top. Ties keep the first container; a
/// member that fits no container goes to the first one.
///
/// Returns, per container, the member indices assigned to it. With no
/// containers at all nothing is assigned.
pub(super) fn distribute(members: &[Bounds], containers: &[FrameContainer]) -> Vec<Vec<usize>> {
    let mut assignments = vec![Vec::new(); containers.len()];
    if containers.is_empty() {
        return assignments;
    }

    for (member_index, member) in members.iter().enumerate() {
        let mut best_width = 0.0;
        let mut best_container = 0;

        for (container_index, container) in containers.iter().enumerate() {
            let frame = container.bounds.round_to(ROUNDING_PLACES);
            let sharing = assignments[container_index].len() + 1;
            let available = (frame.width() - container.padding) / sharing as f64;

            if member.min_y() >= frame.min_y()
                && member.min_y() <= frame.max_y()
                && best_width < available
            {
                best_width = available;
                best_container = container_index;
            }
        }

        assignments[best_container].push(member_index);
    }
    assignments
}

/// Gives every member its final horizontal position and width.
///
/// Members sharing a container split its width, after padding, evenly and
/// sit left to right; each is at least the minimum event width. A member
/// that would then stick out of its container, or that has no container,
/// collapses to a zero rectangle at the origin.
///
/// Returns the number of collapsed members.
pub(super) fn place_members(
    members: &mut [Bounds],
    containers: &[FrameContainer],
    assignments: &[Vec<usize>],
    config: &LayoutConfig,
) -> usize {
    let mut finals = vec![Bounds::default(); members.len()];
    let mut collapsed = members.len();

    for (container, indices) in containers.iter().zip(assignments) {
        if indices.is_empty() {
            continue;
        }

        let frame = container.bounds;
        let width = ((frame.width() - container.padding) / indices.len() as f64)
            .max(config.min_event_width());

        for (slot, &member_index) in indices.iter().enumerate() {
            let origin_x = frame.min_x() + width * slot as f64 + container.padding;
            if round_to(origin_x + width, ROUNDING_PLACES) > round_to(frame.max_x(), ROUNDING_PLACES)
            {
                continue;
            }

            finals[member_index] = members[member_index].with_x(origin_x).with_width(width);
            collapsed -= 1;
        }
    }

    members.copy_from_slice(&finals);
    collapsed
}

/// The rectangle handed to the caller: the final frame narrowed by the
/// horizontal spacing.
pub(super) fn emitted(frame: Bounds, h_spacing: f64) -> Bounds {
    frame.with_width((frame.width() - h_spacing).max(0.0))
}
