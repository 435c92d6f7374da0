//! Splitting a cluster's combined frame around earlier events.
//!
//! An event placed in an earlier cluster keeps its left edge visible: a later
//! cluster may sit to its left or on top of its body, but never across the
//! edge. The combined frame of a cluster is therefore cut at every earlier
//! left edge that reaches into it, below that event's title band.

use eventually_core::geometry::{Bounds, Point, Size};

/// A horizontal slice of a cluster's combined frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FrameContainer {
    pub bounds: Bounds,
    /// Inset reserved at the left of the slice.
    pub padding: f64,
}

/// Collects the points at which the combined frame is split, sorted by x.
///
/// The left edge of the combined frame and the right edge of the container
/// are always included. Every earlier frame contributes the top-left corner
/// of its overlap with the combined frame, ignoring its title band.
pub(super) fn split_boundaries(
    combined: Bounds,
    placed: &[Bounds],
    container_width: f64,
    title_height: f64,
) -> Vec<Point> {
    let mut boundaries = vec![combined.min_point()];
    boundaries.extend(placed.iter().filter_map(|frame| {
        let body = frame.with_min_y(frame.min_y() + title_height);
        body.intersection(&combined).map(Bounds::min_point)
    }));
    boundaries.push(Point::new(container_width, 0.0));
    boundaries.sort_by(|a, b| a.x().total_cmp(&b.x()));
    boundaries
}

/// Turns consecutive boundaries into frame containers.
///
/// A pair of boundaries closer than `padding` leaves no usable room and is
/// skipped. A container spans the combined frame's height from the top of
/// the boundary that opens it. Only a first container that opens at the
/// combined frame's own left edge goes without padding.
pub(super) fn frame_containers(
    boundaries: &[Point],
    height: f64,
    padding: f64,
) -> Vec<FrameContainer> {
    let mut containers = Vec::new();
    for (index, pair) in boundaries.windows(2).enumerate() {
        let (start, end) = (pair[0], pair[1]);
        if start.x() + padding >= end.x() {
            continue;
        }

        let padding = if containers.is_empty() && index == 0 {
            0.0
        } else {
            padding
        };
        containers.push(FrameContainer {
            bounds: Bounds::new_from_top_left(start, Size::new(end.x() - start.x(), height)),
            padding,
        });
    }
    containers
}
