//! Geometric primitives for timeline layout and placement.
//!
//! This module provides the geometric types used by Eventually to describe
//! where an event is drawn inside a day-timeline panel.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in panel space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Eventually uses the usual screen coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │   00:00 at the top of the panel,
//!     │   later instants further down
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the panel at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward, i.e. with time
//!
//! Coordinates are `f64` because vertical positions are derived from second
//! offsets, and the layout rounds to two decimal places before comparing
//! geometry (see [`round_to`]).

/// Rounds `value` to the given number of decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// # use eventually_core::geometry::round_to;
/// assert_eq!(round_to(1.005_1, 2), 1.01);
/// assert_eq!(round_to(-2.345, 1), -2.3);
/// assert_eq!(round_to(7.0, 2), 7.0);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let divisor = 10f64.powi(places);
    (value * divisor).round() / divisor
}

/// Rounds `value` down (towards negative infinity) to the given number of
/// decimal places.
///
/// # Examples
///
/// ```
/// # use eventually_core::geometry::round_down_to;
/// assert_eq!(round_down_to(29.999, 2), 29.99);
/// assert_eq!(round_down_to(16.0, 2), 16.0);
/// ```
pub fn round_down_to(value: f64, places: i32) -> f64 {
    let divisor = 10f64.powi(places);
    (value * divisor).floor() / divisor
}

/// A 2D point representing a position in panel coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangle with minimum and maximum coordinates.
///
/// A bounds whose maximum is not strictly greater than its minimum on either
/// axis is *empty*; empty bounds never intersect anything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Moves the left edge to `x`, keeping the width.
    pub fn with_x(mut self, x: f64) -> Self {
        let width = self.width();
        self.min_x = x;
        self.max_x = x + width;
        self
    }

    /// Sets the width, keeping the left edge.
    pub fn with_width(mut self, width: f64) -> Self {
        self.max_x = self.min_x + width;
        self
    }

    /// Moves the top edge to `min_y`, keeping the bottom edge where it is.
    ///
    /// If `min_y` is below the bottom edge the result is empty.
    pub fn with_min_y(mut self, min_y: f64) -> Self {
        self.min_y = min_y;
        self
    }

    /// Returns true if the bounds enclose no area.
    pub fn is_empty(self) -> bool {
        !(self.max_x > self.min_x && self.max_y > self.min_y)
    }

    /// Returns true if every coordinate is zero.
    pub fn is_zero(self) -> bool {
        self.min_point().is_zero() && self.to_size().is_zero()
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eventually_core::geometry::{Bounds, Point, Size};
    /// let morning = Bounds::new_from_top_left(Point::new(0.0, 120.0), Size::new(300.0, 59.0));
    /// let overlap = Bounds::new_from_top_left(Point::new(0.0, 135.0), Size::new(300.0, 119.0));
    ///
    /// let combined = morning.merge(&overlap);
    /// assert_eq!(combined.min_y(), 120.0);
    /// assert_eq!(combined.max_y(), 254.0);
    /// assert_eq!(combined.width(), 300.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true if both bounds share a region of positive area.
    ///
    /// Bounds that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Returns the overlapping region of two bounds, or `None` if they do not
    /// [intersect](Self::intersects).
    ///
    /// # Examples
    ///
    /// ```
    /// # use eventually_core::geometry::{Bounds, Point, Size};
    /// let earlier = Bounds::new_from_top_left(Point::new(40.0, 100.0), Size::new(100.0, 200.0));
    /// let later = Bounds::new_from_top_left(Point::new(0.0, 150.0), Size::new(300.0, 30.0));
    ///
    /// let overlap = earlier.intersection(&later).unwrap();
    /// assert_eq!(overlap.min_point().x(), 40.0);
    /// assert_eq!(overlap.min_point().y(), 150.0);
    /// assert_eq!(overlap.height(), 30.0);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        })
    }

    /// Moves the bounds by the specified offset.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Rounds origin and size independently to the given number of decimal
    /// places.
    ///
    /// Small floating point drift (e.g. `0.000000000001`) must not change
    /// which frame an event lands in, so geometry is rounded before it is
    /// compared.
    pub fn round_to(self, places: i32) -> Self {
        let top_left = Point::new(round_to(self.min_x, places), round_to(self.min_y, places));
        let size = Size::new(
            round_to(self.width(), places),
            round_to(self.height(), places),
        );
        Self::new_from_top_left(top_left, size)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (0.0f64..1000.0, 0.0f64..1440.0, 0.0f64..500.0, 0.0f64..500.0)
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Intersection is symmetric and contained in both operands.
    fn check_intersection_is_contained(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        prop_assert_eq!(b1.intersects(&b2), b2.intersects(&b1));

        if let Some(overlap) = b1.intersection(&b2) {
            prop_assert!(!overlap.is_empty());
            for outer in [b1, b2] {
                prop_assert!(overlap.min_x() >= outer.min_x());
                prop_assert!(overlap.min_y() >= outer.min_y());
                prop_assert!(overlap.max_x() <= outer.max_x());
                prop_assert!(overlap.max_y() <= outer.max_y());
            }
        }
        Ok(())
    }

    /// Merged bounds contain both inputs.
    fn check_merge_contains_both(b1: Bounds, b2: Bounds) -> Result<(), TestCaseError> {
        let merged = b1.merge(&b2);
        for inner in [b1, b2] {
            prop_assert!(merged.min_x() <= inner.min_x());
            prop_assert!(merged.min_y() <= inner.min_y());
            prop_assert!(merged.max_x() >= inner.max_x());
            prop_assert!(merged.max_y() >= inner.max_y());
        }
        Ok(())
    }

    /// Rounding moves each coordinate by at most half a unit in the last place.
    fn check_round_to_is_close(bounds: Bounds) -> Result<(), TestCaseError> {
        let rounded = bounds.round_to(2);
        prop_assert!(approx_eq!(f64, rounded.min_x(), bounds.min_x(), epsilon = 0.0051));
        prop_assert!(approx_eq!(f64, rounded.min_y(), bounds.min_y(), epsilon = 0.0051));
        prop_assert!(approx_eq!(f64, rounded.width(), bounds.width(), epsilon = 0.0051));
        prop_assert!(approx_eq!(f64, rounded.height(), bounds.height(), epsilon = 0.0051));
        prop_assert_eq!(rounded.round_to(2), rounded);
        Ok(())
    }

    // ===================
    // Property Tests
    // ===================

    proptest! {
        #[test]
        fn intersection_is_contained(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_intersection_is_contained(b1, b2)?;
        }

        #[test]
        fn merge_contains_both(b1 in bounds_strategy(), b2 in bounds_strategy()) {
            check_merge_contains_both(b1, b2)?;
        }

        #[test]
        fn round_to_is_close(bounds in bounds_strategy()) {
            check_round_to_is_close(bounds)?;
        }
    }
}
