//! The result of a layout pass.

use std::hash::Hash;

use indexmap::IndexMap;

use eventually_core::geometry::{Bounds, Point};

/// Rectangles of placed events, keyed by event identity.
///
/// Entries follow the order of the events handed to the layout. Rectangles
/// are relative to the top-left corner of the timeline panel. A collapsed
/// event keeps its entry with a zero-size rectangle, at the origin until the
/// placements are translated; an event without an interval has no entry at
/// all.
///
/// If two events share an identity, the one later in the input wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Placements<Id: Eq + Hash> {
    /// Rectangle of each event and whether it collapsed.
    frames: IndexMap<Id, (Bounds, bool)>,
}

type Entry<Id> = (Id, (Bounds, bool));

fn without_flag<Id>((id, (bounds, _)): Entry<Id>) -> (Id, Bounds) {
    (id, bounds)
}

impl<Id: Eq + Hash> Default for Placements<Id> {
    fn default() -> Self {
        Self {
            frames: IndexMap::new(),
        }
    }
}

impl<Id: Eq + Hash> Placements<Id> {
    /// Records the rectangle of one event, replacing an earlier entry with
    /// the same identity in place.
    pub(crate) fn insert(&mut self, id: Id, bounds: Bounds, collapsed: bool) {
        self.frames.insert(id, (bounds, collapsed));
    }

    /// Returns the rectangle of the event with the given identity.
    pub fn get(&self, id: &Id) -> Option<Bounds> {
        self.frames.get(id).map(|&(bounds, _)| bounds)
    }

    /// Returns true if the event with the given identity was placed.
    pub fn contains(&self, id: &Id) -> bool {
        self.frames.contains_key(id)
    }

    /// Returns true if the event with the given identity collapsed because
    /// it did not fit.
    pub fn is_collapsed(&self, id: &Id) -> bool {
        self.frames.get(id).is_some_and(|&(_, collapsed)| collapsed)
    }

    /// Returns the number of placed events, collapsed ones included.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no event was placed.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates over identities and rectangles in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, Bounds)> {
        self.frames.iter().map(|(id, &(bounds, _))| (id, bounds))
    }

    /// Iterates over the identities of events that collapsed because they
    /// did not fit.
    pub fn collapsed(&self) -> impl Iterator<Item = &Id> {
        self.frames
            .iter()
            .filter(|(_, (_, collapsed))| *collapsed)
            .map(|(id, _)| id)
    }

    /// Moves every rectangle by `offset`, for a panel that does not sit at
    /// the origin of its host. Collapsed events stay collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eventually::{Placements, geometry::{Bounds, Point, Size}};
    /// let placements: Placements<u32> = [
    ///     (1, Bounds::new_from_top_left(Point::new(0.0, 540.0), Size::new(299.0, 59.0))),
    ///     (2, Bounds::default()),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let moved = placements.translate(Point::new(44.0, 0.0));
    /// assert_eq!(moved.get(&1).unwrap().min_x(), 44.0);
    /// assert!(moved.is_collapsed(&2));
    /// ```
    pub fn translate(self, offset: Point) -> Self {
        Self {
            frames: self
                .frames
                .into_iter()
                .map(|(id, (bounds, collapsed))| (id, (bounds.translate(offset), collapsed)))
                .collect(),
        }
    }
}

/// Collects rectangles computed elsewhere. A zero rectangle at the origin is
/// taken as a collapsed event.
impl<Id: Eq + Hash> FromIterator<(Id, Bounds)> for Placements<Id> {
    fn from_iter<I: IntoIterator<Item = (Id, Bounds)>>(iter: I) -> Self {
        let mut placements = Self::default();
        for (id, bounds) in iter {
            placements.insert(id, bounds, bounds.is_zero());
        }
        placements
    }
}

impl<Id: Eq + Hash> IntoIterator for Placements<Id> {
    type Item = (Id, Bounds);
    type IntoIter =
        std::iter::Map<indexmap::map::IntoIter<Id, (Bounds, bool)>, fn(Entry<Id>) -> (Id, Bounds)>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames
            .into_iter()
            .map(without_flag as fn(Entry<Id>) -> (Id, Bounds))
    }
}

#[cfg(test)]
mod tests {
    use eventually_core::geometry::Size;

    use super::*;

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height))
    }

    fn sample() -> Placements<&'static str> {
        [
            ("standup", rect(0.0, 540.0, 149.0, 14.0)),
            ("hidden", Bounds::default()),
            ("review", rect(150.0, 540.0, 149.0, 59.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup() {
        let placements = sample();
        assert_eq!(placements.len(), 3);
        assert!(!placements.is_empty());
        assert!(placements.contains(&"review"));
        assert_eq!(placements.get(&"review"), Some(rect(150.0, 540.0, 149.0, 59.0)));
        assert_eq!(placements.get(&"missing"), None);
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let ids: Vec<_> = sample().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["standup", "hidden", "review"]);
    }

    #[test]
    fn test_collapsed() {
        let placements = sample();
        let collapsed: Vec<_> = placements.collapsed().collect();
        assert_eq!(collapsed, vec![&"hidden"]);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let placements: Placements<_> = [
            ("a", rect(0.0, 0.0, 10.0, 10.0)),
            ("a", rect(5.0, 0.0, 10.0, 10.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements.get(&"a").unwrap().min_x(), 5.0);
    }

    #[test]
    fn test_translate() {
        let moved = sample().translate(Point::new(44.0, 10.0));
        assert_eq!(moved.get(&"standup"), Some(rect(44.0, 550.0, 149.0, 14.0)));
        assert_eq!(moved.get(&"hidden"), Some(rect(44.0, 10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_collapsed_survives_translate() {
        let moved = sample().translate(Point::new(44.0, 10.0));
        let collapsed: Vec<_> = moved.collapsed().collect();
        assert_eq!(collapsed, vec![&"hidden"]);
        assert!(moved.is_collapsed(&"hidden"));
        assert!(!moved.is_collapsed(&"standup"));
        assert!(!moved.is_collapsed(&"missing"));
    }

    #[test]
    fn test_placed_zero_size_is_not_collapsed() {
        let mut placements = Placements::default();
        placements.insert("tiny", rect(0.0, 0.0, 0.0, 0.0), false);
        placements.insert("hidden", Bounds::default(), true);
        assert_eq!(placements.collapsed().collect::<Vec<_>>(), vec![&"hidden"]);
    }

    #[test]
    fn test_into_iter() {
        let ids: Vec<_> = sample().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["standup", "hidden", "review"]);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Placements::<u32>::default().is_empty());
    }
}
