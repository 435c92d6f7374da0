//! Eventually - event placement for day timelines.
//!
//! Given the events of one day and the width of the panel they are shown in,
//! the engine computes a rectangle for every event: vertical position and
//! height from the event's interval, horizontal position and width so that
//! overlapping events sit side by side and stay readable.
//!
//! [`compute_layout`] is the one-shot entry point. [`DayTimeline`] owns the
//! events of a day and caches the last layout by container width.

pub mod config;

mod error;
mod layout;
mod placements;
mod timeline;

pub use eventually_core::{event, geometry, interval};

pub use error::EventuallyError;
pub use layout::compute_layout;
pub use placements::Placements;
pub use timeline::DayTimeline;
