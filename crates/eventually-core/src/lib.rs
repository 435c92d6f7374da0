//! Eventually Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Eventually
//! day-timeline layout engine and its hosts. It includes:
//!
//! - **Geometry**: Points, sizes and rectangles in panel space ([`geometry`] module)
//! - **Intervals**: Start instant plus duration of an event ([`interval::DateInterval`])
//! - **Events**: The trait a caller implements to feed events in ([`event::TimedEvent`])

pub mod event;
pub mod geometry;
pub mod interval;
