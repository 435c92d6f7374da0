//! Error types for Eventually operations.
//!
//! The placement engine only fails on precondition violations. Geometry that
//! cannot fit is handled inside the layout by collapsing the event.

use thiserror::Error;

/// The main error type for Eventually operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventuallyError {
    #[error("Invalid container width: {0} (expected a finite, non-negative number)")]
    InvalidWidth(f64),

    #[error("Invalid hour height: {0} (expected a finite, positive number)")]
    InvalidHourHeight(f64),

    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}
