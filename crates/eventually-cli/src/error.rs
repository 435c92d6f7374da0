//! Error types for the Eventually CLI.

use std::{io, ops::Range};

use thiserror::Error;

use eventually::EventuallyError;

use crate::config::ConfigError;

/// The main error type of the CLI.
///
/// # Diagnostic Variants
///
/// The `DayFile` variant keeps the offending source and, when the TOML parser
/// reports one, the byte range of the error, so it can be rendered with a
/// labelled snippet.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid day file {path}: {message}")]
    DayFile {
        path: String,
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("No day to lay out: pass a day file or --demo")]
    MissingInput,

    #[error("Layout error: {0}")]
    Layout(#[from] EventuallyError),

    #[error("Failed to serialize placements: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Create a new `DayFile` error with the associated source.
    pub fn new_day_file_error(
        path: impl Into<String>,
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::DayFile {
            path: path.into(),
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
