//! CLI logic for the Eventually day layout tool.
//!
//! This module reads a day (from a day file or the built-in sample), lays
//! out its events for the requested panel width and writes the placements
//! as a text table or JSON.

pub mod day_file;
pub mod demo;
pub mod error_adapter;
pub mod report;

mod args;
mod config;
mod error;

pub use args::{Args, OutputFormat};
pub use config::ConfigError;
pub use error::CliError;

use std::fs;

use chrono::Utc;
use log::{debug, info};

use eventually::DayTimeline;

use day_file::DayFile;
use report::{Report, Status};

/// Run the Eventually CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed day files
/// - Invalid panel width or hour height
pub fn run(args: &Args) -> Result<(), CliError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(hour_height) = args.hour_height {
        debug!(hour_height; "Overriding hour height from the command line");
        app_config = app_config.with_hour_height(hour_height);
    }

    let day = load_day(args)?;
    info!(
        day = day.day().to_string(),
        events = day.events().len(),
        width = args.width;
        "Laying out day"
    );

    let hour_height = app_config.timeline().hour_height();
    let mut timeline = DayTimeline::new(day.anchor(), app_config).with_events(day.events().to_vec());
    let placements = timeline.layout(args.width)?;

    let report = Report::new(&day, args.width, hour_height, placements);
    info!(
        placed = report.count(Status::Placed),
        collapsed = report.count(Status::Collapsed),
        unplaced = report.count(Status::Unplaced);
        "Day laid out"
    );

    let rendered = match args.format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => report.to_json()?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(output_file = path; "Placements written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn load_day(args: &Args) -> Result<DayFile, CliError> {
    if args.demo {
        return Ok(demo::sample_day(Utc::now().date_naive()));
    }

    let Some(path) = &args.input else {
        return Err(CliError::MissingInput);
    };
    info!(input_path = path; "Reading day file");
    let src = fs::read_to_string(path)?;
    DayFile::parse(&src, path)
}
