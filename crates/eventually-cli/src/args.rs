//! Command-line argument definitions for the Eventually CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the day to lay out, the panel geometry,
//! the output format and destination, the configuration file and logging
//! verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Eventually day layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input day file (TOML)
    #[arg(help = "Path to the day file", required_unless_present = "demo")]
    pub input: Option<String>,

    /// Lay out the built-in sample day instead of a file
    #[arg(long, conflicts_with = "input")]
    pub demo: bool,

    /// Width of the timeline panel
    #[arg(short, long, default_value_t = 300.0)]
    pub width: f64,

    /// Height of one hour slot, overriding the configuration file
    #[arg(long)]
    pub hour_height: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to the output file; standard output if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// How placements are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Text,
    /// JSON document
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["eventually", "day.toml"]).unwrap();
        assert_eq!(args.input.as_deref(), Some("day.toml"));
        assert!(!args.demo);
        assert_eq!(args.width, 300.0);
        assert_eq!(args.hour_height, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_demo_without_input() {
        let args =
            Args::try_parse_from(["eventually", "--demo", "--format", "json", "-w", "480"]).unwrap();
        assert!(args.demo);
        assert_eq!(args.input, None);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.width, 480.0);
    }

    #[test]
    fn test_input_required_without_demo() {
        assert!(Args::try_parse_from(["eventually"]).is_err());
    }

    #[test]
    fn test_demo_conflicts_with_input() {
        assert!(Args::try_parse_from(["eventually", "day.toml", "--demo"]).is_err());
    }
}
