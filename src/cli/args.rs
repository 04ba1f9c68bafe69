//! Command-line argument definitions for the GEF processor
//!
//! The complete CLI interface, built on the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the GEF processor
///
/// Parses GEF (Geotechnical Exchange Format) CPT soundings and borehole
/// logs into structured JSON and validation reports.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gef-processor",
    version,
    about = "Parse and validate GEF geotechnical files (CPT and BORE)",
    long_about = "Parses GEF (Geotechnical Exchange Format) files as used in Dutch and Belgian \
                  geotechnical engineering. CPT soundings get void-sentinel substitution, \
                  inclination-corrected depths and NAP-relative elevations; borehole logs get \
                  decomposed soil layers and specimens. Malformed headers are reported as \
                  structured warnings rather than hard failures."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v = debug, -vv = trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available subcommands for the GEF processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse one GEF file and print its structured content
    Inspect(InspectArgs),
    /// Parse files and report warnings only
    Validate(ValidateArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// GEF file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit the full parse result as JSON instead of a summary
    #[arg(long = "json")]
    pub json: bool,

    /// Locale for decoded metadata labels (en or nl)
    #[arg(long = "locale", value_name = "TAG", default_value = "en")]
    pub locale: String,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// GEF files or directories to validate
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

impl Args {
    /// Resolve the tracing filter directive from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "off"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let args = Args::parse_from(["gef-processor", "validate", "a.gef"]);
        assert_eq!(args.log_level(), "info");

        let args = Args::parse_from(["gef-processor", "-vv", "validate", "a.gef"]);
        assert_eq!(args.log_level(), "trace");

        let args = Args::parse_from(["gef-processor", "-q", "validate", "a.gef"]);
        assert_eq!(args.log_level(), "off");
    }

    #[test]
    fn inspect_defaults_to_english_summary() {
        let args = Args::parse_from(["gef-processor", "inspect", "test.gef"]);
        match args.command {
            Some(Commands::Inspect(inspect)) => {
                assert!(!inspect.json);
                assert_eq!(inspect.locale, "en");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
