//! GEF Processor Library
//!
//! A Rust library for parsing GEF (Geotechnical Exchange Format) files,
//! the line-oriented text format used in Dutch, Belgian and German
//! geotechnical engineering to exchange Cone Penetration Test (CPT) and
//! borehole (BORE) data, into strongly-typed, validated records.
//!
//! This library provides tools for:
//! - Tokenizing GEF files into a raw header map and data block
//! - Parsing and validating GEF headers (XYID, ZID, COLUMNINFO, COLUMNVOID, ...)
//! - Detecting the file type (CPT/BORE) and dialect extension (standard/Dutch/Belgian)
//! - Decoding numeric data blocks with void-sentinel substitution
//! - Computing inclination-corrected depth and NAP-relative elevation
//! - Decomposing BORE soil layers and specimens from packed records
//! - Decoding measurement variables and texts against per-dialect code tables
//! - Accumulating structured, localizable warnings instead of failing

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod code_tables;
        pub mod gef_parser;
        pub mod metadata;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Extension, FileType, GefData, Row, Warning};
pub use app::services::gef_parser::{GefParser, GefTokenizer, LineTokenizer};
pub use app::services::metadata::Projector;
pub use config::ParseOptions;

/// Result type alias for the GEF processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for GEF processing operations
///
/// Only two conditions abort the parse of a file: an explicitly unsupported
/// report code, and a tokenizer failure that leaves nothing to parse. All
/// other malformed input degrades to structured [`Warning`]s.
///
/// [`Warning`]: crate::app::models::Warning
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The report code names a file kind this parser does not support
    /// (dissipation and sieve reports)
    #[error("unsupported GEF file type: report code '{report_code}'")]
    UnsupportedFileType { report_code: String },

    /// The raw tokenizer could not split the file into headers and data
    #[error("tokenizer error in file '{file}': {message}")]
    Tokenizer { file: String, message: String },

    /// Serialization of parsed output failed
    #[error("serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// One or more files failed a batch validation run
    #[error("{failed} of {checked} files failed validation")]
    Validation { failed: usize, checked: usize },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported-file-type error
    pub fn unsupported_file_type(report_code: impl Into<String>) -> Self {
        Self::UnsupportedFileType {
            report_code: report_code.into(),
        }
    }

    /// Create a tokenizer error with file context
    pub fn tokenizer(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tokenizer {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "serialization failed".to_string(),
            source: error,
        }
    }
}
