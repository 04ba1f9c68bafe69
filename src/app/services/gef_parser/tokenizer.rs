//! Raw GEF tokenization: header/data split
//!
//! The parser consumes a [`RawGefFile`] produced by a tokenizer capability.
//! Hosts embedding this crate may supply their own implementation of
//! [`GefTokenizer`] (for example a WASM-backed one); [`LineTokenizer`] is the
//! built-in reference implementation so the crate works stand-alone. The
//! tokenizer is passed into the parser as an explicit dependency, never
//! reached through global state.

use std::collections::HashMap;

/// Mapping from header keyword to its occurrences, one row of comma-separated
/// field tokens per repeated header line
pub type RawHeaderMap = HashMap<String, Vec<Vec<String>>>;

/// Raw header/data split of one GEF file
#[derive(Debug, Clone, Default)]
pub struct RawGefFile {
    /// All recognized `#KEYWORD=` header occurrences
    pub headers: RawHeaderMap,

    /// The measurement data block following `#EOH=`, verbatim
    pub data: String,
}

/// Error produced by a tokenizer implementation
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TokenizeError {
    pub message: String,
}

impl TokenizeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability splitting raw GEF text into a header map and data block
///
/// Invoked once per file; its output is the sole input to the header schema
/// parser.
pub trait GefTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<RawGefFile, TokenizeError>;
}

/// Built-in line-oriented GEF tokenizer
///
/// Header lines have the shape `#KEYWORD= field, field, ...` and the header
/// section ends at `#EOH=`; everything after that marker is the data block.
/// Unknown keywords are preserved in the map so downstream layers can decide
/// what to do with them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTokenizer;

impl GefTokenizer for LineTokenizer {
    fn tokenize(&self, text: &str) -> Result<RawGefFile, TokenizeError> {
        let mut headers: RawHeaderMap = HashMap::new();
        let mut data_lines: Vec<&str> = Vec::new();
        let mut in_data = false;
        let mut header_lines_seen = 0usize;

        for line in text.lines() {
            if in_data {
                data_lines.push(line);
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let Some(rest) = trimmed.strip_prefix('#') else {
                // Stray line before the header terminator; GEF producers
                // occasionally emit these and they carry no information
                continue;
            };

            let Some((keyword, value)) = rest.split_once('=') else {
                continue;
            };
            let keyword = keyword.trim().to_uppercase();

            if keyword == "EOH" {
                in_data = true;
                continue;
            }

            let tokens: Vec<String> = value
                .split(',')
                .map(|token| token.trim().to_string())
                .collect();

            headers.entry(keyword).or_default().push(tokens);
            header_lines_seen += 1;
        }

        if header_lines_seen == 0 {
            return Err(TokenizeError::new(
                "no GEF header lines found; not a GEF file",
            ));
        }

        Ok(RawGefFile {
            headers,
            data: data_lines.join("\n"),
        })
    }
}
