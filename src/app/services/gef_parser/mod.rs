//! GEF parsing service
//!
//! Converts raw GEF text (CPT soundings and BORE logs in the
//! Geotechnical Exchange Format) into structured [`GefData`]. The
//! pipeline is deliberately tolerant: malformed headers degrade to
//! warnings, and only an unsupported report code or unreadable input is
//! fatal.
//!
//! # Example
//!
//! ```no_run
//! use gef_processor::{GefParser, ParseOptions};
//!
//! let parser = GefParser::new(ParseOptions::default());
//! let data = parser.parse("sounding.gef", "#EOH=\n")?;
//! # Ok::<(), gef_processor::Error>(())
//! ```

mod bore;
mod cpt;
mod depth;
mod detect;
mod header;
mod parser;
mod specimen;
mod tokenizer;

pub use bore::parse_bore_data;
pub use cpt::{build_chart_axes, parse_cpt_data};
pub use depth::add_computed_depth_columns;
pub use detect::{detect_extension, detect_file_type};
pub use header::parse_headers;
pub use parser::{GefParser, parse_gef};
pub use specimen::{parse_bore_specimens, parse_pre_excavation_layers};
pub use tokenizer::{GefTokenizer, LineTokenizer, RawGefFile, RawHeaderMap, TokenizeError};

#[cfg(test)]
pub mod tests;
