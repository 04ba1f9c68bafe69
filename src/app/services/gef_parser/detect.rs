//! File-type and dialect-extension detection
//!
//! Classification is a pure function of the report code and of which
//! measurement ids are present: order-independent and deterministic.

use std::collections::HashSet;

use crate::app::models::{Extension, FileType};
use crate::app::services::code_tables;
use crate::constants::{REPORT_CODE_BORE_MARKER, is_unsupported_report_code};
use crate::{Error, Result};

/// Classify a file as CPT or BORE from its report code
///
/// Dissipation ("diss") and sieve ("siev") reports are explicitly
/// unsupported and produce a typed error rather than a garbled parse. All
/// substring checks are case-insensitive.
pub fn detect_file_type(report_code: &str) -> Result<FileType> {
    if is_unsupported_report_code(report_code) {
        return Err(Error::unsupported_file_type(report_code));
    }

    if report_code
        .to_lowercase()
        .contains(REPORT_CODE_BORE_MARKER)
    {
        Ok(FileType::Bore)
    } else {
        Ok(FileType::Cpt)
    }
}

/// Classify a CPT file's dialect extension from the measurement ids present
///
/// An id known only to the Belgian dictionaries selects Belgian regardless
/// of any overlapping standard ids; likewise for Dutch. When markers of both
/// extensions appear (a malformed but observed case) Belgian wins, so the
/// result stays deterministic.
pub fn detect_extension(text_ids: &HashSet<i32>, var_ids: &HashSet<i32>) -> Extension {
    if code_tables::contains_belgian_only_ids(text_ids, var_ids) {
        Extension::Belgian
    } else if code_tables::contains_dutch_only_ids(text_ids, var_ids) {
        Extension::Dutch
    } else {
        Extension::Standard
    }
}
