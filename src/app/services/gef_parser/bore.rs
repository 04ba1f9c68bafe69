//! BORE data block parsing
//!
//! BORE records are separated by `!` rather than newline; within a record
//! the first `column_info.len()` fields are numeric, the remainder quoted
//! text. The first text token is the main soil code, subsequent ones are
//! additional codes, except that a trailing token looking like free text
//! (contains a space or longer than ten characters) is reclassified as the
//! layer description. That heuristic is load-bearing for downstream layer
//! rendering and is reproduced exactly.

use tracing::debug;

use crate::app::models::BoreLayer;
use crate::app::models::headers::GefHeaders;
use crate::config::ParseOptions;
use crate::constants::{
    BORE_TEXT_QUOTE, DEFAULT_BORE_COLUMN_SEPARATOR, DEFAULT_RECORD_SEPARATOR,
    DESCRIPTION_LENGTH_THRESHOLD, quantities,
};

/// Parse the BORE data block into soil layers
pub fn parse_bore_data(
    raw_block: &str,
    headers: &GefHeaders,
    options: &ParseOptions,
) -> Vec<BoreLayer> {
    let record_separator = options
        .record_separator_override
        .or_else(|| {
            headers
                .record_separator
                .as_ref()
                .and_then(|declared| declared.chars().next())
        })
        .unwrap_or(DEFAULT_RECORD_SEPARATOR);

    let column_separator = headers
        .column_separator
        .as_ref()
        .and_then(|declared| declared.chars().next())
        .unwrap_or(DEFAULT_BORE_COLUMN_SEPARATOR);

    let (top_index, bottom_index) = depth_indices(headers);

    let layers: Vec<BoreLayer> = raw_block
        .split(record_separator)
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .filter_map(|record| {
            parse_record(record, headers, column_separator, top_index, bottom_index)
        })
        .collect();

    debug!(layers = layers.len(), "parsed BORE data block");
    layers
}

/// Locate the depth-top and depth-bottom numeric field indices
///
/// Resolution order: quantity numbers 1/2, then the Dutch column-name
/// substrings "bovenkant"/"onderkant", then positional 0/1.
fn depth_indices(headers: &GefHeaders) -> (usize, usize) {
    let by_quantity = |quantity: i32| {
        headers
            .column_info
            .iter()
            .position(|info| info.quantity_number == quantity)
    };
    let by_name = |needle: &str| {
        headers
            .column_info
            .iter()
            .position(|info| info.name.to_lowercase().contains(needle))
    };

    let top = by_quantity(quantities::BORE_DEPTH_TOP)
        .or_else(|| by_name("bovenkant"))
        .unwrap_or(0);
    let bottom = by_quantity(quantities::BORE_DEPTH_BOTTOM)
        .or_else(|| by_name("onderkant"))
        .unwrap_or(1);

    (top, bottom)
}

fn parse_record(
    record: &str,
    headers: &GefHeaders,
    column_separator: char,
    top_index: usize,
    bottom_index: usize,
) -> Option<BoreLayer> {
    let tokens: Vec<&str> = record
        .split(column_separator)
        .map(str::trim)
        .collect();

    let numeric_count = headers.column_info.len();

    // Numeric fields with void substitution, exactly as the CPT parser does.
    // COLUMNVOID entries are keyed by the declared column number, which need
    // not follow positional order.
    let numeric: Vec<Option<f64>> = headers
        .column_info
        .iter()
        .enumerate()
        .map(|(index, info)| {
            let parsed = tokens
                .get(index)
                .and_then(|token| token.parse::<f64>().ok());
            match (parsed, headers.void_for_column(info.column_number)) {
                (Some(value), Some(void)) if value == void => None,
                (value, _) => value,
            }
        })
        .collect();

    // Remaining fields are text, each stripped of one pair of quotes
    let mut text: Vec<String> = tokens
        .iter()
        .skip(numeric_count)
        .map(|token| strip_quotes(token))
        .filter(|token| !token.is_empty())
        .collect();

    let depth_top = numeric.get(top_index).copied().flatten()?;
    let depth_bottom = numeric.get(bottom_index).copied().flatten()?;

    // Pop a trailing free-text description before splitting soil codes
    let description = match text.last() {
        Some(last) if looks_like_free_text(last) && text.len() > 1 => text.pop(),
        _ => None,
    };

    let mut text_iter = text.into_iter();
    let soil_code = text_iter.next().unwrap_or_default();
    let additional_codes: Vec<String> = text_iter.collect();

    Some(BoreLayer {
        depth_top,
        depth_bottom,
        soil_code,
        additional_codes,
        description,
        sand_median: numeric.get(2).copied().flatten(),
        gravel_median: numeric.get(3).copied().flatten(),
        clay_percent: numeric.get(4).copied().flatten(),
        silt_percent: numeric.get(5).copied().flatten(),
        sand_percent: numeric.get(6).copied().flatten(),
        gravel_percent: numeric.get(7).copied().flatten(),
        organic_percent: numeric.get(8).copied().flatten(),
    })
}

fn strip_quotes(token: &str) -> String {
    let trimmed = token.trim();
    trimmed
        .strip_prefix(BORE_TEXT_QUOTE)
        .and_then(|rest| rest.strip_suffix(BORE_TEXT_QUOTE))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// The observed ecosystem heuristic: a token with a space or longer than
/// ten characters is a human-readable description, not a soil code
fn looks_like_free_text(token: &str) -> bool {
    token.contains(' ') || token.len() > DESCRIPTION_LENGTH_THRESHOLD
}
