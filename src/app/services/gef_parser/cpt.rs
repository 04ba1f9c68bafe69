//! CPT numeric data block parsing
//!
//! Splits the data block into rows, maps tokens onto the declared COLUMNINFO
//! order, substitutes void sentinels and normalizes the sign of depth-like
//! columns. Structurally short lines are tolerated: GEF producers in the
//! wild truncate rows, so missing trailing values become "no value", never
//! an error.

use std::collections::HashMap;

use crate::app::models::headers::GefHeaders;
use crate::app::models::{ChartAxis, Row};
use crate::config::ParseOptions;
use crate::constants::is_depth_column;

/// Parse the CPT data block into named rows
pub fn parse_cpt_data(raw_block: &str, headers: &GefHeaders, options: &ParseOptions) -> Vec<Row> {
    if headers.column_info.is_empty() {
        return Vec::new();
    }

    let separator = column_separator(headers, options);

    raw_block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_line(line, headers, separator))
        .collect()
}

fn column_separator(headers: &GefHeaders, options: &ParseOptions) -> Option<char> {
    if let Some(separator) = options.column_separator_override {
        return Some(separator);
    }
    headers
        .column_separator
        .as_ref()
        .and_then(|declared| declared.chars().next())
        // A declared whitespace separator is the same as the default split
        .filter(|separator| !separator.is_whitespace())
}

fn parse_line(line: &str, headers: &GefHeaders, separator: Option<char>) -> Row {
    // Empty fields between declared separators stay in place so later
    // tokens keep their column; they parse-fail into "no value" below
    let tokens: Vec<&str> = match separator {
        Some(separator) => line.split(separator).map(str::trim).collect(),
        None => line.split_whitespace().collect(),
    };

    let mut values: HashMap<String, Option<f64>> =
        HashMap::with_capacity(headers.column_info.len());

    for (index, info) in headers.column_info.iter().enumerate() {
        let parsed = tokens
            .get(index)
            .and_then(|token| token.parse::<f64>().ok());

        // Void sentinels are compared with exact floating-point equality:
        // producers write the declared sentinel verbatim
        let parsed = match (parsed, headers.void_for_column(info.column_number)) {
            (Some(value), Some(void)) if value == void => None,
            (value, _) => value,
        };

        // Some producers emit negative depth; depth is normalized to
        // non-negative, downward-increasing before the correction pipeline
        let parsed = if is_depth_column(&info.name, &info.unit) {
            parsed.map(f64::abs)
        } else {
            parsed
        };

        values.insert(info.name.clone(), parsed);
    }

    Row {
        values,
        ..Row::default()
    }
}

/// Derive chart axis descriptions for the plottable columns
///
/// The penetration-length column is the shared vertical axis, so every other
/// column gets an axis record with its observed min/max over non-void rows.
pub fn build_chart_axes(rows: &[Row], headers: &GefHeaders) -> Vec<ChartAxis> {
    let depth_name = headers.penetration_column_name();

    headers
        .column_info
        .iter()
        .filter(|info| Some(info.name.as_str()) != depth_name)
        .map(|info| {
            let mut min: Option<f64> = None;
            let mut max: Option<f64> = None;
            for row in rows.iter().filter(|row| !row.is_void) {
                if let Some(value) = row.value(&info.name) {
                    min = Some(min.map_or(value, |current: f64| current.min(value)));
                    max = Some(max.map_or(value, |current: f64| current.max(value)));
                }
            }
            ChartAxis {
                name: info.name.clone(),
                unit: info.unit.clone(),
                quantity_number: info.quantity_number,
                min,
                max,
            }
        })
        .collect()
}
