//! Post-parse validation pass
//!
//! Inspects the typed headers (and, for CPT files, the parsed rows)
//! and accumulates structured warnings. Nothing here is fatal; the
//! warning list travels with the parse result.

use std::collections::BTreeMap;

use tracing::debug;

use crate::app::models::headers::GefHeaders;
use crate::app::models::{FileType, Row, Warning};
use crate::app::services::code_tables::height_systems;
use crate::config::ParseOptions;
use crate::constants::{REQUIRED_CPT_QUANTITIES, quantities};

/// Validate headers and data, returning every warning found
pub fn generate_warnings(
    file: &str,
    headers: &GefHeaders,
    file_type: FileType,
    rows: &[Row],
    options: &ParseOptions,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    check_z_id(file, headers, &mut warnings);
    check_xy_id(file, headers, &mut warnings);
    check_duplicate_quantities(file, headers, &mut warnings);
    if file_type == FileType::Cpt {
        check_required_quantities(file, headers, &mut warnings);
        check_min_max(file, headers, rows, options, &mut warnings);
    }

    if !warnings.is_empty() {
        debug!(file, count = warnings.len(), "validation warnings");
    }
    warnings
}

fn check_z_id(file: &str, headers: &GefHeaders, warnings: &mut Vec<Warning>) {
    let Some(z_id) = headers.z_id.as_ref() else {
        warnings.push(Warning::MissingZidHeader {
            file: file.to_string(),
        });
        return;
    };

    if !height_systems::is_known(&z_id.height_system_code) {
        warnings.push(Warning::UnknownHeightSystem {
            file: file.to_string(),
            height_code: z_id.height_system_code.clone(),
        });
    }
    if z_id.height.is_none() {
        warnings.push(Warning::ZidMissingHeight {
            file: file.to_string(),
        });
    }
}

fn check_xy_id(file: &str, headers: &GefHeaders, warnings: &mut Vec<Warning>) {
    if headers.xy_id.is_none() {
        warnings.push(Warning::MissingXyidHeader {
            file: file.to_string(),
        });
    }
}

fn check_duplicate_quantities(file: &str, headers: &GefHeaders, warnings: &mut Vec<Warning>) {
    let mut by_quantity: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for info in &headers.column_info {
        if info.quantity_number != quantities::UNKNOWN {
            by_quantity
                .entry(info.quantity_number)
                .or_default()
                .push(info.column_number);
        }
    }

    for (quantity_number, column_numbers) in by_quantity {
        if column_numbers.len() > 1 {
            warnings.push(Warning::DuplicateQuantityNumber {
                file: file.to_string(),
                quantity_number,
                column_numbers,
            });
        }
    }
}

fn check_required_quantities(file: &str, headers: &GefHeaders, warnings: &mut Vec<Warning>) {
    let missing: Vec<i32> = REQUIRED_CPT_QUANTITIES
        .iter()
        .copied()
        .filter(|quantity| headers.column_for_quantity(*quantity).is_none())
        .collect();

    if !missing.is_empty() {
        warnings.push(Warning::MissingRequiredQuantities {
            file: file.to_string(),
            quantity_numbers: missing,
        });
    }
}

/// Compare observed data ranges against declared COLUMNMINMAX bounds
///
/// Void rows (pre-excavation zone) are excluded from the observed range
/// unless the caller opted in; void values within live rows never count.
fn check_min_max(
    file: &str,
    headers: &GefHeaders,
    rows: &[Row],
    options: &ParseOptions,
    warnings: &mut Vec<Warning>,
) {
    for min_max in &headers.column_min_max {
        let Some(info) = headers
            .column_info
            .iter()
            .find(|info| info.column_number == min_max.column_number)
        else {
            continue;
        };

        let observed: Vec<f64> = rows
            .iter()
            .filter(|row| options.range_check_includes_void_rows || !row.is_void)
            .filter_map(|row| row.value(&info.name))
            .collect();
        let (Some(observed_min), Some(observed_max)) = (
            observed.iter().copied().reduce(f64::min),
            observed.iter().copied().reduce(f64::max),
        ) else {
            continue;
        };

        if observed_min < min_max.min || observed_max > min_max.max {
            warnings.push(Warning::ColumnMinMaxViolation {
                file: file.to_string(),
                column_number: min_max.column_number,
                declared_min: min_max.min,
                declared_max: min_max.max,
                observed_min,
                observed_max,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::headers::{ColumnInfo, ColumnMinMax, XyId, ZId};
    use std::collections::HashMap;

    fn column(number: i32, name: &str, quantity: i32) -> ColumnInfo {
        ColumnInfo {
            column_number: number,
            name: name.to_string(),
            unit: "m".to_string(),
            quantity_number: quantity,
        }
    }

    fn row_with(name: &str, value: f64, is_void: bool) -> Row {
        let mut values = HashMap::new();
        values.insert(name.to_string(), Some(value));
        Row {
            values,
            is_void,
            ..Default::default()
        }
    }

    fn positioned_headers() -> GefHeaders {
        GefHeaders {
            xy_id: Some(XyId {
                coordinate_system_code: "31000".to_string(),
                x: 0.0,
                y: 0.0,
                delta_x: 0.01,
                delta_y: 0.01,
            }),
            z_id: Some(ZId {
                height_system_code: "31000".to_string(),
                height: Some(1.0),
                delta_z: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn missing_spatial_headers_are_warned() {
        let headers = GefHeaders::default();
        let warnings = generate_warnings(
            "bare.gef",
            &headers,
            FileType::Bore,
            &[],
            &ParseOptions::default(),
        );

        let ids: Vec<&str> = warnings.iter().map(Warning::id).collect();
        assert!(ids.contains(&"missingZidHeader"));
        assert!(ids.contains(&"missingXyidHeader"));
    }

    #[test]
    fn unknown_height_system_and_missing_height() {
        let mut headers = positioned_headers();
        headers.z_id = Some(ZId {
            height_system_code: "99999".to_string(),
            height: None,
            delta_z: None,
        });

        let warnings = generate_warnings(
            "odd.gef",
            &headers,
            FileType::Bore,
            &[],
            &ParseOptions::default(),
        );

        assert!(warnings.iter().any(|warning| matches!(
            warning,
            Warning::UnknownHeightSystem { height_code, .. } if height_code == "99999"
        )));
        assert!(
            warnings
                .iter()
                .any(|warning| warning.id() == "zidMissingHeight")
        );
    }

    #[test]
    fn duplicate_quantity_numbers_list_both_columns() {
        let mut headers = positioned_headers();
        headers.column_info = vec![
            column(1, "penetration length", 1),
            column(2, "cone resistance", 2),
            column(3, "cone resistance again", 2),
        ];

        let warnings = generate_warnings(
            "dup.gef",
            &headers,
            FileType::Cpt,
            &[],
            &ParseOptions::default(),
        );

        assert!(warnings.iter().any(|warning| matches!(
            warning,
            Warning::DuplicateQuantityNumber {
                quantity_number: 2,
                column_numbers,
                ..
            } if column_numbers == &vec![2, 3]
        )));
    }

    #[test]
    fn unnumbered_columns_never_count_as_duplicates() {
        let mut headers = positioned_headers();
        headers.column_info = vec![
            column(1, "penetration length", 1),
            column(2, "cone resistance", 2),
            column(3, "extra a", 0),
            column(4, "extra b", 0),
        ];

        let warnings = generate_warnings(
            "zeroes.gef",
            &headers,
            FileType::Cpt,
            &[],
            &ParseOptions::default(),
        );
        assert!(
            !warnings
                .iter()
                .any(|warning| warning.id() == "duplicateQuantityNumber")
        );
    }

    #[test]
    fn cpt_missing_required_quantities() {
        let mut headers = positioned_headers();
        headers.column_info = vec![column(1, "friction", 3)];

        let warnings = generate_warnings(
            "nocone.gef",
            &headers,
            FileType::Cpt,
            &[],
            &ParseOptions::default(),
        );

        assert!(warnings.iter().any(|warning| matches!(
            warning,
            Warning::MissingRequiredQuantities { quantity_numbers, .. }
                if quantity_numbers == &vec![1, 2]
        )));
    }

    #[test]
    fn bore_files_skip_required_quantity_check() {
        let headers = positioned_headers();
        let warnings = generate_warnings(
            "bore.gef",
            &headers,
            FileType::Bore,
            &[],
            &ParseOptions::default(),
        );
        assert!(
            !warnings
                .iter()
                .any(|warning| warning.id() == "missingRequiredQuantities")
        );
    }

    #[test]
    fn min_max_violation_reports_observed_range() {
        let mut headers = positioned_headers();
        headers.column_info = vec![column(1, "penetration length", 1), column(2, "qc", 2)];
        headers.column_min_max = vec![ColumnMinMax {
            column_number: 2,
            min: 0.0,
            max: 10.0,
        }];

        let rows = vec![row_with("qc", 4.0, false), row_with("qc", 12.5, false)];
        let warnings = generate_warnings(
            "range.gef",
            &headers,
            FileType::Cpt,
            &rows,
            &ParseOptions::default(),
        );

        assert!(warnings.iter().any(|warning| matches!(
            warning,
            Warning::ColumnMinMaxViolation {
                column_number: 2,
                observed_max,
                ..
            } if (observed_max - 12.5).abs() < 1e-9
        )));
    }

    #[test]
    fn void_rows_are_excluded_from_range_checks_by_default() {
        let mut headers = positioned_headers();
        headers.column_info = vec![column(1, "penetration length", 1), column(2, "qc", 2)];
        headers.column_min_max = vec![ColumnMinMax {
            column_number: 2,
            min: 0.0,
            max: 10.0,
        }];

        let rows = vec![row_with("qc", 99.0, true), row_with("qc", 4.0, false)];

        let quiet = generate_warnings(
            "void.gef",
            &headers,
            FileType::Cpt,
            &rows,
            &ParseOptions::default(),
        );
        assert!(
            !quiet
                .iter()
                .any(|warning| warning.id() == "columnMinMaxViolation")
        );

        let strict_options = ParseOptions {
            range_check_includes_void_rows: true,
            ..Default::default()
        };
        let strict = generate_warnings("void.gef", &headers, FileType::Cpt, &rows, &strict_options);
        assert!(
            strict
                .iter()
                .any(|warning| warning.id() == "columnMinMaxViolation")
        );
    }
}
