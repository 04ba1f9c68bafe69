//! Tests for the depth correction pipeline

use super::super::cpt::parse_cpt_data;
use super::super::depth::add_computed_depth_columns;
use super::cpt_headers;
use crate::app::models::headers::{ColumnInfo, MeasurementVar};
use crate::config::ParseOptions;

const EPS: f64 = 1e-9;

fn parsed_rows(block: &str) -> Vec<crate::app::models::Row> {
    parse_cpt_data(block, &cpt_headers(), &ParseOptions::default())
}

#[test]
fn test_vertical_cone_depth_equals_penetration() {
    let headers = cpt_headers();
    let rows = add_computed_depth_columns(
        parsed_rows("0.00 1.0 0.0\n0.50 1.0 0.0\n1.00 1.0 0.0\n"),
        &headers,
    );

    assert!((rows[0].true_depth.unwrap() - 0.0).abs() < EPS);
    assert!((rows[1].true_depth.unwrap() - 0.5).abs() < EPS);
    assert!((rows[2].true_depth.unwrap() - 1.0).abs() < EPS);
}

#[test]
fn test_inclined_step_is_shortened_by_cosine() {
    let headers = cpt_headers();
    // cos(60 deg) = 0.5, so the second meter of rod only gains half a
    // meter of true depth
    let rows = add_computed_depth_columns(
        parsed_rows("0.00 1.0 0.0\n1.00 1.0 0.0\n2.00 1.0 60.0\n"),
        &headers,
    );

    assert!((rows[1].true_depth.unwrap() - 1.0).abs() < EPS);
    assert!((rows[2].true_depth.unwrap() - 1.5).abs() < 1e-6);
}

#[test]
fn test_true_depth_is_monotonic_under_varying_inclination() {
    let headers = cpt_headers();
    let rows = add_computed_depth_columns(
        parsed_rows(
            "0.00 1.0 0.0\n0.50 1.0 5.0\n1.00 1.0 12.0\n1.50 1.0 3.0\n2.00 1.0 25.0\n",
        ),
        &headers,
    );

    let depths: Vec<f64> = rows.iter().filter_map(|row| row.true_depth).collect();
    assert_eq!(depths.len(), rows.len());
    for pair in depths.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
    // Correction can only shorten, never lengthen, the vertical component
    assert!(depths.last().unwrap() < &2.0);
}

#[test]
fn test_missing_inclination_contributes_uncorrected_step() {
    let headers = cpt_headers();
    let rows = add_computed_depth_columns(
        parsed_rows("0.00 1.0 0.0\n1.00 1.0 n/a\n"),
        &headers,
    );
    assert!((rows[1].true_depth.unwrap() - 1.0).abs() < EPS);
}

#[test]
fn test_missing_penetration_carries_state_over() {
    let headers = cpt_headers();
    let rows = add_computed_depth_columns(
        parsed_rows("0.00 1.0 0.0\nn/a 1.0 0.0\n1.00 1.0 0.0\n"),
        &headers,
    );

    assert_eq!(rows[1].true_depth, None);
    assert!((rows[2].true_depth.unwrap() - 1.0).abs() < EPS);
}

#[test]
fn test_corrected_depth_column_is_trusted_directly() {
    let mut headers = cpt_headers();
    headers.column_info.push(ColumnInfo {
        column_number: 4,
        name: "Gecorrigeerde diepte".to_string(),
        unit: "m".to_string(),
        quantity_number: 11,
    });

    let rows = add_computed_depth_columns(
        parse_cpt_data(
            "0.00 1.0 0.0 0.00\n1.00 1.0 45.0 -0.85\n",
            &headers,
            &ParseOptions::default(),
        ),
        &headers,
    );

    // The declared column wins over the cumulative reconstruction, and
    // negative values are normalized
    assert!((rows[1].true_depth.unwrap() - 0.85).abs() < EPS);
}

#[test]
fn test_elevation_is_datum_height_minus_depth() {
    let headers = cpt_headers();
    let rows = add_computed_depth_columns(
        parsed_rows("0.00 1.0 0.0\n2.00 1.0 0.0\n"),
        &headers,
    );

    assert!((rows[0].elevation.unwrap() - 5.0).abs() < EPS);
    assert!((rows[1].elevation.unwrap() - 3.0).abs() < EPS);
}

#[test]
fn test_no_zid_means_no_elevation() {
    let mut headers = cpt_headers();
    headers.z_id = None;
    let rows = add_computed_depth_columns(parsed_rows("1.00 1.0 0.0\n"), &headers);
    assert_eq!(rows[0].true_depth, Some(1.0));
    assert_eq!(rows[0].elevation, None);
}

#[test]
fn test_pre_excavation_voids_shallow_rows() {
    let mut headers = cpt_headers();
    headers.measurement_var.push(MeasurementVar {
        id: 13,
        value: "1.5".to_string(),
        unit: "m".to_string(),
    });

    let rows = add_computed_depth_columns(
        parsed_rows("1.00 1.0 0.0\n1.50 1.0 0.0\n2.00 1.0 0.0\n"),
        &headers,
    );

    assert!(rows[0].is_void);
    // The boundary row is the first real reading
    assert!(!rows[1].is_void);
    assert!(!rows[2].is_void);
    assert_eq!(rows[0].pre_excavated_depth, Some(1.5));
    assert_eq!(rows[2].pre_excavated_depth, Some(1.5));
}

#[test]
fn test_zero_pre_excavation_flags_nothing() {
    let mut headers = cpt_headers();
    headers.measurement_var.push(MeasurementVar {
        id: 13,
        value: "0.0".to_string(),
        unit: "m".to_string(),
    });

    let rows = add_computed_depth_columns(parsed_rows("1.00 1.0 0.0\n"), &headers);
    assert!(!rows[0].is_void);
    assert_eq!(rows[0].pre_excavated_depth, None);
}
