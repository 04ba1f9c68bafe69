//! Tests for BORE data block parsing

use super::super::bore::parse_bore_data;
use crate::app::models::headers::{ColumnInfo, ColumnVoid, GefHeaders};
use crate::config::ParseOptions;

fn bore_headers() -> GefHeaders {
    GefHeaders {
        column_info: vec![
            ColumnInfo {
                column_number: 1,
                name: "Laag van".to_string(),
                unit: "m".to_string(),
                quantity_number: 1,
            },
            ColumnInfo {
                column_number: 2,
                name: "Laag tot".to_string(),
                unit: "m".to_string(),
                quantity_number: 2,
            },
        ],
        column_separator: Some(";".to_string()),
        record_separator: Some("!".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_layer_with_codes_and_description() {
    let layers = parse_bore_data(
        "0.00;1.50;'Zs1';'g1';'bruin zand met grind'!",
        &bore_headers(),
        &ParseOptions::default(),
    );

    assert_eq!(layers.len(), 1);
    let layer = &layers[0];
    assert!((layer.depth_top - 0.0).abs() < f64::EPSILON);
    assert!((layer.depth_bottom - 1.5).abs() < f64::EPSILON);
    assert_eq!(layer.soil_code, "Zs1");
    assert_eq!(layer.additional_codes, vec!["g1".to_string()]);
    assert_eq!(layer.description.as_deref(), Some("bruin zand met grind"));
}

#[test]
fn test_long_code_without_space_is_still_a_description() {
    // Longer than ten characters triggers the reclassification even
    // without a space
    let layers = parse_bore_data(
        "0.00;1.00;'Kz1';'donkergrijs'!",
        &bore_headers(),
        &ParseOptions::default(),
    );
    assert_eq!(layers[0].soil_code, "Kz1");
    assert!(layers[0].additional_codes.is_empty());
    assert_eq!(layers[0].description.as_deref(), Some("donkergrijs"));
}

#[test]
fn test_short_trailing_code_stays_a_code() {
    let layers = parse_bore_data(
        "0.00;1.00;'Zs1';'g1'!",
        &bore_headers(),
        &ParseOptions::default(),
    );
    assert_eq!(layers[0].additional_codes, vec!["g1".to_string()]);
    assert_eq!(layers[0].description, None);
}

#[test]
fn test_multiple_records_split_on_bang() {
    let layers = parse_bore_data(
        "0.00;1.50;'Zs1'!\n1.50;3.20;'Kz1'!",
        &bore_headers(),
        &ParseOptions::default(),
    );
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[1].soil_code, "Kz1");
    assert!((layers[1].thickness() - 1.7).abs() < 1e-9);
}

#[test]
fn test_record_with_unparsable_depths_is_skipped() {
    let layers = parse_bore_data(
        "0.00;abc;'Zs1'!\n1.50;3.20;'Kz1'!",
        &bore_headers(),
        &ParseOptions::default(),
    );
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].soil_code, "Kz1");
}

#[test]
fn test_void_depth_skips_the_record() {
    let mut headers = bore_headers();
    headers.column_void = vec![ColumnVoid {
        column_number: 2,
        void_value: -9999.0,
    }];
    let layers = parse_bore_data(
        "0.00;-9999;'Zs1'!",
        &headers,
        &ParseOptions::default(),
    );
    assert!(layers.is_empty());
}

#[test]
fn test_grain_statistics_fill_positional_slots() {
    let mut headers = bore_headers();
    for (number, name) in [(3, "Zandmediaan"), (4, "Grindmediaan"), (5, "Lutum")] {
        headers.column_info.push(ColumnInfo {
            column_number: number,
            name: name.to_string(),
            unit: "%".to_string(),
            quantity_number: 0,
        });
    }

    let layers = parse_bore_data(
        "0.00;1.00;180;;12.5;'Zs1'!",
        &headers,
        &ParseOptions::default(),
    );

    let layer = &layers[0];
    assert_eq!(layer.sand_median, Some(180.0));
    assert_eq!(layer.gravel_median, None);
    assert_eq!(layer.clay_percent, Some(12.5));
    assert_eq!(layer.soil_code, "Zs1");
}

#[test]
fn test_void_lookup_uses_declared_column_number() {
    // The declared column number can run ahead of the positional index;
    // the sentinel belongs to the declared number
    let mut headers = bore_headers();
    headers.column_info.push(ColumnInfo {
        column_number: 5,
        name: "Zandmediaan".to_string(),
        unit: "um".to_string(),
        quantity_number: 0,
    });
    headers.column_void = vec![ColumnVoid {
        column_number: 5,
        void_value: -1.0,
    }];

    let layers = parse_bore_data(
        "0.00;1.00;-1.0;'Zs1'!",
        &headers,
        &ParseOptions::default(),
    );

    assert_eq!(layers[0].sand_median, None);
}

#[test]
fn test_depth_indices_resolve_by_dutch_names() {
    let mut headers = bore_headers();
    // No quantity numbers; the name substrings decide
    headers.column_info[0].quantity_number = 0;
    headers.column_info[0].name = "Diepte bovenkant laag".to_string();
    headers.column_info[1].quantity_number = 0;
    headers.column_info[1].name = "Diepte onderkant laag".to_string();

    let layers = parse_bore_data(
        "0.50;2.00;'Vk'!",
        &headers,
        &ParseOptions::default(),
    );
    assert!((layers[0].depth_top - 0.5).abs() < f64::EPSILON);
    assert!((layers[0].depth_bottom - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_record_separator_override() {
    let options = ParseOptions {
        record_separator_override: Some('|'),
        ..Default::default()
    };
    let layers = parse_bore_data(
        "0.00;1.50;'Zs1'|1.50;2.00;'Kz1'|",
        &bore_headers(),
        &options,
    );
    assert_eq!(layers.len(), 2);
}

#[test]
fn test_unquoted_text_tokens_are_accepted() {
    let layers = parse_bore_data(
        "0.00;1.00;Zs1;zwak siltig bruin zand!",
        &bore_headers(),
        &ParseOptions::default(),
    );
    assert_eq!(layers[0].soil_code, "Zs1");
    assert_eq!(
        layers[0].description.as_deref(),
        Some("zwak siltig bruin zand")
    );
}
