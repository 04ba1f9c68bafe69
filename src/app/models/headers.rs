//! Typed GEF header structures
//!
//! The header schema parser converts the raw keyword map produced by the
//! tokenizer into this typed view. Optional headers are modelled as `Option`
//! at every layer; sentinel values are never used to mean "absent" because
//! legitimate GEF coordinate and height values can be zero.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::quantities;

// =============================================================================
// Identity Headers
// =============================================================================

/// GEFID version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GefId {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
}

/// REPORTCODE header: free-text code plus version triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCode {
    pub code: String,
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
}

/// COMPANYID header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyId {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

// =============================================================================
// Spatial Headers
// =============================================================================

/// XYID header: horizontal position in a declared coordinate system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XyId {
    /// Coordinate system code; unrecognized codes were replaced by the
    /// default "31000" (RD) with a warning
    pub coordinate_system_code: String,
    pub x: f64,
    pub y: f64,
    /// Declared precision, 0.01 when the file omits it
    pub delta_x: f64,
    pub delta_y: f64,
}

/// ZID header: vertical reference and surface height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZId {
    /// Height system code, stored raw even when unrecognized; the metadata
    /// layer applies default-NAP semantics and warns
    pub height_system_code: String,
    /// Surface height relative to the datum; `None` when missing or
    /// unparsable (warned, not fatal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_z: Option<f64>,
}

// =============================================================================
// Temporal Headers
// =============================================================================

/// Loosely validated GEF date; out-of-range fields are stored as given and
/// presentation decides how to render them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GefDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// Loosely validated GEF time of day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GefTime {
    pub hour: i32,
    pub minute: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<f64>,
}

// =============================================================================
// Data Shape Headers
// =============================================================================

/// One COLUMNINFO row describing a data column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    /// 1-based column number as declared
    pub column_number: i32,
    pub name: String,
    pub unit: String,
    /// GEF quantity number; 0 when the row did not declare one
    pub quantity_number: i32,
}

/// One COLUMNVOID row: the sentinel meaning "no measurement" for a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnVoid {
    pub column_number: i32,
    pub void_value: f64,
}

/// One COLUMNMINMAX row: the declared data range for a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMinMax {
    pub column_number: i32,
    pub min: f64,
    pub max: f64,
}

// =============================================================================
// Measurement and Specimen Headers
// =============================================================================

/// One MEASUREMENTVAR row. The value is kept as the raw string; numeric
/// interpretation happens at the point of use because several variables carry
/// non-numeric payloads in the wild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementVar {
    pub id: i32,
    pub value: String,
    pub unit: String,
}

impl MeasurementVar {
    /// Numeric interpretation of the raw value, when it parses
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }
}

/// One MEASUREMENTTEXT row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementText {
    pub id: i32,
    pub text: String,
}

/// One SPECIMENVAR row (BORE and pre-excavation bookkeeping)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenVar {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub description: String,
}

/// One SPECIMENTEXT row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecimenText {
    pub id: i32,
    pub text: String,
}

// =============================================================================
// The Typed Header View
// =============================================================================

/// Typed view of all recognized GEF headers
///
/// Shared by CPT and BORE files; the specimen lists are populated for BORE
/// files and for CPT files that record pre-excavation layers through them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GefHeaders {
    // Identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gef_id: Option<GefId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_code: Option<ReportCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,

    // Spatial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xy_id: Option<XyId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_id: Option<ZId>,

    // Temporal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<GefDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<GefTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_date: Option<GefDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    // Data shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub column_info: Vec<ColumnInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_separator: Option<String>,
    pub column_void: Vec<ColumnVoid>,
    pub column_min_max: Vec<ColumnMinMax>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_scan: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_format: Option<String>,

    // Measurement blocks
    pub measurement_var: Vec<MeasurementVar>,
    pub measurement_text: Vec<MeasurementText>,

    // Specimen blocks
    pub specimen_var: Vec<SpecimenVar>,
    pub specimen_text: Vec<SpecimenText>,

    // Free text
    pub comments: Vec<String>,
}

impl GefHeaders {
    /// Find the column info row declaring a given quantity number
    pub fn column_for_quantity(&self, quantity_number: i32) -> Option<&ColumnInfo> {
        self.column_info
            .iter()
            .find(|info| info.quantity_number == quantity_number)
    }

    /// Name of the column carrying a given quantity number
    pub fn column_name_for_quantity(&self, quantity_number: i32) -> Option<&str> {
        self.column_for_quantity(quantity_number)
            .map(|info| info.name.as_str())
    }

    /// Declared void sentinel for a 1-based column number
    pub fn void_for_column(&self, column_number: i32) -> Option<f64> {
        self.column_void
            .iter()
            .find(|void| void.column_number == column_number)
            .map(|void| void.void_value)
    }

    /// Look up a measurement variable by id
    pub fn measurement_var(&self, id: i32) -> Option<&MeasurementVar> {
        self.measurement_var.iter().find(|var| var.id == id)
    }

    /// Numeric value of a measurement variable, when present and parsable
    pub fn measurement_var_value(&self, id: i32) -> Option<f64> {
        self.measurement_var(id)
            .and_then(MeasurementVar::numeric_value)
    }

    /// Look up a measurement text by id
    pub fn measurement_text(&self, id: i32) -> Option<&MeasurementText> {
        self.measurement_text.iter().find(|text| text.id == id)
    }

    /// Look up a specimen variable by id
    pub fn specimen_var(&self, id: i32) -> Option<&SpecimenVar> {
        self.specimen_var.iter().find(|var| var.id == id)
    }

    /// Look up a specimen text by id
    pub fn specimen_text(&self, id: i32) -> Option<&SpecimenText> {
        self.specimen_text.iter().find(|text| text.id == id)
    }

    /// Set of measurement variable ids present in the file
    pub fn measurement_var_ids(&self) -> HashSet<i32> {
        self.measurement_var.iter().map(|var| var.id).collect()
    }

    /// Set of measurement text ids present in the file
    pub fn measurement_text_ids(&self) -> HashSet<i32> {
        self.measurement_text.iter().map(|text| text.id).collect()
    }

    /// The penetration-length column name, the most common depth key
    pub fn penetration_column_name(&self) -> Option<&str> {
        self.column_name_for_quantity(quantities::PENETRATION_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_columns() -> GefHeaders {
        GefHeaders {
            column: Some(2),
            column_info: vec![
                ColumnInfo {
                    column_number: 1,
                    name: "Sondeerlengte".to_string(),
                    unit: "m".to_string(),
                    quantity_number: 1,
                },
                ColumnInfo {
                    column_number: 2,
                    name: "Conusweerstand".to_string(),
                    unit: "MPa".to_string(),
                    quantity_number: 2,
                },
            ],
            column_void: vec![ColumnVoid {
                column_number: 2,
                void_value: -9999.0,
            }],
            ..GefHeaders::default()
        }
    }

    #[test]
    fn test_column_lookup_by_quantity() {
        let headers = headers_with_columns();
        assert_eq!(headers.column_name_for_quantity(1), Some("Sondeerlengte"));
        assert_eq!(headers.column_name_for_quantity(2), Some("Conusweerstand"));
        assert_eq!(headers.column_name_for_quantity(11), None);
        assert_eq!(headers.penetration_column_name(), Some("Sondeerlengte"));
    }

    #[test]
    fn test_void_lookup() {
        let headers = headers_with_columns();
        assert_eq!(headers.void_for_column(2), Some(-9999.0));
        assert_eq!(headers.void_for_column(1), None);
    }

    #[test]
    fn test_measurement_var_numeric_value() {
        let var = MeasurementVar {
            id: 13,
            value: "1.50".to_string(),
            unit: "m".to_string(),
        };
        assert_eq!(var.numeric_value(), Some(1.5));

        let var = MeasurementVar {
            id: 9,
            value: "maaiveld".to_string(),
            unit: "".to_string(),
        };
        assert_eq!(var.numeric_value(), None);
    }
}
