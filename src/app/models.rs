//! Data models for GEF processing
//!
//! This module contains the core data structures for representing parsed GEF
//! files: the typed header view, CPT data rows, BORE layers and specimens,
//! structured warnings and the discriminated parse result handed to
//! presentation layers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod bore;
pub mod headers;

pub use bore::{BoreLayer, BoreSpecimen, PreExcavationLayer};
pub use headers::GefHeaders;

use crate::app::services::metadata::ProcessedMetadata;

// =============================================================================
// File Classification
// =============================================================================

/// Kind of GEF file, classified from the REPORTCODE header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    /// Cone Penetration Test: continuous depth-indexed readings
    Cpt,
    /// Borehole log: discrete soil layers and recovered specimens
    Bore,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Cpt => write!(f, "CPT"),
            FileType::Bore => write!(f, "BORE"),
        }
    }
}

/// GEF dialect extension, detected from which measurement ids are present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    /// Plain GEF-CPT without national extensions
    #[default]
    Standard,
    /// Dutch (NEN/BRO) extension ids present
    Dutch,
    /// Belgian (DOV) extension ids present
    Belgian,
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extension::Standard => write!(f, "standard"),
            Extension::Dutch => write!(f, "dutch"),
            Extension::Belgian => write!(f, "belgian"),
        }
    }
}

// =============================================================================
// CPT Data Rows
// =============================================================================

/// A single physical data line of a CPT file, mapped column-name to value
///
/// `None` values are void sentinels, unparsable tokens or truncated trailing
/// columns. The computed fields are stamped by the depth correction engine;
/// rows are immutable once that pipeline has run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    /// Parsed values keyed by COLUMNINFO column name
    pub values: HashMap<String, Option<f64>>,

    /// Inclination-corrected depth below the test surface (meters, >= 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_depth: Option<f64>,

    /// Elevation relative to the vertical datum (zid.height - true_depth)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,

    /// Row lies inside the pre-excavated zone and is not a valid reading
    pub is_void: bool,

    /// Pre-excavated depth from MEASUREMENTVAR 13, stamped on every row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_excavated_depth: Option<f64>,
}

impl Row {
    /// Look up a value by column name; `None` both for unknown columns and
    /// for present-but-void values
    pub fn value(&self, column_name: &str) -> Option<f64> {
        self.values.get(column_name).copied().flatten()
    }

    /// Check whether a column is present in this row (void or not)
    pub fn has_column(&self, column_name: &str) -> bool {
        self.values.contains_key(column_name)
    }
}

/// Axis description for one plottable CPT column, derived from COLUMNINFO
/// plus the observed data range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAxis {
    /// Column name as declared in COLUMNINFO
    pub name: String,

    /// Unit as declared in COLUMNINFO
    pub unit: String,

    /// GEF quantity number (0 when unknown)
    pub quantity_number: i32,

    /// Smallest non-void observed value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Largest non-void observed value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

// =============================================================================
// Warnings
// =============================================================================

/// Structured, non-fatal warning accumulated during a parse
///
/// Warnings are identifiers with parameters, never pre-rendered prose, so a
/// presentation layer can localize them. The serialized `id` matches the
/// identifiers consumers key their message catalogs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id", rename_all = "camelCase")]
pub enum Warning {
    /// No ZID header: elevations cannot be computed
    #[serde(rename_all = "camelCase")]
    MissingZidHeader { file: String },

    /// ZID height system code not found in the code tables
    #[serde(rename_all = "camelCase")]
    UnknownHeightSystem { file: String, height_code: String },

    /// ZID present but its height value is missing or unparsable
    #[serde(rename_all = "camelCase")]
    ZidMissingHeight { file: String },

    /// No XYID header: the test cannot be positioned
    #[serde(rename_all = "camelCase")]
    MissingXyidHeader { file: String },

    /// XYID coordinate system code not found; fell back to the default (RD)
    #[serde(rename_all = "camelCase")]
    UnknownCoordinateSystem { file: String, coordinate_code: String },

    /// COLUMNINFO rows lacking a quantity number (stored as quantity 0)
    #[serde(rename_all = "camelCase")]
    ColumnInfoMissingQuantity { file: String, entry_count: usize },

    /// The same quantity number is assigned to more than one column
    #[serde(rename_all = "camelCase")]
    DuplicateQuantityNumber {
        file: String,
        quantity_number: i32,
        column_numbers: Vec<i32>,
    },

    /// A CPT file is missing required quantities (penetration length and
    /// cone resistance)
    #[serde(rename_all = "camelCase")]
    MissingRequiredQuantities {
        file: String,
        quantity_numbers: Vec<i32>,
    },

    /// Observed data falls outside the declared COLUMNMINMAX range
    #[serde(rename_all = "camelCase")]
    ColumnMinMaxViolation {
        file: String,
        column_number: i32,
        declared_min: f64,
        declared_max: f64,
        observed_min: f64,
        observed_max: f64,
    },
}

impl Warning {
    /// Stable string identifier for this warning kind
    pub fn id(&self) -> &'static str {
        match self {
            Warning::MissingZidHeader { .. } => "missingZidHeader",
            Warning::UnknownHeightSystem { .. } => "unknownHeightSystem",
            Warning::ZidMissingHeight { .. } => "zidMissingHeight",
            Warning::MissingXyidHeader { .. } => "missingXyidHeader",
            Warning::UnknownCoordinateSystem { .. } => "unknownCoordinateSystem",
            Warning::ColumnInfoMissingQuantity { .. } => "columnInfoMissingQuantity",
            Warning::DuplicateQuantityNumber { .. } => "duplicateQuantityNumber",
            Warning::MissingRequiredQuantities { .. } => "missingRequiredQuantities",
            Warning::ColumnMinMaxViolation { .. } => "columnMinMaxViolation",
        }
    }

    /// Filename the warning refers to
    pub fn file(&self) -> &str {
        match self {
            Warning::MissingZidHeader { file }
            | Warning::UnknownHeightSystem { file, .. }
            | Warning::ZidMissingHeight { file }
            | Warning::MissingXyidHeader { file }
            | Warning::UnknownCoordinateSystem { file, .. }
            | Warning::ColumnInfoMissingQuantity { file, .. }
            | Warning::DuplicateQuantityNumber { file, .. }
            | Warning::MissingRequiredQuantities { file, .. }
            | Warning::ColumnMinMaxViolation { file, .. } => file,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::MissingZidHeader { file } => {
                write!(f, "{file}: no ZID header, elevation cannot be computed")
            }
            Warning::UnknownHeightSystem { file, height_code } => {
                write!(f, "{file}: unknown height system code '{height_code}'")
            }
            Warning::ZidMissingHeight { file } => {
                write!(f, "{file}: ZID header has no height value")
            }
            Warning::MissingXyidHeader { file } => {
                write!(f, "{file}: no XYID header, test cannot be positioned")
            }
            Warning::UnknownCoordinateSystem {
                file,
                coordinate_code,
            } => write!(
                f,
                "{file}: unknown coordinate system code '{coordinate_code}', assuming RD"
            ),
            Warning::ColumnInfoMissingQuantity { file, entry_count } => write!(
                f,
                "{file}: {entry_count} COLUMNINFO entries without quantity number"
            ),
            Warning::DuplicateQuantityNumber {
                file,
                quantity_number,
                column_numbers,
            } => write!(
                f,
                "{file}: quantity number {quantity_number} assigned to columns {column_numbers:?}"
            ),
            Warning::MissingRequiredQuantities {
                file,
                quantity_numbers,
            } => write!(
                f,
                "{file}: missing required CPT quantities {quantity_numbers:?}"
            ),
            Warning::ColumnMinMaxViolation {
                file,
                column_number,
                declared_min,
                declared_max,
                observed_min,
                observed_max,
            } => write!(
                f,
                "{file}: column {column_number} data [{observed_min}, {observed_max}] \
                 outside declared range [{declared_min}, {declared_max}]"
            ),
        }
    }
}

// =============================================================================
// Parse Result
// =============================================================================

/// Fully parsed GEF file, discriminated by file kind
///
/// This is the output surface handed to presentation and export layers. All
/// contained entities are immutable; a new file version requires a fresh
/// parse producing fresh entities.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "fileType")]
pub enum GefData {
    /// Cone penetration test with depth-corrected rows
    #[serde(rename = "CPT", rename_all = "camelCase")]
    Cpt {
        headers: GefHeaders,
        data: Vec<Row>,
        chart_axes: Vec<ChartAxis>,
        pre_excavation_layers: Vec<PreExcavationLayer>,
        warnings: Vec<Warning>,
        processed: ProcessedMetadata,
    },

    /// Borehole log with soil layers and specimens
    #[serde(rename = "BORE", rename_all = "camelCase")]
    Bore {
        headers: GefHeaders,
        layers: Vec<BoreLayer>,
        specimens: Vec<BoreSpecimen>,
        warnings: Vec<Warning>,
        processed: ProcessedMetadata,
    },
}

impl GefData {
    /// The kind of file this result represents
    pub fn file_type(&self) -> FileType {
        match self {
            GefData::Cpt { .. } => FileType::Cpt,
            GefData::Bore { .. } => FileType::Bore,
        }
    }

    /// Typed header view shared by both kinds
    pub fn headers(&self) -> &GefHeaders {
        match self {
            GefData::Cpt { headers, .. } | GefData::Bore { headers, .. } => headers,
        }
    }

    /// Warnings accumulated across all parse stages
    pub fn warnings(&self) -> &[Warning] {
        match self {
            GefData::Cpt { warnings, .. } | GefData::Bore { warnings, .. } => warnings,
        }
    }

    /// Decoded, human-readable metadata view
    pub fn processed(&self) -> &ProcessedMetadata {
        match self {
            GefData::Cpt { processed, .. } | GefData::Bore { processed, .. } => processed,
        }
    }
}
