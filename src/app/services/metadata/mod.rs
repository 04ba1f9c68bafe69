//! Metadata processing service
//!
//! Turns the typed header view into presentation-ready metadata:
//! resolved coordinate and height systems, an optional WGS84 position,
//! and measurement variables and texts decoded against the per-dialect
//! code tables and grouped by category. Also home to the post-parse
//! validation pass that produces the structured warning list.

use serde::Serialize;

use crate::app::models::{Extension, FileType};
use crate::app::services::code_tables::Category;

mod processor;
mod warnings;

pub use processor::process_metadata;
pub use warnings::generate_warnings;

// =============================================================================
// Projection Capability
// =============================================================================

/// Failure to reproject a coordinate pair
#[derive(Debug, Clone, thiserror::Error)]
#[error("projection failed: {message}")]
pub struct ProjectionError {
    pub message: String,
}

impl ProjectionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Coordinate reprojection capability
///
/// The crate ships no geodesy implementation; callers that want a WGS84
/// position attach their own projector. Positions in local systems
/// (no EPSG identifier) are never offered for projection.
pub trait Projector: Send + Sync {
    /// Reproject `(x, y)` from the given source EPSG identifier
    /// (e.g. "EPSG:28992") to WGS84 `(latitude, longitude)` degrees.
    fn to_wgs84(
        &self,
        source_epsg: &str,
        x: f64,
        y: f64,
    ) -> std::result::Result<(f64, f64), ProjectionError>;
}

// =============================================================================
// Processed Metadata
// =============================================================================

/// WGS84 position derived from the XYID header
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wgs84Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// One decoded metadata entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataItem {
    /// MEASUREMENTVAR/MEASUREMENTTEXT id the entry came from
    pub id: i32,
    /// Localized label from the code tables
    pub label: String,
    /// Rendered value, with enumerated codes substituted by their meaning
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Metadata entries sharing a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataGroup {
    pub category: Category,
    pub items: Vec<MetadataItem>,
}

/// Presentation-ready view of a parsed file's metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedMetadata {
    pub filename: String,
    pub file_type: FileType,
    pub extension: Extension,
    /// Resolved coordinate system display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    /// Resolved height system display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wgs84: Option<Wgs84Position>,
    pub groups: Vec<MetadataGroup>,
}
