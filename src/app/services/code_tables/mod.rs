//! Static GEF code tables for O(1) metadata lookups
//!
//! This module holds the per-dialect dictionaries that give meaning to the
//! numeric ids found in GEF headers: measurement variables and texts for the
//! standard, Dutch and Belgian CPT extensions and for BORE files, plus the
//! coordinate-system, height-system, soil, color, drilling-method and country
//! tables.
//!
//! All tables are immutable, initialized once on first use and safe for
//! concurrent read access. Lookups for measurement metadata resolve through a
//! single dispatch function keyed on file type and extension rather than
//! per-call-site conditionals.

use serde::Serialize;
use std::collections::HashSet;

use crate::app::models::{Extension, FileType};

pub mod coordinate_systems;
pub mod height_systems;
pub mod measurement_texts;
pub mod measurement_vars;
pub mod soil;

pub use coordinate_systems::CoordinateSystem;
pub use height_systems::HeightSystem;
pub use soil::{ColorCode, CountryCode, DrillingMethod, SoilCode};

// =============================================================================
// Entry Structure
// =============================================================================

/// UI grouping category for decoded metadata entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Project administration: client, project, identifiers
    Project,
    /// Position, reference levels and surroundings
    Location,
    /// Cone, rig and sampler hardware
    Equipment,
    /// How the test was carried out
    Procedure,
    /// Outcomes and zero-drift bookkeeping
    Results,
    /// Free-form remarks
    Remarks,
    /// Reserved ids; never surfaced to consumers
    Reserved,
}

/// One enumerated option of a measurement variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumOption {
    /// Raw value as it appears in the file (compared after trimming)
    pub value: &'static str,
    pub meaning_en: &'static str,
    pub meaning_nl: Option<&'static str>,
}

/// How a measurement variable's value is decoded
///
/// Decided at table-construction time; the metadata processor never inspects
/// the value shape at use time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeasurementKind {
    /// Plain numeric value rendered with its unit
    Numeric,
    /// Enumerated value substituted with its human meaning
    Enum(&'static [EnumOption]),
}

/// Metadata for one MEASUREMENTVAR id
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VarInfo {
    pub id: i32,
    pub category: Category,
    pub unit: &'static str,
    pub description_en: &'static str,
    pub description_nl: Option<&'static str>,
    pub kind: MeasurementKind,
}

impl VarInfo {
    /// Resolve an enumerated raw value to its meaning, if this variable is
    /// enumerated and the value is listed
    pub fn option_meaning(&self, raw: &str, dutch: bool) -> Option<&'static str> {
        match self.kind {
            MeasurementKind::Numeric => None,
            MeasurementKind::Enum(options) => options
                .iter()
                .find(|option| option.value == raw.trim())
                .map(|option| {
                    if dutch {
                        option.meaning_nl.unwrap_or(option.meaning_en)
                    } else {
                        option.meaning_en
                    }
                }),
        }
    }
}

/// Metadata for one MEASUREMENTTEXT id
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TextInfo {
    pub id: i32,
    pub category: Category,
    pub description_en: &'static str,
    pub description_nl: Option<&'static str>,
}

// =============================================================================
// Dispatch
// =============================================================================

/// Look up measurement-variable metadata for a file type and extension
///
/// The Dutch and Belgian dictionaries supplement the standard one: extension
/// ids resolve first, everything else falls through to the standard table.
/// BORE files resolve against the BORE dictionary only.
pub fn measurement_var_info(
    file_type: FileType,
    extension: Extension,
    id: i32,
) -> Option<&'static VarInfo> {
    match file_type {
        FileType::Bore => measurement_vars::bore(id),
        FileType::Cpt => match extension {
            Extension::Standard => measurement_vars::standard(id),
            Extension::Dutch => {
                measurement_vars::dutch(id).or_else(|| measurement_vars::standard(id))
            }
            Extension::Belgian => {
                measurement_vars::belgian(id).or_else(|| measurement_vars::standard(id))
            }
        },
    }
}

/// Look up measurement-text metadata for a file type and extension
pub fn measurement_text_info(
    file_type: FileType,
    extension: Extension,
    id: i32,
) -> Option<&'static TextInfo> {
    match file_type {
        FileType::Bore => measurement_texts::bore(id),
        FileType::Cpt => match extension {
            Extension::Standard => measurement_texts::standard(id),
            Extension::Dutch => {
                measurement_texts::dutch(id).or_else(|| measurement_texts::standard(id))
            }
            Extension::Belgian => {
                measurement_texts::belgian(id).or_else(|| measurement_texts::standard(id))
            }
        },
    }
}

// =============================================================================
// Extension Marker Sets
// =============================================================================

/// Check whether any id in the sets is known only to the Dutch dictionaries
pub fn contains_dutch_only_ids(text_ids: &HashSet<i32>, var_ids: &HashSet<i32>) -> bool {
    text_ids
        .iter()
        .any(|&id| measurement_texts::dutch(id).is_some() && measurement_texts::standard(id).is_none())
        || var_ids
            .iter()
            .any(|&id| measurement_vars::dutch(id).is_some() && measurement_vars::standard(id).is_none())
}

/// Check whether any id in the sets is known only to the Belgian dictionaries
pub fn contains_belgian_only_ids(text_ids: &HashSet<i32>, var_ids: &HashSet<i32>) -> bool {
    text_ids.iter().any(|&id| {
        measurement_texts::belgian(id).is_some() && measurement_texts::standard(id).is_none()
    }) || var_ids.iter().any(|&id| {
        measurement_vars::belgian(id).is_some() && measurement_vars::standard(id).is_none()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_standard_cpt() {
        let info = measurement_var_info(FileType::Cpt, Extension::Standard, 13)
            .expect("pre-excavated depth is a standard variable");
        assert_eq!(info.unit, "m");
        assert!(info.description_en.to_lowercase().contains("pre-excavated"));
    }

    #[test]
    fn test_dispatch_extension_falls_through_to_standard() {
        // A standard id resolves under the Dutch extension too
        let standard = measurement_var_info(FileType::Cpt, Extension::Standard, 16).unwrap();
        let via_dutch = measurement_var_info(FileType::Cpt, Extension::Dutch, 16).unwrap();
        assert_eq!(standard.id, via_dutch.id);
    }

    #[test]
    fn test_dispatch_bore_is_disjoint_from_cpt() {
        // BORE files never resolve against the CPT extension dictionaries
        let bore = measurement_text_info(FileType::Bore, Extension::Standard, 2);
        let cpt = measurement_text_info(FileType::Cpt, Extension::Standard, 2);
        match (bore, cpt) {
            (Some(bore), Some(cpt)) => assert_ne!(bore.description_en, cpt.description_en),
            _ => panic!("both dictionaries define id 2"),
        }
    }

    #[test]
    fn test_extension_marker_detection_is_set_based() {
        let belgian_texts: HashSet<i32> = [202].into();
        let empty: HashSet<i32> = HashSet::new();
        assert!(contains_belgian_only_ids(&belgian_texts, &empty));
        assert!(!contains_dutch_only_ids(&belgian_texts, &empty));

        let standard_texts: HashSet<i32> = [1, 2, 3].into();
        assert!(!contains_belgian_only_ids(&standard_texts, &empty));
    }

    #[test]
    fn test_enum_option_resolution() {
        let info = measurement_var_info(FileType::Cpt, Extension::Standard, 12)
            .expect("test type is a standard variable");
        match info.kind {
            MeasurementKind::Enum(options) => assert!(!options.is_empty()),
            MeasurementKind::Numeric => panic!("test type must be enumerated"),
        }
        assert!(info.option_meaning("0", false).is_some());
        assert!(info.option_meaning("99", false).is_none());
    }
}
