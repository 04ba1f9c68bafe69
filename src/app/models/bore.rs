//! BORE domain structures: soil layers, specimens and pre-excavation layers

use serde::{Deserialize, Serialize};

// =============================================================================
// Soil Layers
// =============================================================================

/// One soil layer of a borehole log
///
/// Depths are cumulative below the surface and satisfy
/// `depth_top < depth_bottom`. Consecutive layers usually touch but GEF files
/// in the wild contain gaps, so adjacency is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoreLayer {
    pub depth_top: f64,
    pub depth_bottom: f64,

    /// Main NEN 5104 soil code (e.g. "Zs1")
    pub soil_code: String,

    /// Additional soil/admixture codes after the main code
    pub additional_codes: Vec<String>,

    /// Free-text layer description, when the trailing text token was
    /// reclassified by the space/length heuristic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // Grain-size statistics from the fixed positional numeric slots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sand_median: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravel_median: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clay_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silt_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sand_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravel_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic_percent: Option<f64>,
}

impl BoreLayer {
    /// Layer thickness in meters
    pub fn thickness(&self) -> f64 {
        self.depth_bottom - self.depth_top
    }
}

// =============================================================================
// Specimens
// =============================================================================

/// One physical specimen recovered from a borehole
///
/// Reconstructed from SPECIMENVAR/SPECIMENTEXT headers with the arithmetic
/// id-offset formula; specimen numbering is sparse, not contiguous.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoreSpecimen {
    /// Specimen index k in [1, 200]
    pub specimen_number: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_bottom: Option<f64>,

    /// Specimen diameter (mm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter_monster: Option<f64>,
    /// Sampler diameter (mm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter_monstersteekapparaat: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monstercode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monsterdatum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monstertijd: Option<String>,
    /// Disturbed ("geroerd") or undisturbed ("ongeroerd") sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geroerd_ongeroerd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monstersteekapparaat: Option<String>,
    /// Thick- or thin-walled sampler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dik_dunwandig: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monstermethode: Option<String>,

    /// Free-form remarks from repeated specimen text rows
    pub remarks: Vec<String>,
}

impl BoreSpecimen {
    /// A specimen is materialized only when at least one field was present
    pub fn is_empty(&self) -> bool {
        self.depth_top.is_none()
            && self.depth_bottom.is_none()
            && self.diameter_monster.is_none()
            && self.diameter_monstersteekapparaat.is_none()
            && self.monstercode.is_none()
            && self.monsterdatum.is_none()
            && self.monstertijd.is_none()
            && self.geroerd_ongeroerd.is_none()
            && self.monstersteekapparaat.is_none()
            && self.dik_dunwandig.is_none()
            && self.monstermethode.is_none()
            && self.remarks.is_empty()
    }
}

// =============================================================================
// Pre-Excavation Layers (CPT)
// =============================================================================

/// Soil removed before CPT testing began, reconstructed from SPECIMENVAR
/// entries whose values are cumulative bottom depths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreExcavationLayer {
    pub depth_top: f64,
    pub depth_bottom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_thickness() {
        let layer = BoreLayer {
            depth_top: 0.5,
            depth_bottom: 2.0,
            soil_code: "Kz1".to_string(),
            additional_codes: vec![],
            description: None,
            sand_median: None,
            gravel_median: None,
            clay_percent: None,
            silt_percent: None,
            sand_percent: None,
            gravel_percent: None,
            organic_percent: None,
        };
        assert!((layer.thickness() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_specimen_emptiness() {
        let mut specimen = BoreSpecimen {
            specimen_number: 3,
            ..BoreSpecimen::default()
        };
        assert!(specimen.is_empty());

        specimen.diameter_monster = Some(66.0);
        assert!(!specimen.is_empty());
    }
}
