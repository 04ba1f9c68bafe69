//! Specimen extraction from SPECIMENVAR/SPECIMENTEXT headers
//!
//! Specimen k (1-based) occupies header ids base + 7k, where the base is
//! an attribute-specific offset. Only populated specimens are emitted, so
//! a file declaring a single diameter at id 13 yields exactly one
//! specimen carrying that diameter and nothing else.

use tracing::debug;

use crate::app::models::headers::GefHeaders;
use crate::app::models::{BoreSpecimen, PreExcavationLayer};
use crate::constants::{
    MAX_SPECIMEN_INDEX, MEASUREMENTVAR_PRE_EXCAVATED_DEPTH, is_suppressed_text,
    specimen_offsets,
};

/// Scan the specimen id space and collect every populated specimen
pub fn parse_bore_specimens(headers: &GefHeaders) -> Vec<BoreSpecimen> {
    let specimens: Vec<BoreSpecimen> = (1..=MAX_SPECIMEN_INDEX)
        .filter_map(|index| parse_specimen(headers, index))
        .collect();

    if !specimens.is_empty() {
        debug!(specimens = specimens.len(), "extracted bore specimens");
    }
    specimens
}

fn parse_specimen(headers: &GefHeaders, index: i32) -> Option<BoreSpecimen> {
    let stride = specimen_offsets::STRIDE * index;
    let numeric =
        |offset: i32| headers.specimen_var(offset + stride).and_then(|var| var.value);
    let textual = |offset: i32| {
        headers
            .specimen_text(offset + stride)
            .map(|text| text.text.trim().to_string())
            .filter(|value| !is_suppressed_text(value))
    };

    // Repeated text rows under an already-consumed id are free-form remarks
    let id_range = (specimen_offsets::TEXT_FIRST + stride)..=(specimen_offsets::TEXT_LAST + stride);
    let mut seen: std::collections::HashSet<i32> = std::collections::HashSet::new();
    let remarks: Vec<String> = headers
        .specimen_text
        .iter()
        .filter(|text| id_range.contains(&text.id))
        .filter(|text| !seen.insert(text.id))
        .map(|text| text.text.trim().to_string())
        .filter(|text| !is_suppressed_text(text))
        .collect();

    let specimen = BoreSpecimen {
        specimen_number: index,
        depth_top: numeric(specimen_offsets::DEPTH_TOP),
        depth_bottom: numeric(specimen_offsets::DEPTH_BOTTOM),
        diameter_monster: numeric(specimen_offsets::DIAMETER_MONSTER),
        diameter_monstersteekapparaat: numeric(specimen_offsets::DIAMETER_MONSTERSTEEKAPPARAAT),
        monstercode: textual(specimen_offsets::TEXT_FIRST),
        monsterdatum: textual(specimen_offsets::TEXT_FIRST + 1),
        monstertijd: textual(specimen_offsets::TEXT_FIRST + 2),
        geroerd_ongeroerd: textual(specimen_offsets::TEXT_FIRST + 3),
        monstersteekapparaat: textual(specimen_offsets::TEXT_FIRST + 4),
        dik_dunwandig: textual(specimen_offsets::TEXT_FIRST + 5),
        monstermethode: textual(specimen_offsets::TEXT_LAST),
        remarks,
    };

    if specimen.is_empty() {
        None
    } else {
        Some(specimen)
    }
}

/// Reconstruct the pre-excavated soil column of a CPT file
///
/// CPT producers record removed layers as SPECIMENVAR entries whose values
/// are cumulative bottom depths, with an optional SPECIMENTEXT description
/// under the same id. Files that only state the total via MEASUREMENTVAR 13
/// yield a single undescribed layer.
pub fn parse_pre_excavation_layers(headers: &GefHeaders) -> Vec<PreExcavationLayer> {
    let mut vars: Vec<_> = headers
        .specimen_var
        .iter()
        .filter_map(|var| var.value.map(|depth| (var.id, depth)))
        .filter(|(_, depth)| *depth > 0.0)
        .collect();
    vars.sort_by_key(|(id, _)| *id);

    if !vars.is_empty() {
        let mut layers = Vec::with_capacity(vars.len());
        let mut previous_bottom = 0.0;
        for (id, depth_bottom) in vars {
            if depth_bottom <= previous_bottom {
                continue;
            }
            let description = headers
                .specimen_text(id)
                .map(|text| text.text.trim().to_string())
                .filter(|text| !is_suppressed_text(text));
            layers.push(PreExcavationLayer {
                depth_top: previous_bottom,
                depth_bottom,
                description,
            });
            previous_bottom = depth_bottom;
        }
        return layers;
    }

    headers
        .measurement_var_value(MEASUREMENTVAR_PRE_EXCAVATED_DEPTH)
        .filter(|depth| *depth > 0.0)
        .map(|depth| PreExcavationLayer {
            depth_top: 0.0,
            depth_bottom: depth,
            description: None,
        })
        .into_iter()
        .collect()
}
