//! Header-to-metadata processing

use tracing::{debug, warn};

use crate::app::models::headers::GefHeaders;
use crate::app::models::{Extension, FileType};
use crate::app::services::code_tables::{
    self, Category, coordinate_systems, height_systems, soil,
};
use crate::config::{Locale, ParseOptions};
use crate::constants::{
    DEFAULT_HEIGHT_SYSTEM_CODE, MEASUREMENTTEXT_BORE_DRILLING_METHOD, WGS84_EPSG,
    is_suppressed_text,
};

use super::{MetadataGroup, MetadataItem, ProcessedMetadata, Projector, Wgs84Position};

/// Display order of metadata groups; `Reserved` is intentionally absent
const CATEGORY_ORDER: &[Category] = &[
    Category::Project,
    Category::Location,
    Category::Equipment,
    Category::Procedure,
    Category::Results,
    Category::Remarks,
];

/// Build the presentation-ready metadata view for a parsed file
pub fn process_metadata(
    file: &str,
    headers: &GefHeaders,
    file_type: FileType,
    extension: Extension,
    options: &ParseOptions,
    projector: Option<&dyn Projector>,
) -> ProcessedMetadata {
    let dutch = options.locale == Locale::Nl;

    let coordinate_system = headers.xy_id.as_ref().and_then(|xy| {
        coordinate_systems::lookup(&xy.coordinate_system_code)
            .map(|system| localized(system.name_en, system.name_nl, dutch))
    });

    // Unknown height codes fall back to NAP for display; the validation
    // pass has already warned about the original code
    let height_system = headers.z_id.as_ref().and_then(|z| {
        height_systems::lookup(&z.height_system_code)
            .or_else(|| height_systems::lookup(DEFAULT_HEIGHT_SYSTEM_CODE))
            .map(|system| localized(system.name_en, system.name_nl, dutch))
    });

    let wgs84 = derive_wgs84(file, headers, projector);

    let groups = build_groups(headers, file_type, extension, dutch);
    debug!(file, groups = groups.len(), "processed metadata");

    ProcessedMetadata {
        filename: file.to_string(),
        file_type,
        extension,
        coordinate_system,
        height_system,
        wgs84,
        groups,
    }
}

fn localized(en: &str, nl: &str, dutch: bool) -> String {
    if dutch { nl.to_string() } else { en.to_string() }
}

fn derive_wgs84(
    file: &str,
    headers: &GefHeaders,
    projector: Option<&dyn Projector>,
) -> Option<Wgs84Position> {
    let xy = headers.xy_id.as_ref()?;
    let epsg = coordinate_systems::lookup(&xy.coordinate_system_code)?.epsg?;

    // Already-geographic positions need no projector: XYID carries
    // longitude in x and latitude in y
    if epsg == WGS84_EPSG {
        return checked_position(file, xy.y, xy.x);
    }

    match projector?.to_wgs84(epsg, xy.x, xy.y) {
        Ok((latitude, longitude)) => checked_position(file, latitude, longitude),
        Err(error) => {
            warn!(file, epsg, %error, "WGS84 projection failed");
            None
        }
    }
}

fn checked_position(file: &str, latitude: f64, longitude: f64) -> Option<Wgs84Position> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        warn!(file, latitude, longitude, "projected position out of range");
        return None;
    }
    Some(Wgs84Position {
        latitude,
        longitude,
    })
}

/// Decode measurement texts and variables into category groups
///
/// Reserved ids, ids absent from the dictionaries and suppressed values
/// ("", "-", "0") are dropped. Within a group, texts precede variables,
/// each in file order.
fn build_groups(
    headers: &GefHeaders,
    file_type: FileType,
    extension: Extension,
    dutch: bool,
) -> Vec<MetadataGroup> {
    let mut text_items: Vec<(Category, MetadataItem)> = Vec::new();
    for text in &headers.measurement_text {
        let Some(info) = code_tables::measurement_text_info(file_type, extension, text.id) else {
            continue;
        };
        if info.category == Category::Reserved {
            continue;
        }
        let value = text.text.trim();
        if is_suppressed_text(value) {
            continue;
        }
        // BORE text 4 carries a drilling-method code, expanded when known
        let value = if file_type == FileType::Bore
            && text.id == MEASUREMENTTEXT_BORE_DRILLING_METHOD
        {
            match soil::drilling_method(value) {
                Some(method) => localized(method.description_en, method.description_nl, dutch),
                None => value.to_string(),
            }
        } else {
            value.to_string()
        };
        text_items.push((
            info.category,
            MetadataItem {
                id: text.id,
                label: localized_static(info.description_en, info.description_nl, dutch),
                value,
                unit: None,
            },
        ));
    }

    let mut var_items: Vec<(Category, MetadataItem)> = Vec::new();
    for var in &headers.measurement_var {
        let Some(info) = code_tables::measurement_var_info(file_type, extension, var.id) else {
            continue;
        };
        if info.category == Category::Reserved {
            continue;
        }
        let raw = var.value.trim();
        if raw.is_empty() {
            continue;
        }
        let value = info
            .option_meaning(raw, dutch)
            .map(str::to_string)
            .unwrap_or_else(|| raw.to_string());
        let unit = if info.unit.is_empty() {
            (!var.unit.trim().is_empty()).then(|| var.unit.trim().to_string())
        } else {
            Some(info.unit.to_string())
        };
        var_items.push((
            info.category,
            MetadataItem {
                id: var.id,
                label: localized_static(info.description_en, info.description_nl, dutch),
                value,
                unit,
            },
        ));
    }

    CATEGORY_ORDER
        .iter()
        .filter_map(|&category| {
            let items: Vec<MetadataItem> = text_items
                .iter()
                .chain(var_items.iter())
                .filter(|(item_category, _)| *item_category == category)
                .map(|(_, item)| item.clone())
                .collect();
            (!items.is_empty()).then_some(MetadataGroup { category, items })
        })
        .collect()
}

fn localized_static(en: &'static str, nl: Option<&'static str>, dutch: bool) -> String {
    if dutch {
        nl.unwrap_or(en).to_string()
    } else {
        en.to_string()
    }
}
