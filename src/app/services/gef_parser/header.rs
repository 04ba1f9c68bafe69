//! GEF header schema parsing
//!
//! Converts the raw keyword map produced by the tokenizer into the typed
//! [`GefHeaders`] view. Malformed optional headers never fail the parse:
//! they downgrade to "absent" plus a warning where the warning catalog has an
//! entry for them, and are dropped silently where it does not.

use tracing::debug;

use super::tokenizer::RawHeaderMap;
use crate::app::models::Warning;
use crate::app::models::headers::{
    ColumnInfo, ColumnMinMax, ColumnVoid, CompanyId, GefDate, GefHeaders, GefId, GefTime,
    MeasurementText, MeasurementVar, ReportCode, SpecimenText, SpecimenVar, XyId, ZId,
};
use crate::app::services::code_tables::coordinate_systems;
use crate::constants::{DEFAULT_COORDINATE_DELTA, DEFAULT_COORDINATE_SYSTEM_CODE, keywords};

/// Parse the raw header map into typed headers plus accumulated warnings
pub fn parse_headers(file: &str, raw: &RawHeaderMap) -> (GefHeaders, Vec<Warning>) {
    let mut warnings = Vec::new();
    let mut headers = GefHeaders {
        gef_id: parse_gef_id(raw),
        report_code: parse_report_code(raw),
        test_id: first_token(raw, keywords::TESTID),
        project_id: first_token(raw, keywords::PROJECTID),
        company_id: parse_company_id(raw),
        xy_id: None,
        z_id: parse_z_id(raw),
        start_date: parse_date(raw, keywords::STARTDATE),
        start_time: parse_time(raw),
        file_date: parse_date(raw, keywords::FILEDATE),
        file_owner: first_token(raw, keywords::FILEOWNER),
        os: first_token(raw, keywords::OS),
        column: first_token(raw, keywords::COLUMN).and_then(|token| token.parse().ok()),
        column_info: Vec::new(),
        column_separator: first_token(raw, keywords::COLUMNSEPARATOR),
        record_separator: first_token(raw, keywords::RECORDSEPARATOR),
        column_void: parse_column_void(raw),
        column_min_max: parse_column_min_max(raw),
        last_scan: first_token(raw, keywords::LASTSCAN).and_then(|token| token.parse().ok()),
        data_format: first_token(raw, keywords::DATAFORMAT),
        measurement_var: parse_measurement_vars(raw),
        measurement_text: parse_measurement_texts(raw),
        specimen_var: parse_specimen_vars(raw),
        specimen_text: parse_specimen_texts(raw),
        comments: parse_comments(raw),
    };

    headers.xy_id = parse_xy_id(file, raw, &mut warnings);
    headers.column_info = parse_column_info(file, raw, &mut warnings);

    debug!(
        file,
        columns = headers.column_info.len(),
        measurement_vars = headers.measurement_var.len(),
        measurement_texts = headers.measurement_text.len(),
        "parsed GEF headers"
    );

    (headers, warnings)
}

// =============================================================================
// Row and Token Access
// =============================================================================

fn rows<'a>(raw: &'a RawHeaderMap, keyword: &str) -> &'a [Vec<String>] {
    raw.get(keyword).map(Vec::as_slice).unwrap_or(&[])
}

fn first_row<'a>(raw: &'a RawHeaderMap, keyword: &str) -> Option<&'a Vec<String>> {
    raw.get(keyword).and_then(|occurrences| occurrences.first())
}

fn first_token(raw: &RawHeaderMap, keyword: &str) -> Option<String> {
    first_row(raw, keyword)
        .and_then(|row| row.first())
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn token_i32(row: &[String], index: usize) -> Option<i32> {
    row.get(index).and_then(|token| token.trim().parse().ok())
}

fn token_f64(row: &[String], index: usize) -> Option<f64> {
    row.get(index).and_then(|token| token.trim().parse().ok())
}

fn token_string(row: &[String], index: usize) -> Option<String> {
    row.get(index)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn all_blank(row: &[String]) -> bool {
    row.iter().all(|token| token.trim().is_empty())
}

// =============================================================================
// Identity Headers
// =============================================================================

fn parse_gef_id(raw: &RawHeaderMap) -> Option<GefId> {
    let row = first_row(raw, keywords::GEFID)?;
    Some(GefId {
        major: token_i32(row, 0)?,
        minor: token_i32(row, 1).unwrap_or(0),
        patch: token_i32(row, 2).unwrap_or(0),
    })
}

fn parse_report_code(raw: &RawHeaderMap) -> Option<ReportCode> {
    // PROCEDURECODE is the older spelling of the same header; files carry
    // one or the other
    let row = first_row(raw, keywords::REPORTCODE)
        .or_else(|| first_row(raw, keywords::PROCEDURECODE))?;
    let code = token_string(row, 0)?;
    Some(ReportCode {
        code,
        major: token_i32(row, 1).unwrap_or(0),
        minor: token_i32(row, 2).unwrap_or(0),
        patch: token_i32(row, 3).unwrap_or(0),
    })
}

fn parse_company_id(raw: &RawHeaderMap) -> Option<CompanyId> {
    let row = first_row(raw, keywords::COMPANYID)?;
    let name = token_string(row, 0)?;
    Some(CompanyId {
        name,
        address: token_string(row, 1),
        country_code: token_string(row, 2),
    })
}

// =============================================================================
// Spatial Headers
// =============================================================================

fn parse_xy_id(file: &str, raw: &RawHeaderMap, warnings: &mut Vec<Warning>) -> Option<XyId> {
    let row = first_row(raw, keywords::XYID)?;
    if row.len() < 3 || all_blank(row) {
        return None;
    }

    let raw_code = token_string(row, 0)?;
    let x = token_f64(row, 1)?;
    let y = token_f64(row, 2)?;

    // Silent-correction policy: unknown coordinate systems are assumed RD,
    // the parse continues and the substitution is warned
    let coordinate_system_code = if coordinate_systems::is_known(&raw_code) {
        raw_code
    } else {
        warnings.push(Warning::UnknownCoordinateSystem {
            file: file.to_string(),
            coordinate_code: raw_code,
        });
        DEFAULT_COORDINATE_SYSTEM_CODE.to_string()
    };

    Some(XyId {
        coordinate_system_code,
        x,
        y,
        delta_x: token_f64(row, 3).unwrap_or(DEFAULT_COORDINATE_DELTA),
        delta_y: token_f64(row, 4).unwrap_or(DEFAULT_COORDINATE_DELTA),
    })
}

fn parse_z_id(raw: &RawHeaderMap) -> Option<ZId> {
    let row = first_row(raw, keywords::ZID)?;
    if row.len() < 2 || all_blank(row) {
        return None;
    }

    // The raw code is stored even when unrecognized; default-NAP semantics
    // are applied at the metadata layer, which also warns
    let height_system_code = token_string(row, 0)?;
    Some(ZId {
        height_system_code,
        height: token_f64(row, 1),
        delta_z: token_f64(row, 2),
    })
}

// =============================================================================
// Temporal Headers
// =============================================================================

fn parse_date(raw: &RawHeaderMap, keyword: &str) -> Option<GefDate> {
    let row = first_row(raw, keyword)?;
    // Loose validation: out-of-range fields (day 0 and friends) are stored
    // as given and presentation decides
    Some(GefDate {
        year: token_i32(row, 0)?,
        month: token_i32(row, 1).unwrap_or(0),
        day: token_i32(row, 2).unwrap_or(0),
    })
}

fn parse_time(raw: &RawHeaderMap) -> Option<GefTime> {
    let row = first_row(raw, keywords::STARTTIME)?;
    Some(GefTime {
        hour: token_i32(row, 0)?,
        minute: token_i32(row, 1).unwrap_or(0),
        second: token_f64(row, 2),
    })
}

// =============================================================================
// Data Shape Headers
// =============================================================================

fn parse_column_info(file: &str, raw: &RawHeaderMap, warnings: &mut Vec<Warning>) -> Vec<ColumnInfo> {
    let mut entries = Vec::new();
    let mut missing_quantity = 0usize;

    for (position, row) in rows(raw, keywords::COLUMNINFO).iter().enumerate() {
        let column_number = token_i32(row, 0).unwrap_or(position as i32 + 1);
        let unit = token_string(row, 1).unwrap_or_default();
        let name =
            token_string(row, 2).unwrap_or_else(|| format!("column {column_number}"));

        let quantity_number = match token_i32(row, 3) {
            Some(quantity) => quantity,
            None => {
                missing_quantity += 1;
                0
            }
        };

        entries.push(ColumnInfo {
            column_number,
            name,
            unit,
            quantity_number,
        });
    }

    if missing_quantity > 0 {
        warnings.push(Warning::ColumnInfoMissingQuantity {
            file: file.to_string(),
            entry_count: missing_quantity,
        });
    }

    entries
}

fn parse_column_void(raw: &RawHeaderMap) -> Vec<ColumnVoid> {
    // Numeric parse failures drop the entry, never the parse
    rows(raw, keywords::COLUMNVOID)
        .iter()
        .filter_map(|row| {
            Some(ColumnVoid {
                column_number: token_i32(row, 0)?,
                void_value: token_f64(row, 1)?,
            })
        })
        .collect()
}

fn parse_column_min_max(raw: &RawHeaderMap) -> Vec<ColumnMinMax> {
    rows(raw, keywords::COLUMNMINMAX)
        .iter()
        .filter_map(|row| {
            Some(ColumnMinMax {
                column_number: token_i32(row, 0)?,
                min: token_f64(row, 1)?,
                max: token_f64(row, 2)?,
            })
        })
        .collect()
}

// =============================================================================
// Measurement and Specimen Headers
// =============================================================================

fn parse_measurement_vars(raw: &RawHeaderMap) -> Vec<MeasurementVar> {
    rows(raw, keywords::MEASUREMENTVAR)
        .iter()
        .filter_map(|row| {
            Some(MeasurementVar {
                id: token_i32(row, 0)?,
                value: token_string(row, 1).unwrap_or_default(),
                unit: token_string(row, 2).unwrap_or_default(),
            })
        })
        .collect()
}

fn parse_measurement_texts(raw: &RawHeaderMap) -> Vec<MeasurementText> {
    rows(raw, keywords::MEASUREMENTTEXT)
        .iter()
        .filter_map(|row| {
            Some(MeasurementText {
                id: token_i32(row, 0)?,
                text: token_string(row, 1).unwrap_or_default(),
            })
        })
        .collect()
}

fn parse_specimen_vars(raw: &RawHeaderMap) -> Vec<SpecimenVar> {
    rows(raw, keywords::SPECIMENVAR)
        .iter()
        .filter_map(|row| {
            Some(SpecimenVar {
                id: token_i32(row, 0)?,
                value: token_f64(row, 1),
                description: token_string(row, 3)
                    .or_else(|| token_string(row, 2))
                    .unwrap_or_default(),
            })
        })
        .collect()
}

fn parse_specimen_texts(raw: &RawHeaderMap) -> Vec<SpecimenText> {
    rows(raw, keywords::SPECIMENTEXT)
        .iter()
        .filter_map(|row| {
            Some(SpecimenText {
                id: token_i32(row, 0)?,
                text: token_string(row, 1).unwrap_or_default(),
            })
        })
        .collect()
}

fn parse_comments(raw: &RawHeaderMap) -> Vec<String> {
    rows(raw, keywords::COMMENT)
        .iter()
        .map(|row| row.join(", ").trim().to_string())
        .filter(|comment| !comment.is_empty())
        .collect()
}
