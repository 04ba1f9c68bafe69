//! Depth correction pipeline for CPT rows
//!
//! Computes the inclination-corrected true depth and the datum-relative
//! elevation per row, and flags rows inside the pre-excavated zone as void.
//! Pure: consumes the parsed rows and returns new ones; rows are immutable
//! afterwards.

use crate::app::models::Row;
use crate::app::models::headers::GefHeaders;
use crate::constants::{MEASUREMENTVAR_PRE_EXCAVATED_DEPTH, quantities};

/// Add the computed depth columns to every row
///
/// True depth resolution order:
/// 1. a corrected-depth column (quantity 11) is trusted directly (absolute
///    value);
/// 2. penetration length (quantity 1) plus resultant inclination (quantity
///    8) yield the cumulative, inclination-corrected arc length;
/// 3. penetration length alone is used uncorrected.
///
/// Elevation is `zid.height - true_depth` when the file declares a usable
/// ZID; negative below the datum. Pre-excavation voiding follows
/// MEASUREMENTVAR 13: rows with penetration above the pre-excavated depth
/// precede real testing and must be excluded from interpretation.
pub fn add_computed_depth_columns(rows: Vec<Row>, headers: &GefHeaders) -> Vec<Row> {
    let corrected_column = headers.column_name_for_quantity(quantities::CORRECTED_DEPTH);
    let penetration_column = headers.column_name_for_quantity(quantities::PENETRATION_LENGTH);
    let inclination_column = headers.column_name_for_quantity(quantities::INCLINATION_RESULTANT);

    let datum_height = headers.z_id.as_ref().and_then(|zid| zid.height);
    let pre_excavated_depth = headers
        .measurement_var_value(MEASUREMENTVAR_PRE_EXCAVATED_DEPTH)
        .filter(|&depth| depth > 0.0);

    let mut previous_depth: Option<f64> = None;
    let mut previous_penetration: Option<f64> = None;

    rows.into_iter()
        .map(|mut row| {
            row.true_depth = match (corrected_column, penetration_column) {
                (Some(corrected), _) => row.value(corrected).map(f64::abs),
                (None, Some(penetration)) => match inclination_column {
                    Some(inclination) => corrected_step(
                        row.value(penetration),
                        row.value(inclination),
                        previous_depth,
                        previous_penetration,
                    ),
                    None => row.value(penetration).map(f64::abs),
                },
                (None, None) => None,
            };

            if let Some(depth) = row.true_depth {
                previous_depth = Some(depth);
            }
            if let Some(penetration) =
                penetration_column.and_then(|column| row.value(column))
            {
                previous_penetration = Some(penetration);
            }

            row.elevation = match (datum_height, row.true_depth) {
                (Some(height), Some(depth)) => Some(height - depth),
                _ => None,
            };

            if let Some(pre_excavated) = pre_excavated_depth {
                row.pre_excavated_depth = Some(pre_excavated);
                row.is_void = penetration_column
                    .and_then(|column| row.value(column))
                    .is_some_and(|penetration| penetration < pre_excavated);
            }

            row
        })
        .collect()
}

/// One cumulative inclination-corrected depth step
///
/// `depth[i] = depth[i-1] + cos(incl[i]) * |pen[i] - pen[i-1]|`, trigonometry
/// in degrees. The first row (no previous state) anchors at the absolute
/// penetration. A missing inclination reading contributes an uncorrected
/// step; a missing penetration reading yields no depth for the row and the
/// running state carries over.
fn corrected_step(
    penetration: Option<f64>,
    inclination: Option<f64>,
    previous_depth: Option<f64>,
    previous_penetration: Option<f64>,
) -> Option<f64> {
    let penetration = penetration?;

    match (previous_depth, previous_penetration) {
        (Some(depth), Some(previous)) => {
            let step = (penetration - previous).abs();
            let factor = inclination
                .map(|degrees| (degrees * std::f64::consts::PI / 180.0).cos())
                .unwrap_or(1.0);
            Some(depth + factor * step)
        }
        _ => Some(penetration.abs()),
    }
}
