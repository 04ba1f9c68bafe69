//! Application constants for the GEF processor
//!
//! This module contains the GEF header keywords, default codes, quantity
//! numbers and other fixed values used throughout the parsing pipeline.

// =============================================================================
// Header Keywords
// =============================================================================

/// GEF header keywords recognized by the header schema parser
pub mod keywords {
    pub const GEFID: &str = "GEFID";
    pub const REPORTCODE: &str = "REPORTCODE";
    pub const PROCEDURECODE: &str = "PROCEDURECODE";
    pub const TESTID: &str = "TESTID";
    pub const PROJECTID: &str = "PROJECTID";
    pub const COMPANYID: &str = "COMPANYID";
    pub const XYID: &str = "XYID";
    pub const ZID: &str = "ZID";
    pub const COLUMN: &str = "COLUMN";
    pub const COLUMNINFO: &str = "COLUMNINFO";
    pub const COLUMNSEPARATOR: &str = "COLUMNSEPARATOR";
    pub const RECORDSEPARATOR: &str = "RECORDSEPARATOR";
    pub const COLUMNVOID: &str = "COLUMNVOID";
    pub const COLUMNMINMAX: &str = "COLUMNMINMAX";
    pub const MEASUREMENTVAR: &str = "MEASUREMENTVAR";
    pub const MEASUREMENTTEXT: &str = "MEASUREMENTTEXT";
    pub const SPECIMENVAR: &str = "SPECIMENVAR";
    pub const SPECIMENTEXT: &str = "SPECIMENTEXT";
    pub const STARTDATE: &str = "STARTDATE";
    pub const STARTTIME: &str = "STARTTIME";
    pub const FILEDATE: &str = "FILEDATE";
    pub const FILEOWNER: &str = "FILEOWNER";
    pub const OS: &str = "OS";
    pub const LASTSCAN: &str = "LASTSCAN";
    pub const DATAFORMAT: &str = "DATAFORMAT";
    pub const COMMENT: &str = "COMMENT";
}

// =============================================================================
// Report Code Classification
// =============================================================================

/// Case-insensitive substring identifying a borehole report
pub const REPORT_CODE_BORE_MARKER: &str = "bore";

/// Case-insensitive substrings identifying explicitly unsupported reports
pub const REPORT_CODE_UNSUPPORTED_MARKERS: &[&str] = &["diss", "siev"];

// =============================================================================
// Coordinate and Height System Defaults
// =============================================================================

/// Default coordinate system code (Dutch RD / Rijksdriehoeksmeting)
///
/// Unrecognized XYID coordinate system codes fall back to this value with a
/// warning rather than failing the parse.
pub const DEFAULT_COORDINATE_SYSTEM_CODE: &str = "31000";

/// Default height system code (NAP, Normaal Amsterdams Peil)
pub const DEFAULT_HEIGHT_SYSTEM_CODE: &str = "31000";

/// Default XYID coordinate precision when deltaX/deltaY are omitted
pub const DEFAULT_COORDINATE_DELTA: f64 = 0.01;

/// EPSG code WGS84 reprojections target
pub const WGS84_EPSG: &str = "EPSG:4326";

// =============================================================================
// Quantity Numbers
// =============================================================================

/// Standardized GEF quantity numbers identifying the physical meaning of a
/// data column, independent of the column's free-text name
pub mod quantities {
    /// Penetration length (uncorrected, meters)
    pub const PENETRATION_LENGTH: i32 = 1;

    /// Cone resistance qc (MPa)
    pub const CONE_RESISTANCE: i32 = 2;

    /// Local friction fs (MPa)
    pub const LOCAL_FRICTION: i32 = 3;

    /// Friction ratio Rf (%)
    pub const FRICTION_RATIO: i32 = 4;

    /// Pore pressure u2 (MPa)
    pub const PORE_PRESSURE_U2: i32 = 6;

    /// Inclination, resultant (degrees)
    pub const INCLINATION_RESULTANT: i32 = 8;

    /// Corrected depth (meters)
    pub const CORRECTED_DEPTH: i32 = 11;

    /// Quantity number assigned to COLUMNINFO rows missing one
    pub const UNKNOWN: i32 = 0;

    /// BORE: depth of layer top (meters)
    pub const BORE_DEPTH_TOP: i32 = 1;

    /// BORE: depth of layer bottom (meters)
    pub const BORE_DEPTH_BOTTOM: i32 = 2;
}

/// Quantity numbers a CPT file is required to declare; absence is warned
pub const REQUIRED_CPT_QUANTITIES: &[i32] = &[
    quantities::PENETRATION_LENGTH,
    quantities::CONE_RESISTANCE,
];

// =============================================================================
// Measurement Variable IDs with Pipeline Semantics
// =============================================================================

/// MEASUREMENTVAR id for the pre-excavated depth (meters). Rows above this
/// depth precede real testing and are flagged void.
pub const MEASUREMENTVAR_PRE_EXCAVATED_DEPTH: i32 = 13;

/// MEASUREMENTTEXT id carrying the drilling-method code in BORE files
pub const MEASUREMENTTEXT_BORE_DRILLING_METHOD: i32 = 4;

// =============================================================================
// Data Block Parsing
// =============================================================================

/// Default BORE record separator when no RECORDSEPARATOR header is declared
pub const DEFAULT_RECORD_SEPARATOR: char = '!';

/// Default BORE field separator when no COLUMNSEPARATOR header is declared
pub const DEFAULT_BORE_COLUMN_SEPARATOR: char = ';';

/// Quote character stripped from BORE text fields
pub const BORE_TEXT_QUOTE: char = '\'';

/// Name fragments (matched case-insensitively) that mark a CPT column as
/// depth-like; combined with unit "m" the column is normalized to its
/// absolute value because some producers emit negative depth
pub const DEPTH_COLUMN_KEYWORDS: &[&str] =
    &["penetration", "sondeer", "diepte", "lengte", "length"];

/// Unit a depth-like column must declare for sign normalization to apply
pub const DEPTH_COLUMN_UNIT: &str = "m";

/// A trailing BORE text token is reclassified from "additional soil code" to
/// free-text description when longer than this many characters
pub const DESCRIPTION_LENGTH_THRESHOLD: usize = 10;

// =============================================================================
// Specimen Decomposition
// =============================================================================

/// Specimen header ids follow an arithmetic offset formula keyed by specimen
/// index k: id = offset + 7k. These constants name the offsets.
pub mod specimen_offsets {
    /// SPECIMENVAR: depth of specimen top
    pub const DEPTH_TOP: i32 = 4;

    /// SPECIMENVAR: depth of specimen bottom
    pub const DEPTH_BOTTOM: i32 = 5;

    /// SPECIMENVAR: specimen diameter
    pub const DIAMETER_MONSTER: i32 = 6;

    /// SPECIMENVAR: sampler diameter
    pub const DIAMETER_MONSTERSTEEKAPPARAAT: i32 = 7;

    /// SPECIMENTEXT offsets 4..=10 in field order: monstercode, monsterdatum,
    /// monstertijd, geroerd/ongeroerd, monstersteekapparaat, dik/dunwandig,
    /// monstermethode
    pub const TEXT_FIRST: i32 = 4;
    pub const TEXT_LAST: i32 = 10;

    /// Stride between consecutive specimens
    pub const STRIDE: i32 = 7;
}

/// Maximum specimen index k; the offset formula domain is k in [1, 200]
pub const MAX_SPECIMEN_INDEX: i32 = 200;

// =============================================================================
// Metadata Decoding
// =============================================================================

/// Raw measurement-text values treated as "not provided" and suppressed from
/// the processed metadata view
pub const SUPPRESSED_TEXT_VALUES: &[&str] = &["", "-", "0"];

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a column name/unit pair identifies a depth-like column
pub fn is_depth_column(name: &str, unit: &str) -> bool {
    if unit.trim() != DEPTH_COLUMN_UNIT {
        return false;
    }
    let lowered = name.to_lowercase();
    DEPTH_COLUMN_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Check whether a raw report code names an explicitly unsupported file kind
pub fn is_unsupported_report_code(report_code: &str) -> bool {
    let lowered = report_code.to_lowercase();
    REPORT_CODE_UNSUPPORTED_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Check whether a raw measurement text value should be suppressed
pub fn is_suppressed_text(value: &str) -> bool {
    SUPPRESSED_TEXT_VALUES.contains(&value.trim())
}
