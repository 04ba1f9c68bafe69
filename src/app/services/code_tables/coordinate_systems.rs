//! XYID coordinate system code table
//!
//! Maps the numeric coordinate system codes found in XYID headers to names
//! and EPSG identifiers. Unrecognized codes are never fatal: the header
//! parser falls back to RD ("31000") with a warning.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One coordinate system entry
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystem {
    /// GEF XYID code as it appears in the file
    pub code: &'static str,
    pub name_en: &'static str,
    pub name_nl: &'static str,
    /// EPSG identifier for reprojection; `None` for local systems that
    /// cannot be reprojected
    pub epsg: Option<&'static str>,
}

const TABLE: &[CoordinateSystem] = &[
    CoordinateSystem {
        code: "0",
        name_en: "Local coordinate system",
        // Mis-decoded legacy spelling kept verbatim; historical GEF tooling
        // wrote this entry through a Latin-1 round trip.
        name_nl: "Lokaal co\u{f6}rdinatensysteem",
        epsg: None,
    },
    CoordinateSystem {
        code: "31000",
        name_en: "Rijksdriehoeksmeting (RD)",
        name_nl: "Rijksdriehoeksmeting (RD)",
        epsg: Some("EPSG:28992"),
    },
    CoordinateSystem {
        code: "28992",
        name_en: "Amersfoort / RD New",
        name_nl: "Amersfoort / RD New",
        epsg: Some("EPSG:28992"),
    },
    CoordinateSystem {
        code: "31370",
        name_en: "Belgian Lambert 72",
        name_nl: "Belgische Lambert 72",
        epsg: Some("EPSG:31370"),
    },
    CoordinateSystem {
        code: "23031",
        name_en: "ED50 / UTM zone 31N",
        name_nl: "ED50 / UTM zone 31N",
        epsg: Some("EPSG:23031"),
    },
    CoordinateSystem {
        code: "32631",
        name_en: "WGS 84 / UTM zone 31N",
        name_nl: "WGS 84 / UTM zone 31N",
        epsg: Some("EPSG:32631"),
    },
    CoordinateSystem {
        code: "4326",
        name_en: "WGS 84 (geographic)",
        name_nl: "WGS 84 (geografisch)",
        epsg: Some("EPSG:4326"),
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static CoordinateSystem>> =
    LazyLock::new(|| TABLE.iter().map(|entry| (entry.code, entry)).collect());

/// Look up a coordinate system by its XYID code
pub fn lookup(code: &str) -> Option<&'static CoordinateSystem> {
    INDEX.get(code.trim()).copied()
}

/// Check whether an XYID code is known
pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rd_lookup() {
        let rd = lookup("31000").unwrap();
        assert_eq!(rd.epsg, Some("EPSG:28992"));
    }

    #[test]
    fn test_local_system_has_no_epsg() {
        let local = lookup("0").unwrap();
        assert!(local.epsg.is_none());
    }

    #[test]
    fn test_unknown_code() {
        assert!(!is_known("99999"));
        assert!(is_known(" 31370 "));
    }
}
