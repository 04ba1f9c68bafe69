//! Soil, color, drilling-method and country code tables for BORE data
//!
//! Soil codes follow NEN 5104: a main soil letter optionally followed by
//! admixture codes ("Zs1" = sand, weakly silty). Colors combine an optional
//! intensity prefix with a base color ("DOBR" = dark brown).

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

// =============================================================================
// Soil Codes
// =============================================================================

/// One soil or admixture code entry
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilCode {
    pub code: &'static str,
    pub description_en: &'static str,
    pub description_nl: &'static str,
}

const MAIN_SOIL_CODES: &[SoilCode] = &[
    SoilCode {
        code: "G",
        description_en: "gravel",
        description_nl: "grind",
    },
    SoilCode {
        code: "Z",
        description_en: "sand",
        description_nl: "zand",
    },
    SoilCode {
        code: "K",
        description_en: "clay",
        description_nl: "klei",
    },
    SoilCode {
        code: "L",
        description_en: "loam",
        description_nl: "leem",
    },
    SoilCode {
        code: "V",
        description_en: "peat",
        description_nl: "veen",
    },
    SoilCode {
        code: "STE",
        description_en: "stones",
        description_nl: "stenen",
    },
    SoilCode {
        code: "NBE",
        description_en: "not described",
        description_nl: "niet benoemd",
    },
];

const ADMIXTURE_CODES: &[SoilCode] = &[
    SoilCode {
        code: "s1",
        description_en: "weakly silty",
        description_nl: "zwak siltig",
    },
    SoilCode {
        code: "s2",
        description_en: "moderately silty",
        description_nl: "matig siltig",
    },
    SoilCode {
        code: "s3",
        description_en: "strongly silty",
        description_nl: "sterk siltig",
    },
    SoilCode {
        code: "s4",
        description_en: "extremely silty",
        description_nl: "uiterst siltig",
    },
    SoilCode {
        code: "z1",
        description_en: "weakly sandy",
        description_nl: "zwak zandig",
    },
    SoilCode {
        code: "z2",
        description_en: "moderately sandy",
        description_nl: "matig zandig",
    },
    SoilCode {
        code: "z3",
        description_en: "strongly sandy",
        description_nl: "sterk zandig",
    },
    SoilCode {
        code: "k1",
        description_en: "weakly clayey",
        description_nl: "zwak kleiig",
    },
    SoilCode {
        code: "k2",
        description_en: "moderately clayey",
        description_nl: "matig kleiig",
    },
    SoilCode {
        code: "k3",
        description_en: "strongly clayey",
        description_nl: "sterk kleiig",
    },
    SoilCode {
        code: "g1",
        description_en: "weakly gravelly",
        description_nl: "zwak grindig",
    },
    SoilCode {
        code: "g2",
        description_en: "moderately gravelly",
        description_nl: "matig grindig",
    },
    SoilCode {
        code: "g3",
        description_en: "strongly gravelly",
        description_nl: "sterk grindig",
    },
    SoilCode {
        code: "h1",
        description_en: "weakly humous",
        description_nl: "zwak humeus",
    },
    SoilCode {
        code: "h2",
        description_en: "moderately humous",
        description_nl: "matig humeus",
    },
    SoilCode {
        code: "h3",
        description_en: "strongly humous",
        description_nl: "sterk humeus",
    },
    SoilCode {
        code: "m",
        description_en: "mineral-poor",
        description_nl: "mineraalarm",
    },
];

// =============================================================================
// Color Codes
// =============================================================================

/// One color or intensity code entry
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCode {
    pub code: &'static str,
    pub description_en: &'static str,
    pub description_nl: &'static str,
}

const COLOR_CODES: &[ColorCode] = &[
    ColorCode {
        code: "GR",
        description_en: "grey",
        description_nl: "grijs",
    },
    ColorCode {
        code: "BR",
        description_en: "brown",
        description_nl: "bruin",
    },
    ColorCode {
        code: "GE",
        description_en: "yellow",
        description_nl: "geel",
    },
    ColorCode {
        code: "RO",
        description_en: "red",
        description_nl: "rood",
    },
    ColorCode {
        code: "ZW",
        description_en: "black",
        description_nl: "zwart",
    },
    ColorCode {
        code: "WI",
        description_en: "white",
        description_nl: "wit",
    },
    ColorCode {
        code: "GN",
        description_en: "green",
        description_nl: "groen",
    },
    ColorCode {
        code: "BL",
        description_en: "blue",
        description_nl: "blauw",
    },
    ColorCode {
        code: "OR",
        description_en: "orange",
        description_nl: "oranje",
    },
    ColorCode {
        code: "LI",
        description_en: "light",
        description_nl: "licht",
    },
    ColorCode {
        code: "DO",
        description_en: "dark",
        description_nl: "donker",
    },
];

// =============================================================================
// Drilling Methods
// =============================================================================

/// One drilling method entry
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillingMethod {
    pub code: &'static str,
    pub description_en: &'static str,
    pub description_nl: &'static str,
}

const DRILLING_METHODS: &[DrillingMethod] = &[
    DrillingMethod {
        code: "AVE",
        description_en: "auger drilling",
        description_nl: "avegaarboring",
    },
    DrillingMethod {
        code: "PUL",
        description_en: "cable tool drilling",
        description_nl: "pulsboring",
    },
    DrillingMethod {
        code: "SPO",
        description_en: "wash boring",
        description_nl: "spoelboring",
    },
    DrillingMethod {
        code: "STE",
        description_en: "hand sampling",
        description_nl: "steekboring",
    },
    DrillingMethod {
        code: "HAN",
        description_en: "hand auger drilling",
        description_nl: "handboring",
    },
    DrillingMethod {
        code: "ZUI",
        description_en: "suction drilling",
        description_nl: "zuigboring",
    },
    DrillingMethod {
        code: "KER",
        description_en: "core drilling",
        description_nl: "kernboring",
    },
    DrillingMethod {
        code: "COU",
        description_en: "counterflush drilling",
        description_nl: "counterflushboring",
    },
];

// =============================================================================
// Country Codes
// =============================================================================

/// One COMPANYID country code entry (international dialing codes)
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCode {
    pub code: &'static str,
    pub name_en: &'static str,
    pub name_nl: &'static str,
}

const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode {
        code: "31",
        name_en: "Netherlands",
        name_nl: "Nederland",
    },
    CountryCode {
        code: "32",
        name_en: "Belgium",
        name_nl: "Belgi\u{eb}",
    },
    CountryCode {
        code: "49",
        name_en: "Germany",
        name_nl: "Duitsland",
    },
    CountryCode {
        code: "33",
        name_en: "France",
        name_nl: "Frankrijk",
    },
    CountryCode {
        code: "44",
        name_en: "United Kingdom",
        name_nl: "Verenigd Koninkrijk",
    },
];

// =============================================================================
// Indexes and Lookups
// =============================================================================

static SOIL_INDEX: LazyLock<HashMap<&'static str, &'static SoilCode>> = LazyLock::new(|| {
    MAIN_SOIL_CODES
        .iter()
        .chain(ADMIXTURE_CODES.iter())
        .map(|entry| (entry.code, entry))
        .collect()
});

static COLOR_INDEX: LazyLock<HashMap<&'static str, &'static ColorCode>> =
    LazyLock::new(|| COLOR_CODES.iter().map(|entry| (entry.code, entry)).collect());

static DRILLING_INDEX: LazyLock<HashMap<&'static str, &'static DrillingMethod>> =
    LazyLock::new(|| {
        DRILLING_METHODS
            .iter()
            .map(|entry| (entry.code, entry))
            .collect()
    });

static COUNTRY_INDEX: LazyLock<HashMap<&'static str, &'static CountryCode>> =
    LazyLock::new(|| {
        COUNTRY_CODES
            .iter()
            .map(|entry| (entry.code, entry))
            .collect()
    });

/// Look up a main soil or admixture code (case-sensitive, NEN 5104)
pub fn soil_code(code: &str) -> Option<&'static SoilCode> {
    SOIL_INDEX.get(code.trim()).copied()
}

/// Look up a color or intensity code
pub fn color_code(code: &str) -> Option<&'static ColorCode> {
    COLOR_INDEX.get(code.trim()).copied()
}

/// Look up a drilling method code
pub fn drilling_method(code: &str) -> Option<&'static DrillingMethod> {
    DRILLING_INDEX.get(code.trim()).copied()
}

/// Look up a COMPANYID country code
pub fn country(code: &str) -> Option<&'static CountryCode> {
    COUNTRY_INDEX.get(code.trim()).copied()
}

/// Decompose a packed soil code ("Zs1") into its main code and admixtures
///
/// Returns `None` when the leading main code is not recognized. Unknown
/// trailing fragments are kept as raw strings so callers can still render
/// them.
pub fn decompose_soil_code(packed: &str) -> Option<(&'static SoilCode, Vec<String>)> {
    let trimmed = packed.trim();

    let main = MAIN_SOIL_CODES
        .iter()
        .filter(|entry| trimmed.starts_with(entry.code))
        .max_by_key(|entry| entry.code.len())?;

    let mut admixtures = Vec::new();
    let mut rest = &trimmed[main.code.len()..];
    while !rest.is_empty() {
        match ADMIXTURE_CODES
            .iter()
            .filter(|entry| rest.starts_with(entry.code))
            .max_by_key(|entry| entry.code.len())
        {
            Some(entry) => {
                admixtures.push(entry.code.to_string());
                rest = &rest[entry.code.len()..];
            }
            None => {
                admixtures.push(rest.to_string());
                break;
            }
        }
    }

    Some((main, admixtures))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_code_lookup() {
        assert_eq!(soil_code("Z").unwrap().description_en, "sand");
        assert_eq!(soil_code("s1").unwrap().description_en, "weakly silty");
        assert!(soil_code("Q").is_none());
    }

    #[test]
    fn test_color_lookup() {
        assert_eq!(color_code("BR").unwrap().description_nl, "bruin");
        assert_eq!(color_code("DO").unwrap().description_en, "dark");
    }

    #[test]
    fn test_drilling_method_lookup() {
        assert_eq!(drilling_method("PUL").unwrap().description_en, "cable tool drilling");
    }

    #[test]
    fn test_country_lookup() {
        assert_eq!(country("31").unwrap().name_en, "Netherlands");
        assert_eq!(country("32").unwrap().name_nl, "Belgi\u{eb}");
    }

    #[test]
    fn test_decompose_packed_soil_code() {
        let (main, admixtures) = decompose_soil_code("Zs1").unwrap();
        assert_eq!(main.code, "Z");
        assert_eq!(admixtures, vec!["s1".to_string()]);

        let (main, admixtures) = decompose_soil_code("Kz3h1").unwrap();
        assert_eq!(main.code, "K");
        assert_eq!(admixtures, vec!["z3".to_string(), "h1".to_string()]);

        assert!(decompose_soil_code("Xs1").is_none());
    }
}
