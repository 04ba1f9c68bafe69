//! ZID height system code table
//!
//! Maps the vertical datum codes found in ZID headers to names. The header
//! parser stores unrecognized codes raw; the metadata layer resolves them
//! here and warns when the lookup fails, rendering elevations with NAP
//! semantics as the documented default.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One height system entry
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightSystem {
    /// GEF ZID code as it appears in the file
    pub code: &'static str,
    pub name_en: &'static str,
    pub name_nl: &'static str,
}

const TABLE: &[HeightSystem] = &[
    HeightSystem {
        code: "0",
        name_en: "Local reference level",
        name_nl: "Lokaal referentieniveau",
    },
    HeightSystem {
        code: "31000",
        name_en: "NAP (Normaal Amsterdams Peil)",
        name_nl: "NAP (Normaal Amsterdams Peil)",
    },
    HeightSystem {
        code: "32000",
        name_en: "TAW (Tweede Algemene Waterpassing, Ostend datum)",
        name_nl: "TAW (Tweede Algemene Waterpassing)",
    },
    HeightSystem {
        code: "49000",
        name_en: "NN (Normalnull, Germany)",
        name_nl: "NN (Normalnull, Duitsland)",
    },
    HeightSystem {
        code: "1",
        name_en: "Ground surface level",
        name_nl: "Maaiveld",
    },
    HeightSystem {
        code: "2",
        name_en: "Water bottom level",
        name_nl: "Waterbodem",
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static HeightSystem>> =
    LazyLock::new(|| TABLE.iter().map(|entry| (entry.code, entry)).collect());

/// Look up a height system by its ZID code
pub fn lookup(code: &str) -> Option<&'static HeightSystem> {
    INDEX.get(code.trim()).copied()
}

/// Check whether a ZID code is known
pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}
