//! MEASUREMENTTEXT dictionaries per GEF dialect
//!
//! Same layout as the measurement variable tables: explicit per-dialect
//! tables, extension tables holding only the ids they introduce.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Category, TextInfo};

// =============================================================================
// Standard GEF-CPT Table
// =============================================================================

const STANDARD: &[TextInfo] = &[
    TextInfo {
        id: 1,
        category: Category::Project,
        description_en: "Client",
        description_nl: Some("Opdrachtgever"),
    },
    TextInfo {
        id: 2,
        category: Category::Project,
        description_en: "Project name",
        description_nl: Some("Projectnaam"),
    },
    TextInfo {
        id: 3,
        category: Category::Location,
        description_en: "Test location",
        description_nl: Some("Locatie van de sondering"),
    },
    TextInfo {
        id: 4,
        category: Category::Equipment,
        description_en: "Cone type and serial number",
        description_nl: Some("Conustype en serienummer"),
    },
    TextInfo {
        id: 5,
        category: Category::Procedure,
        description_en: "Date of the penetration test",
        description_nl: Some("Datum van de sondering"),
    },
    TextInfo {
        id: 6,
        category: Category::Procedure,
        description_en: "Operator",
        description_nl: Some("Sondeermeester"),
    },
    TextInfo {
        id: 7,
        category: Category::Equipment,
        description_en: "Rig type",
        description_nl: Some("Type sondeerwagen"),
    },
    TextInfo {
        id: 8,
        category: Category::Procedure,
        description_en: "Applied standard",
        description_nl: Some("Toegepaste norm"),
    },
    TextInfo {
        id: 9,
        category: Category::Location,
        description_en: "Local vertical reference level",
        description_nl: Some("Lokaal verticaal referentieniveau"),
    },
    TextInfo {
        id: 10,
        category: Category::Location,
        description_en: "Method of horizontal position determination",
        description_nl: Some("Methode plaatsbepaling"),
    },
    TextInfo {
        id: 11,
        category: Category::Location,
        description_en: "Method of elevation determination",
        description_nl: Some("Methode hoogtebepaling"),
    },
    TextInfo {
        id: 12,
        category: Category::Reserved,
        description_en: "Reserved",
        description_nl: None,
    },
    TextInfo {
        id: 13,
        category: Category::Reserved,
        description_en: "Reserved",
        description_nl: None,
    },
    TextInfo {
        id: 20,
        category: Category::Remarks,
        description_en: "Remarks",
        description_nl: Some("Opmerkingen"),
    },
];

// =============================================================================
// Dutch Extension Table
// =============================================================================

const DUTCH: &[TextInfo] = &[
    TextInfo {
        id: 101,
        category: Category::Project,
        description_en: "BRO identification",
        description_nl: Some("BRO-identificatie"),
    },
    TextInfo {
        id: 102,
        category: Category::Procedure,
        description_en: "Quality regime (BRO)",
        description_nl: Some("Kwaliteitsregime (BRO)"),
    },
    TextInfo {
        id: 103,
        category: Category::Project,
        description_en: "Delivery context (BRO)",
        description_nl: Some("Kader aanlevering (BRO)"),
    },
    TextInfo {
        id: 104,
        category: Category::Procedure,
        description_en: "Dissipation tests performed",
        description_nl: Some("Uitgevoerde dissipatietesten"),
    },
    TextInfo {
        id: 105,
        category: Category::Procedure,
        description_en: "Processing performed on the signal",
        description_nl: Some("Uitgevoerde signaalbewerking"),
    },
    TextInfo {
        id: 106,
        category: Category::Location,
        description_en: "Expected lithology",
        description_nl: Some("Verwachte lithologie"),
    },
];

// =============================================================================
// Belgian Extension Table
// =============================================================================

const BELGIAN: &[TextInfo] = &[
    TextInfo {
        id: 201,
        category: Category::Project,
        description_en: "DOV survey identification",
        description_nl: Some("DOV-proefidentificatie"),
    },
    TextInfo {
        id: 202,
        category: Category::Project,
        description_en: "Commissioned by (DOV)",
        description_nl: Some("Opdrachtgever (DOV)"),
    },
    TextInfo {
        id: 203,
        category: Category::Equipment,
        description_en: "Drilling firm (DOV)",
        description_nl: Some("Sondeerfirma (DOV)"),
    },
    TextInfo {
        id: 204,
        category: Category::Location,
        description_en: "Quality of the Lambert coordinates (DOV)",
        description_nl: Some("Kwaliteit van de Lambert-co\u{f6}rdinaten (DOV)"),
    },
    TextInfo {
        id: 205,
        category: Category::Procedure,
        description_en: "Execution method (DOV)",
        description_nl: Some("Uitvoeringsmethode (DOV)"),
    },
];

// =============================================================================
// BORE Table
// =============================================================================

const BORE: &[TextInfo] = &[
    TextInfo {
        id: 1,
        category: Category::Project,
        description_en: "Client",
        description_nl: Some("Opdrachtgever"),
    },
    TextInfo {
        id: 2,
        category: Category::Equipment,
        description_en: "Drilling company",
        description_nl: Some("Boorbedrijf"),
    },
    TextInfo {
        id: 3,
        category: Category::Procedure,
        description_en: "Drill master",
        description_nl: Some("Boormeester"),
    },
    TextInfo {
        id: 4,
        category: Category::Procedure,
        description_en: "Drilling method",
        description_nl: Some("Boormethode"),
    },
    TextInfo {
        id: 5,
        category: Category::Procedure,
        description_en: "Reason for end of borehole",
        description_nl: Some("Reden einde boring"),
    },
    TextInfo {
        id: 6,
        category: Category::Location,
        description_en: "Groundwater level description",
        description_nl: Some("Omschrijving grondwaterstand"),
    },
    TextInfo {
        id: 7,
        category: Category::Location,
        description_en: "Local vertical reference level",
        description_nl: Some("Lokaal verticaal referentieniveau"),
    },
    TextInfo {
        id: 8,
        category: Category::Procedure,
        description_en: "Description standard",
        description_nl: Some("Beschrijfnorm"),
    },
    TextInfo {
        id: 9,
        category: Category::Procedure,
        description_en: "Description quality",
        description_nl: Some("Beschrijfkwaliteit"),
    },
    TextInfo {
        id: 10,
        category: Category::Reserved,
        description_en: "Reserved",
        description_nl: None,
    },
    TextInfo {
        id: 11,
        category: Category::Location,
        description_en: "Backfilling of the borehole",
        description_nl: Some("Afwerking van het boorgat"),
    },
    TextInfo {
        id: 12,
        category: Category::Remarks,
        description_en: "Remarks",
        description_nl: Some("Opmerkingen"),
    },
];

// =============================================================================
// Indexes and Lookups
// =============================================================================

fn index(table: &'static [TextInfo]) -> HashMap<i32, &'static TextInfo> {
    table.iter().map(|info| (info.id, info)).collect()
}

static STANDARD_INDEX: LazyLock<HashMap<i32, &'static TextInfo>> =
    LazyLock::new(|| index(STANDARD));
static DUTCH_INDEX: LazyLock<HashMap<i32, &'static TextInfo>> = LazyLock::new(|| index(DUTCH));
static BELGIAN_INDEX: LazyLock<HashMap<i32, &'static TextInfo>> = LazyLock::new(|| index(BELGIAN));
static BORE_INDEX: LazyLock<HashMap<i32, &'static TextInfo>> = LazyLock::new(|| index(BORE));

/// Standard GEF-CPT measurement text lookup
pub fn standard(id: i32) -> Option<&'static TextInfo> {
    STANDARD_INDEX.get(&id).copied()
}

/// Dutch extension measurement text lookup (extension ids only)
pub fn dutch(id: i32) -> Option<&'static TextInfo> {
    DUTCH_INDEX.get(&id).copied()
}

/// Belgian extension measurement text lookup (extension ids only)
pub fn belgian(id: i32) -> Option<&'static TextInfo> {
    BELGIAN_INDEX.get(&id).copied()
}

/// GEF-BORE measurement text lookup
pub fn bore(id: i32) -> Option<&'static TextInfo> {
    BORE_INDEX.get(&id).copied()
}
