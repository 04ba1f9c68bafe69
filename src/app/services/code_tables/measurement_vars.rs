//! MEASUREMENTVAR dictionaries per GEF dialect
//!
//! Each dialect is an explicit immutable table keyed by numeric id. The Dutch
//! and Belgian extension tables hold only the ids those extensions introduce;
//! dispatch in the parent module falls through to the standard table.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Category, EnumOption, MeasurementKind, VarInfo};

// =============================================================================
// Shared Option Lists
// =============================================================================

const PRESENT_OPTIONS: &[EnumOption] = &[
    EnumOption {
        value: "0",
        meaning_en: "no",
        meaning_nl: Some("nee"),
    },
    EnumOption {
        value: "1",
        meaning_en: "yes",
        meaning_nl: Some("ja"),
    },
];

const TEST_TYPE_OPTIONS: &[EnumOption] = &[
    EnumOption {
        value: "0",
        meaning_en: "electrical penetration test",
        meaning_nl: Some("elektrische sondering"),
    },
    EnumOption {
        value: "1",
        meaning_en: "mechanical penetration test, discontinuous",
        meaning_nl: Some("mechanische sondering, discontinu"),
    },
    EnumOption {
        value: "2",
        meaning_en: "mechanical penetration test, continuous",
        meaning_nl: Some("mechanische sondering, continu"),
    },
];

const STOP_CRITERION_OPTIONS: &[EnumOption] = &[
    EnumOption {
        value: "0",
        meaning_en: "target depth reached",
        meaning_nl: Some("einddiepte bereikt"),
    },
    EnumOption {
        value: "1",
        meaning_en: "maximum thrust reached",
        meaning_nl: Some("maximale wegdrukkracht bereikt"),
    },
    EnumOption {
        value: "2",
        meaning_en: "maximum cone resistance reached",
        meaning_nl: Some("maximale conusweerstand bereikt"),
    },
    EnumOption {
        value: "3",
        meaning_en: "maximum local friction reached",
        meaning_nl: Some("maximale plaatselijke wrijving bereikt"),
    },
    EnumOption {
        value: "4",
        meaning_en: "maximum inclination reached",
        meaning_nl: Some("maximale hellingshoek bereikt"),
    },
    EnumOption {
        value: "5",
        meaning_en: "obstacle encountered",
        meaning_nl: Some("obstakel aangetroffen"),
    },
    EnumOption {
        value: "6",
        meaning_en: "danger of buckling",
        meaning_nl: Some("gevaar voor knikken"),
    },
    EnumOption {
        value: "7",
        meaning_en: "other reason",
        meaning_nl: Some("andere reden"),
    },
];

const QUALITY_CLASS_OPTIONS: &[EnumOption] = &[
    EnumOption {
        value: "1",
        meaning_en: "application class 1",
        meaning_nl: Some("toepassingsklasse 1"),
    },
    EnumOption {
        value: "2",
        meaning_en: "application class 2",
        meaning_nl: Some("toepassingsklasse 2"),
    },
    EnumOption {
        value: "3",
        meaning_en: "application class 3",
        meaning_nl: Some("toepassingsklasse 3"),
    },
    EnumOption {
        value: "4",
        meaning_en: "application class 4",
        meaning_nl: Some("toepassingsklasse 4"),
    },
];

const POSITIONING_OPTIONS: &[EnumOption] = &[
    EnumOption {
        value: "0",
        meaning_en: "estimated from map",
        meaning_nl: Some("geschat van kaart"),
    },
    EnumOption {
        value: "1",
        meaning_en: "land surveying",
        meaning_nl: Some("landmeting"),
    },
    EnumOption {
        value: "2",
        meaning_en: "GPS",
        meaning_nl: Some("GPS"),
    },
    EnumOption {
        value: "3",
        meaning_en: "RTK-GPS",
        meaning_nl: Some("RTK-GPS"),
    },
];

const BORE_ORIENTATION_OPTIONS: &[EnumOption] = &[
    EnumOption {
        value: "0",
        meaning_en: "vertical",
        meaning_nl: Some("verticaal"),
    },
    EnumOption {
        value: "1",
        meaning_en: "inclined",
        meaning_nl: Some("hellend"),
    },
];

// =============================================================================
// Standard GEF-CPT Table
// =============================================================================

const STANDARD: &[VarInfo] = &[
    VarInfo {
        id: 1,
        category: Category::Equipment,
        unit: "mm2",
        description_en: "Nominal surface area of cone tip",
        description_nl: Some("Nominaal oppervlak conuspunt"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 2,
        category: Category::Equipment,
        unit: "mm2",
        description_en: "Nominal surface area of friction casing",
        description_nl: Some("Nominaal oppervlak kleefmantel"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 3,
        category: Category::Equipment,
        unit: "-",
        description_en: "Net surface area quotient of cone tip",
        description_nl: Some("Netto oppervlaktequoti\u{eb}nt van conuspunt"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 4,
        category: Category::Equipment,
        unit: "-",
        description_en: "Net surface area quotient of friction casing",
        description_nl: Some("Netto oppervlaktequoti\u{eb}nt van kleefmantel"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 5,
        category: Category::Equipment,
        unit: "mm",
        description_en: "Distance of cone to centre of friction casing",
        description_nl: Some("Afstand conus tot midden kleefmantel"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 6,
        category: Category::Equipment,
        unit: "-",
        description_en: "Friction measurement present",
        description_nl: Some("Kleefmeting aanwezig"),
        kind: MeasurementKind::Enum(PRESENT_OPTIONS),
    },
    VarInfo {
        id: 7,
        category: Category::Equipment,
        unit: "-",
        description_en: "Pore pressure measurement u1 present",
        description_nl: Some("Waterspanningsmeting u1 aanwezig"),
        kind: MeasurementKind::Enum(PRESENT_OPTIONS),
    },
    VarInfo {
        id: 8,
        category: Category::Equipment,
        unit: "-",
        description_en: "Pore pressure measurement u2 present",
        description_nl: Some("Waterspanningsmeting u2 aanwezig"),
        kind: MeasurementKind::Enum(PRESENT_OPTIONS),
    },
    VarInfo {
        id: 9,
        category: Category::Equipment,
        unit: "-",
        description_en: "Pore pressure measurement u3 present",
        description_nl: Some("Waterspanningsmeting u3 aanwezig"),
        kind: MeasurementKind::Enum(PRESENT_OPTIONS),
    },
    VarInfo {
        id: 10,
        category: Category::Equipment,
        unit: "-",
        description_en: "Inclination measurement present",
        description_nl: Some("Hellingmeting aanwezig"),
        kind: MeasurementKind::Enum(PRESENT_OPTIONS),
    },
    VarInfo {
        id: 11,
        category: Category::Equipment,
        unit: "-",
        description_en: "Use of back-flow compensator",
        description_nl: Some("Gebruik van terugstroombeveiliging"),
        kind: MeasurementKind::Enum(PRESENT_OPTIONS),
    },
    VarInfo {
        id: 12,
        category: Category::Procedure,
        unit: "-",
        description_en: "Type of cone penetration test",
        description_nl: Some("Sondeermethode"),
        kind: MeasurementKind::Enum(TEST_TYPE_OPTIONS),
    },
    VarInfo {
        id: 13,
        category: Category::Procedure,
        unit: "m",
        description_en: "Pre-excavated depth",
        description_nl: Some("Voorgeboorde of voorgegraven diepte"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 14,
        category: Category::Location,
        unit: "m",
        description_en: "Groundwater level",
        description_nl: Some("Grondwaterstand"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 15,
        category: Category::Location,
        unit: "m",
        description_en: "Water depth (offshore activities)",
        description_nl: Some("Waterdiepte (offshore)"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 16,
        category: Category::Results,
        unit: "m",
        description_en: "End depth of penetration test",
        description_nl: Some("Einddiepte van de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 17,
        category: Category::Procedure,
        unit: "-",
        description_en: "Stop criterion",
        description_nl: Some("Stopcriterium"),
        kind: MeasurementKind::Enum(STOP_CRITERION_OPTIONS),
    },
    VarInfo {
        id: 18,
        category: Category::Reserved,
        unit: "",
        description_en: "Reserved",
        description_nl: None,
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 19,
        category: Category::Reserved,
        unit: "",
        description_en: "Reserved",
        description_nl: None,
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 20,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement cone resistance before test",
        description_nl: Some("Nulmeting conusweerstand voor de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 21,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement cone resistance after test",
        description_nl: Some("Nulmeting conusweerstand na de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 22,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement local friction before test",
        description_nl: Some("Nulmeting plaatselijke wrijving voor de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 23,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement local friction after test",
        description_nl: Some("Nulmeting plaatselijke wrijving na de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 24,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement pore pressure u1 before test",
        description_nl: Some("Nulmeting waterspanning u1 voor de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 25,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement pore pressure u1 after test",
        description_nl: Some("Nulmeting waterspanning u1 na de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 26,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement pore pressure u2 before test",
        description_nl: Some("Nulmeting waterspanning u2 voor de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 27,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement pore pressure u2 after test",
        description_nl: Some("Nulmeting waterspanning u2 na de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 28,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement pore pressure u3 before test",
        description_nl: Some("Nulmeting waterspanning u3 voor de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 29,
        category: Category::Results,
        unit: "MPa",
        description_en: "Zero measurement pore pressure u3 after test",
        description_nl: Some("Nulmeting waterspanning u3 na de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 30,
        category: Category::Results,
        unit: "degrees",
        description_en: "Zero measurement inclination before test",
        description_nl: Some("Nulmeting helling voor de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 31,
        category: Category::Results,
        unit: "degrees",
        description_en: "Zero measurement inclination after test",
        description_nl: Some("Nulmeting helling na de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 32,
        category: Category::Results,
        unit: "degrees",
        description_en: "Zero measurement inclination north-south before test",
        description_nl: Some("Nulmeting helling noord-zuid voor de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 33,
        category: Category::Results,
        unit: "degrees",
        description_en: "Zero measurement inclination north-south after test",
        description_nl: Some("Nulmeting helling noord-zuid na de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 34,
        category: Category::Results,
        unit: "degrees",
        description_en: "Zero measurement inclination east-west before test",
        description_nl: Some("Nulmeting helling oost-west voor de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 35,
        category: Category::Results,
        unit: "degrees",
        description_en: "Zero measurement inclination east-west after test",
        description_nl: Some("Nulmeting helling oost-west na de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 41,
        category: Category::Location,
        unit: "m",
        description_en: "Mileage along the alignment",
        description_nl: Some("Kilometrering"),
        kind: MeasurementKind::Numeric,
    },
];

// =============================================================================
// Dutch Extension Table
// =============================================================================

const DUTCH: &[VarInfo] = &[
    VarInfo {
        id: 110,
        category: Category::Procedure,
        unit: "-",
        description_en: "Quality class (NEN-EN-ISO 22476-1)",
        description_nl: Some("Kwaliteitsklasse (NEN-EN-ISO 22476-1)"),
        kind: MeasurementKind::Enum(QUALITY_CLASS_OPTIONS),
    },
    VarInfo {
        id: 111,
        category: Category::Location,
        unit: "m",
        description_en: "Surface level relative to vertical datum at time of test",
        description_nl: Some("Maaiveldhoogte t.o.v. referentievlak ten tijde van de sondering"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 112,
        category: Category::Procedure,
        unit: "-",
        description_en: "Method of vertical positioning",
        description_nl: Some("Methode verticale positiebepaling"),
        kind: MeasurementKind::Enum(POSITIONING_OPTIONS),
    },
    VarInfo {
        id: 113,
        category: Category::Procedure,
        unit: "-",
        description_en: "Method of horizontal positioning",
        description_nl: Some("Methode horizontale positiebepaling"),
        kind: MeasurementKind::Enum(POSITIONING_OPTIONS),
    },
    VarInfo {
        id: 114,
        category: Category::Results,
        unit: "m",
        description_en: "Groundwater level determined after the test",
        description_nl: Some("Grondwaterstand achteraf bepaald"),
        kind: MeasurementKind::Numeric,
    },
];

// =============================================================================
// Belgian Extension Table
// =============================================================================

const BELGIAN: &[VarInfo] = &[
    VarInfo {
        id: 210,
        category: Category::Equipment,
        unit: "kN",
        description_en: "Total thrust capacity of the rig (DOV)",
        description_nl: Some("Totale drukcapaciteit van de sondeerwagen (DOV)"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 211,
        category: Category::Location,
        unit: "m",
        description_en: "Depth of water table below ground level (DOV)",
        description_nl: Some("Diepte grondwatertafel onder maaiveld (DOV)"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 212,
        category: Category::Procedure,
        unit: "-",
        description_en: "Execution standard (DOV)",
        description_nl: Some("Uitvoeringsnorm (DOV)"),
        kind: MeasurementKind::Enum(TEST_TYPE_OPTIONS),
    },
    VarInfo {
        id: 213,
        category: Category::Equipment,
        unit: "-",
        description_en: "Cone number (DOV)",
        description_nl: Some("Conusnummer (DOV)"),
        kind: MeasurementKind::Numeric,
    },
];

// =============================================================================
// BORE Table
// =============================================================================

const BORE: &[VarInfo] = &[
    VarInfo {
        id: 1,
        category: Category::Location,
        unit: "m",
        description_en: "Groundwater level during drilling",
        description_nl: Some("Grondwaterstand tijdens de boring"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 2,
        category: Category::Results,
        unit: "m",
        description_en: "End depth of borehole",
        description_nl: Some("Einddiepte van de boring"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 3,
        category: Category::Equipment,
        unit: "mm",
        description_en: "Borehole diameter",
        description_nl: Some("Boorgatdiameter"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 4,
        category: Category::Location,
        unit: "m",
        description_en: "Water depth (drilling from water)",
        description_nl: Some("Waterdiepte (boring vanaf water)"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 5,
        category: Category::Procedure,
        unit: "-",
        description_en: "Orientation of the borehole",
        description_nl: Some("Ori\u{eb}ntatie van de boring"),
        kind: MeasurementKind::Enum(BORE_ORIENTATION_OPTIONS),
    },
    VarInfo {
        id: 6,
        category: Category::Procedure,
        unit: "degrees",
        description_en: "Inclination of the borehole",
        description_nl: Some("Helling van de boring"),
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 7,
        category: Category::Reserved,
        unit: "",
        description_en: "Reserved",
        description_nl: None,
        kind: MeasurementKind::Numeric,
    },
    VarInfo {
        id: 8,
        category: Category::Equipment,
        unit: "m",
        description_en: "Depth of casing",
        description_nl: Some("Diepte verbuizing"),
        kind: MeasurementKind::Numeric,
    },
];

// =============================================================================
// Indexes and Lookups
// =============================================================================

fn index(table: &'static [VarInfo]) -> HashMap<i32, &'static VarInfo> {
    table.iter().map(|info| (info.id, info)).collect()
}

static STANDARD_INDEX: LazyLock<HashMap<i32, &'static VarInfo>> =
    LazyLock::new(|| index(STANDARD));
static DUTCH_INDEX: LazyLock<HashMap<i32, &'static VarInfo>> = LazyLock::new(|| index(DUTCH));
static BELGIAN_INDEX: LazyLock<HashMap<i32, &'static VarInfo>> = LazyLock::new(|| index(BELGIAN));
static BORE_INDEX: LazyLock<HashMap<i32, &'static VarInfo>> = LazyLock::new(|| index(BORE));

/// Standard GEF-CPT measurement variable lookup
pub fn standard(id: i32) -> Option<&'static VarInfo> {
    STANDARD_INDEX.get(&id).copied()
}

/// Dutch extension measurement variable lookup (extension ids only)
pub fn dutch(id: i32) -> Option<&'static VarInfo> {
    DUTCH_INDEX.get(&id).copied()
}

/// Belgian extension measurement variable lookup (extension ids only)
pub fn belgian(id: i32) -> Option<&'static VarInfo> {
    BELGIAN_INDEX.get(&id).copied()
}

/// GEF-BORE measurement variable lookup
pub fn bore(id: i32) -> Option<&'static VarInfo> {
    BORE_INDEX.get(&id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_unique_ids() {
        assert_eq!(STANDARD.len(), STANDARD_INDEX.len());
    }

    #[test]
    fn test_extension_tables_are_disjoint_from_standard() {
        for info in DUTCH {
            assert!(standard(info.id).is_none(), "id {} overlaps", info.id);
        }
        for info in BELGIAN {
            assert!(standard(info.id).is_none(), "id {} overlaps", info.id);
        }
    }

    #[test]
    fn test_pre_excavated_depth_entry() {
        let info = standard(13).unwrap();
        assert_eq!(info.unit, "m");
        assert_eq!(info.category, Category::Procedure);
    }

    #[test]
    fn test_reserved_entries_exist() {
        assert_eq!(standard(18).unwrap().category, Category::Reserved);
        assert_eq!(standard(19).unwrap().category, Category::Reserved);
    }

    #[test]
    fn test_enum_variables_resolve_options() {
        let stop = standard(17).unwrap();
        assert_eq!(stop.option_meaning("0", false), Some("target depth reached"));
        assert_eq!(
            stop.option_meaning("0", true),
            Some("einddiepte bereikt")
        );
        assert_eq!(stop.option_meaning("42", false), None);
    }
}
