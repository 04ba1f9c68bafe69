//! Shared fixtures for GEF parser tests
//!
//! Builders for realistic GEF text and pre-parsed header views, used
//! across the per-area test modules.

use crate::app::models::headers::{ColumnInfo, ColumnVoid, GefHeaders, ZId};

// Test modules
mod bore_tests;
mod depth_tests;
mod detect_tests;
mod parser_tests;

/// A small but complete Dutch CPT file: three columns (penetration, cone
/// resistance, inclination), a void sentinel on the cone resistance and a
/// NAP-referenced ZID
pub fn cpt_gef_text() -> String {
    "\
#GEFID= 1, 1, 0
#REPORTCODE= GEF-CPT-Report, 1, 1, 0
#TESTID= DKM-1
#PROJECTID= CPT, 4025
#COMPANYID= Fugro, Leidschendam, 31
#XYID= 31000, 120000.00, 480000.00, 0.01, 0.01
#ZID= 31000, 5.00, 0.05
#COLUMN= 3
#COLUMNINFO= 1, m, Sondeerlengte, 1
#COLUMNINFO= 2, MPa, Conusweerstand, 2
#COLUMNINFO= 3, graden, Helling resultante, 8
#COLUMNVOID= 2, 999.999
#COLUMNMINMAX= 2, 0.000, 50.000
#MEASUREMENTTEXT= 1, Provincie Utrecht, opdrachtgever
#MEASUREMENTVAR= 1, 1000, mm2, nominaal oppervlak conuspunt
#EOH=
0.00 999.999 0.0
0.50 1.250 0.0
1.00 2.500 0.0
1.50 3.750 0.0
2.00 5.000 0.0
"
    .to_string()
}

/// A BORE file with two text-bearing layer records and a specimen
pub fn bore_gef_text() -> String {
    "\
#GEFID= 1, 1, 0
#REPORTCODE= GEF-BORE-Report, 1, 0, 0
#TESTID= B25G0001
#XYID= 31000, 121034.00, 487012.00
#ZID= 31000, 1.25
#COLUMN= 2
#COLUMNINFO= 1, m, Laag van, 1
#COLUMNINFO= 2, m, Laag tot, 2
#COLUMNSEPARATOR= ;
#RECORDSEPARATOR= !
#SPECIMENVAR= 11, 0.50, m, diepte bovenkant monster
#SPECIMENVAR= 12, 1.00, m, diepte onderkant monster
#SPECIMENTEXT= 11, M-001, monstercode
#EOH=
0.00;1.50;'Zs1';'g1';'bruin zand met grind'!
1.50;3.20;'Kz1';'donkergrijze klei zwak zandig'!
"
    .to_string()
}

/// Headers describing the fixture CPT column layout, for unit tests that
/// bypass the tokenizer
pub fn cpt_headers() -> GefHeaders {
    GefHeaders {
        z_id: Some(ZId {
            height_system_code: "31000".to_string(),
            height: Some(5.0),
            delta_z: Some(0.05),
        }),
        column_info: vec![
            ColumnInfo {
                column_number: 1,
                name: "Sondeerlengte".to_string(),
                unit: "m".to_string(),
                quantity_number: 1,
            },
            ColumnInfo {
                column_number: 2,
                name: "Conusweerstand".to_string(),
                unit: "MPa".to_string(),
                quantity_number: 2,
            },
            ColumnInfo {
                column_number: 3,
                name: "Helling resultante".to_string(),
                unit: "graden".to_string(),
                quantity_number: 8,
            },
        ],
        column_void: vec![ColumnVoid {
            column_number: 2,
            void_value: 999.999,
        }],
        ..Default::default()
    }
}
