//! End-to-end tests for the parser orchestration

use super::super::parser::{GefParser, parse_gef};
use super::{bore_gef_text, cpt_gef_text};
use crate::app::models::{Extension, FileType, GefData};
use crate::config::ParseOptions;
use crate::Error;

#[test]
fn test_minimal_cpt_end_to_end() {
    let data = parse_gef("dkm1.gef", &cpt_gef_text()).unwrap();
    assert_eq!(data.file_type(), FileType::Cpt);

    let GefData::Cpt {
        data: rows,
        chart_axes,
        warnings,
        processed,
        ..
    } = &data
    else {
        panic!("expected a CPT result");
    };

    assert_eq!(rows.len(), 5);
    // First row carries the void sentinel for cone resistance
    assert_eq!(rows[0].value("Conusweerstand"), None);
    assert_eq!(rows[2].value("Conusweerstand"), Some(2.5));

    // Vertical cone: true depth equals penetration, elevation hangs off
    // the NAP height of 5.0
    assert!((rows[4].true_depth.unwrap() - 2.0).abs() < 1e-9);
    assert!((rows[4].elevation.unwrap() - 3.0).abs() < 1e-9);

    assert_eq!(chart_axes.len(), 2);
    assert!(warnings.is_empty());
    assert_eq!(processed.extension, Extension::Standard);
    assert_eq!(
        processed.height_system.as_deref(),
        Some("NAP (Normaal Amsterdams Peil)")
    );
}

#[test]
fn test_bore_end_to_end() {
    let data = parse_gef("b25g0001.gef", &bore_gef_text()).unwrap();
    assert_eq!(data.file_type(), FileType::Bore);

    let GefData::Bore {
        layers, specimens, ..
    } = &data
    else {
        panic!("expected a BORE result");
    };

    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].soil_code, "Zs1");
    assert_eq!(layers[0].description.as_deref(), Some("bruin zand met grind"));
    assert_eq!(layers[1].soil_code, "Kz1");

    assert_eq!(specimens.len(), 1);
    assert_eq!(specimens[0].depth_top, Some(0.5));
    assert_eq!(specimens[0].monstercode.as_deref(), Some("M-001"));
}

#[test]
fn test_dissipation_file_is_a_typed_error() {
    let text = "#GEFID= 1,1,0\n#REPORTCODE= GEF-DISS-Report, 1, 0, 0\n#EOH=\n";
    let error = parse_gef("diss.gef", text).unwrap_err();
    assert!(matches!(error, Error::UnsupportedFileType { .. }));
}

#[test]
fn test_non_gef_text_is_a_tokenizer_error() {
    let error = parse_gef("readme.txt", "just some prose\n").unwrap_err();
    assert!(matches!(
        error,
        Error::Tokenizer { file, .. } if file == "readme.txt"
    ));
}

#[test]
fn test_belgian_extension_detected_from_dov_ids() {
    let text = "\
#GEFID= 1, 1, 0
#REPORTCODE= GEF-CPT-Report, 1, 1, 0
#COLUMNINFO= 1, m, Sondeerlengte, 1
#COLUMNINFO= 2, MPa, Conusweerstand, 2
#MEASUREMENTTEXT= 202, GEO-01/023-S1, proefnummer (DOV)
#EOH=
1.00 2.50
"
    .to_string();

    let data = parse_gef("dov.gef", &text).unwrap();
    assert_eq!(data.processed().extension, Extension::Belgian);
}

#[test]
fn test_dutch_extension_detected_from_bro_ids() {
    let text = "\
#GEFID= 1, 1, 0
#REPORTCODE= GEF-CPT-Report, 1, 1, 0
#COLUMNINFO= 1, m, Sondeerlengte, 1
#COLUMNINFO= 2, MPa, Conusweerstand, 2
#MEASUREMENTTEXT= 101, CPT000000012345, BRO sondering
#EOH=
1.00 2.50
"
    .to_string();

    let data = parse_gef("bro.gef", &text).unwrap();
    assert_eq!(data.processed().extension, Extension::Dutch);
}

#[test]
fn test_missing_spatial_headers_warn_but_parse() {
    let text = "\
#GEFID= 1, 1, 0
#REPORTCODE= GEF-CPT-Report, 1, 1, 0
#COLUMNINFO= 1, m, Sondeerlengte, 1
#COLUMNINFO= 2, MPa, Conusweerstand, 2
#EOH=
1.00 2.50
";
    let data = parse_gef("bare.gef", text).unwrap();

    let ids: Vec<&str> = data.warnings().iter().map(|warning| warning.id()).collect();
    assert!(ids.contains(&"missingZidHeader"));
    assert!(ids.contains(&"missingXyidHeader"));

    let GefData::Cpt { data: rows, .. } = &data else {
        panic!("expected a CPT result");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].elevation, None);
}

#[test]
fn test_out_of_range_data_produces_minmax_warning() {
    let text = "\
#GEFID= 1, 1, 0
#REPORTCODE= GEF-CPT-Report, 1, 1, 0
#XYID= 31000, 1.0, 2.0
#ZID= 31000, 0.0
#COLUMNINFO= 1, m, Sondeerlengte, 1
#COLUMNINFO= 2, MPa, Conusweerstand, 2
#COLUMNMINMAX= 2, 0.000, 10.000
#EOH=
1.00 2.50
2.00 12.75
";
    let data = parse_gef("range.gef", text).unwrap();
    assert!(
        data.warnings()
            .iter()
            .any(|warning| warning.id() == "columnMinMaxViolation")
    );
}

#[test]
fn test_parse_result_serializes_with_type_tag() {
    let data = parse_gef("dkm1.gef", &cpt_gef_text()).unwrap();
    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["fileType"], "CPT");
    assert!(json["data"].is_array());
    assert!(json["processed"]["filename"].as_str().unwrap().contains("dkm1"));
}

#[test]
fn test_parser_with_options() {
    let parser = GefParser::new(ParseOptions::dutch());
    let data = parser.parse("dkm1.gef", &cpt_gef_text()).unwrap();
    assert_eq!(
        data.processed().coordinate_system.as_deref(),
        Some("Rijksdriehoeksmeting (RD)")
    );
}
