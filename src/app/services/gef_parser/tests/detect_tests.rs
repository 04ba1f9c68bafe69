//! Tests for file-type and dialect-extension detection

use std::collections::HashSet;

use super::super::detect::{detect_extension, detect_file_type};
use crate::app::models::{Extension, FileType};
use crate::Error;

#[test]
fn test_cpt_report_codes() {
    assert_eq!(detect_file_type("GEF-CPT-Report").unwrap(), FileType::Cpt);
    assert_eq!(detect_file_type("").unwrap(), FileType::Cpt);
}

#[test]
fn test_bore_report_codes_case_insensitive() {
    assert_eq!(detect_file_type("GEF-BORE-Report").unwrap(), FileType::Bore);
    assert_eq!(detect_file_type("gef-bore-report").unwrap(), FileType::Bore);
}

#[test]
fn test_dissipation_reports_are_rejected() {
    let error = detect_file_type("GEF-DISS-Report").unwrap_err();
    assert!(matches!(
        error,
        Error::UnsupportedFileType { report_code } if report_code == "GEF-DISS-Report"
    ));
}

#[test]
fn test_sieve_reports_are_rejected() {
    assert!(detect_file_type("GEF-SIEV-Report").is_err());
}

fn ids(values: &[i32]) -> HashSet<i32> {
    values.iter().copied().collect()
}

#[test]
fn test_standard_extension_when_no_markers() {
    let extension = detect_extension(&ids(&[1, 2, 3]), &ids(&[1, 13, 20]));
    assert_eq!(extension, Extension::Standard);
}

#[test]
fn test_dutch_text_id_selects_dutch() {
    let extension = detect_extension(&ids(&[1, 101]), &ids(&[]));
    assert_eq!(extension, Extension::Dutch);
}

#[test]
fn test_belgian_var_id_selects_belgian() {
    let extension = detect_extension(&ids(&[]), &ids(&[210]));
    assert_eq!(extension, Extension::Belgian);
}

#[test]
fn test_belgian_wins_over_dutch_when_both_present() {
    // Malformed but observed: a file carrying markers of both dialects
    let extension = detect_extension(&ids(&[101, 202]), &ids(&[]));
    assert_eq!(extension, Extension::Belgian);
}
