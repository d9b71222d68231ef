//! 参照ファイル読み込みから照合までの統合テスト

use client_match::compare::{compare, CompareLimits};
use client_match::matcher::MatchOptions;
use client_match::reference::{read_reference_bytes, read_reference_file};
use client_match_common::CandidateEntry;
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

const LIMITS: CompareLimits = CompareLimits { max_pasted_lines: 1000 };

/// 2シート構成の参照ファイル（携帯番号は数値セルと文字列セルが混在）
fn reference_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Branch A").unwrap();
    sheet.write_string(0, 0, "AB-12").unwrap();
    sheet.write_number(0, 1, 9876543210.0).unwrap();
    sheet.write_string(1, 0, "cd 34").unwrap();
    sheet.write_string(1, 1, "+91 99999 88888").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Branch B").unwrap();
    sheet.write_string(0, 0, "\u{200B}EF56").unwrap();
    sheet.write_string(0, 1, "0000011111").unwrap();

    workbook.save_to_buffer().unwrap()
}

#[test]
fn test_read_reference_all_sheets() {
    let sheets = read_reference_bytes(reference_workbook()).unwrap();

    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].name, "Branch A");
    assert_eq!(sheets[0].rows[0], vec!["AB-12".to_string(), "9876543210".to_string()]);
    assert_eq!(sheets[1].rows.len(), 1);
}

#[test]
fn test_both_fields_normalize_match() {
    let sheets = read_reference_bytes(reference_workbook()).unwrap();
    let result = compare(&sheets, "ab12 9876543210", &MatchOptions::default(), LIMITS).unwrap();

    assert_eq!(result.matched, vec![CandidateEntry::new("AB12", "9876543210")]);
    assert!(result.unmatched.is_empty());
}

#[test]
fn test_matches_across_sheets() {
    let sheets = read_reference_bytes(reference_workbook()).unwrap();
    let text = "CD34 1234512345\nzz00 919999988888\nef56 5\nQQ77 7777777777";
    let result = compare(&sheets, text, &MatchOptions::default(), LIMITS).unwrap();

    assert_eq!(result.matched_count(), 3);
    assert_eq!(result.unmatched, vec![CandidateEntry::new("QQ77", "7777777777")]);
    // 先頭ゼロの携帯番号も文字列セルなら保たれる
    let result = compare(&sheets, "NONE 0000011111", &MatchOptions::default(), LIMITS).unwrap();
    assert_eq!(result.matched_count(), 1);
}

#[test]
fn test_empty_reference_matches_nothing() {
    let result = compare(&[], "XY99 1234567890", &MatchOptions::default(), LIMITS).unwrap();

    assert!(result.matched.is_empty());
    assert_eq!(result.unmatched, vec![CandidateEntry::new("XY99", "1234567890")]);
}

#[test]
fn test_malformed_lines_dropped() {
    let sheets = read_reference_bytes(reference_workbook()).unwrap();
    let text = "\nONLYONE\nQQ77 7777777777\nab12 9876543210";
    let result = compare(&sheets, text, &MatchOptions::default(), LIMITS).unwrap();

    // 2トークン以上の行数と一致する
    assert_eq!(result.total(), 2);
    assert_eq!(result.unmatched[0], CandidateEntry::new("QQ77", "7777777777"));
    assert_eq!(result.matched[0], CandidateEntry::new("AB12", "9876543210"));
}

#[test]
fn test_partition_property() {
    let sheets = read_reference_bytes(reference_workbook()).unwrap();
    let text = "AB12 1\nX1 2\nCD34 3\nX2 4\nX3 9876543210\n \nX4";
    let result = compare(&sheets, text, &MatchOptions::default(), LIMITS).unwrap();

    let well_formed = text.lines().filter(|l| l.split_whitespace().count() >= 2).count();
    assert_eq!(result.matched_count() + result.unmatched_count(), well_formed);

    let codes = |v: &[CandidateEntry]| v.iter().map(|e| e.code.as_str()).collect::<Vec<_>>().join(",");
    assert_eq!(codes(&result.matched), "AB12,CD34,X3");
    assert_eq!(codes(&result.unmatched), "X1,X2");
}

#[test]
fn test_blank_cells_and_exclude_empty_option() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "AB12").unwrap();
    // 2行目は携帯番号のみ（コード欄は空）
    sheet.write_string(1, 1, "9876543210").unwrap();
    let sheets = read_reference_bytes(workbook.save_to_buffer().unwrap()).unwrap();

    let text = "--- 1111111111";
    let result = compare(&sheets, text, &MatchOptions::default(), LIMITS).unwrap();
    assert_eq!(result.matched_count(), 1, "空コード同士が一致する");

    let options = MatchOptions { exclude_empty_reference: true };
    let result = compare(&sheets, text, &options, LIMITS).unwrap();
    assert_eq!(result.unmatched_count(), 1);
}

#[test]
fn test_read_reference_file_from_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reference.xlsx");
    std::fs::write(&path, reference_workbook()).unwrap();

    let sheets = read_reference_file(&path).unwrap();
    assert_eq!(sheets.len(), 2);
}
