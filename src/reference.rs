//! 参照ファイル（Excel等）の読み込み
//!
//! 全シートを先頭行からデータとして読み、1列目・2列目をセル文字列にする。
//! ヘッダー行は想定しない。

use crate::error::{ClientMatchError, Result};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use client_match_common::Sheet;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// 読み込む列数（顧客コード・携帯番号）
const REFERENCE_COLUMNS: usize = 2;

/// アップロードされたバイト列から参照シートを読み込む
pub fn read_reference_bytes(bytes: Vec<u8>) -> Result<Vec<Sheet>> {
    if bytes.is_empty() {
        return Err(ClientMatchError::Upload("empty file".into()));
    }

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    read_sheets(&mut workbook)
}

/// ファイルパスから参照シートを読み込む
pub fn read_reference_file(path: &Path) -> Result<Vec<Sheet>> {
    if !path.exists() {
        return Err(ClientMatchError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    read_sheets(&mut workbook)
}

fn read_sheets<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> Result<Vec<Sheet>> {
    let mut sheets = Vec::new();

    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        let rows = range_rows(&range);
        tracing::debug!(sheet = %name, rows = rows.len(), "reference sheet loaded");
        sheets.push(Sheet::new(name, rows));
    }

    Ok(sheets)
}

/// 範囲の各行から先頭2列を取り出す
///
/// calamineの範囲は最初の非空セルから始まるため、A列基準の絶対位置に直す。
/// 範囲外・空セルは空文字列。
fn range_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let start_col = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    range
        .rows()
        .map(|row| {
            (0..REFERENCE_COLUMNS)
                .map(|col| {
                    col.checked_sub(start_col)
                        .and_then(|offset| row.get(offset))
                        .map(cell_to_string)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}

/// セル値を文字列にする
///
/// 整数値の浮動小数（携帯番号が数値セルの場合など）は小数点なしで出す。
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (*f as i64).to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("AB-12".into())), "AB-12");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Float(9876543210.0)), "9876543210");
        assert_eq!(cell_to_string(&Data::Float(12.5)), "12.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_read_reference_bytes_empty() {
        let err = read_reference_bytes(Vec::new()).unwrap_err();
        assert!(matches!(err, ClientMatchError::Upload(_)));
    }

    #[test]
    fn test_read_reference_bytes_garbage() {
        let err = read_reference_bytes(b"not a spreadsheet".to_vec()).unwrap_err();
        assert!(matches!(err, ClientMatchError::Spreadsheet(_)));
    }

    #[test]
    fn test_read_reference_file_missing() {
        let err = read_reference_file(Path::new("/nonexistent/reference.xlsx")).unwrap_err();
        assert!(matches!(err, ClientMatchError::FileNotFound(_)));
    }
}
