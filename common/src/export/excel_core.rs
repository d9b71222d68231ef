//! 照合結果Excel生成（共通ライブラリ）
//!
//! 「Matched」「NotMatched」の2シートに、ヘッダー行 `ClientCode, Mobile`
//! とレコードを入力順に書き出す。

use crate::error::Result;
use crate::types::{CandidateEntry, MatchResult};
use rust_xlsxwriter::{Format, FormatBorder, Workbook};

/// 一致シート名
pub const MATCHED_SHEET: &str = "Matched";
/// 不一致シート名
pub const NOT_MATCHED_SHEET: &str = "NotMatched";
/// ヘッダー行
pub const HEADERS: [&str; 2] = ["ClientCode", "Mobile"];

const CODE_COL_WIDTH: f64 = 18.0;
const MOBILE_COL_WIDTH: f64 = 16.0;

/// 照合結果をxlsxバッファに生成
pub fn generate_excel_buffer(result: &MatchResult) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin);

    write_sheet(&mut workbook, MATCHED_SHEET, &result.matched, &header_format)?;
    write_sheet(&mut workbook, NOT_MATCHED_SHEET, &result.unmatched, &header_format)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(
    workbook: &mut Workbook,
    name: &str,
    records: &[CandidateEntry],
    header_format: &Format,
) -> Result<()> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;
    worksheet.set_column_width(0, CODE_COL_WIDTH)?;
    worksheet.set_column_width(1, MOBILE_COL_WIDTH)?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    // 携帯番号は先頭0を落とさないよう文字列で書く
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &record.code)?;
        worksheet.write_string(row, 1, &record.mobile)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_excel_buffer_is_xlsx() {
        let result = MatchResult {
            matched: vec![CandidateEntry::new("A1", "111")],
            unmatched: vec![CandidateEntry::new("B2", "222")],
        };
        let buffer = generate_excel_buffer(&result).unwrap();
        // xlsxはZIPコンテナ
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_excel_buffer_empty_result() {
        let buffer = generate_excel_buffer(&MatchResult::default()).unwrap();
        assert!(!buffer.is_empty());
    }
}
