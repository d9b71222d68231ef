//! 照合結果Excel生成（CLI・Web版）
//!
//! 共通ライブラリのバッファ生成をラップする

use crate::error::{ClientMatchError, Result};
use client_match_common::{generate_excel_buffer, MatchResult};
use std::path::Path;

/// 照合結果をxlsxバイト列にする
pub fn result_workbook_bytes(result: &MatchResult) -> Result<Vec<u8>> {
    generate_excel_buffer(result).map_err(|e| ClientMatchError::ExcelGeneration(e.to_string()))
}

/// 照合結果をxlsxファイルに保存する
pub fn generate_excel(result: &MatchResult, output_path: &Path) -> Result<()> {
    let buffer = result_workbook_bytes(result)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;

    Ok(())
}
