pub mod excel;

use std::path::{Path, PathBuf};

/// xlsxのMIMEタイプ
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// ファイル名が空になった場合の既定値
pub const FALLBACK_FILE_NAME: &str = "results";

/// ダウンロード用のファイル名（拡張子なし）を整える
///
/// 制御文字とファイル名に使えない記号（`/ \ " : * ? < > |`）を取り除き、
/// 先頭のドットを外す。末尾の `.xlsx` は重複しないよう外す。
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | '"' | ':' | '*' | '?' | '<' | '>' | '|'))
        .collect();
    let cleaned = cleaned.trim().trim_start_matches('.');
    let cleaned = cleaned
        .strip_suffix(".xlsx")
        .unwrap_or(cleaned)
        .trim();

    if cleaned.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// `attachment; filename="<name>.xlsx"` ヘッダー値
///
/// ASCII以外を含む名前は `filename` に `_` 置換した代替名を入れ、
/// 本来の名前をRFC 5987形式の `filename*` で併記する。
pub fn content_disposition(name: &str) -> String {
    let name = sanitize_file_name(name);
    if name.is_ascii() {
        return format!("attachment; filename=\"{}.xlsx\"", name);
    }

    let fallback: String = name
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{}.xlsx\"; filename*=UTF-8''{}.xlsx",
        fallback,
        urlencoding::encode(&name)
    )
}

/// 出力先がディレクトリ（または拡張子なし）ならファイル名を付ける
pub fn output_path_for_xlsx(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", sanitize_file_name(file_name)))
    } else {
        output.to_path_buf()
    }
}
