//! 旧形式の区切り文字列デコード
//!
//! 旧フォームは `code|mobile` を `||` で連結した文字列で結果を送ってくる。
//! 現行ページはJSON（`MatchResult`）を送るが、互換のため受け付ける。
//! 値そのものに `|` を含む場合は曖昧になるため、その場合はJSONを使うこと。

use crate::types::CandidateEntry;

/// レコード区切り
pub const RECORD_SEPARATOR: &str = "||";
/// フィールド区切り
pub const FIELD_SEPARATOR: char = '|';

/// 区切り文字列をレコード列に戻す
///
/// 空の断片は読み飛ばす。`|` を含まない断片は携帯番号を空とする。
/// 3つ目以降のフィールドは無視する。
pub fn decode_records(encoded: &str) -> Vec<CandidateEntry> {
    encoded
        .split(RECORD_SEPARATOR)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let mut fields = piece.split(FIELD_SEPARATOR);
            let code = fields.next().unwrap_or_default();
            let mobile = fields.next().unwrap_or_default();
            CandidateEntry::new(code, mobile)
        })
        .collect()
}
