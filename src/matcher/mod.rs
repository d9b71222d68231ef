//! 参照ファイルと貼り付けデータの照合
//!
//! ## 処理フロー
//! 1. 参照ファイル全シートの1列目・2列目から参照セットを構築
//! 2. 貼り付けテキストを行ごとに分割してレコード化
//! 3. コードまたは携帯番号のどちらかが参照セットにあれば一致

mod types;

pub use types::{MatchOptions, ReferenceSet};

use crate::normalizer::{normalize_code, normalize_mobile};
use client_match_common::{CandidateEntry, MatchResult, Sheet};

/// 参照セットを構築する
///
/// 欠けているセルは空文字列として扱い、そのまま正規化して登録する。
pub fn build_reference_set(sheets: &[Sheet]) -> ReferenceSet {
    let mut reference = ReferenceSet::default();

    for sheet in sheets {
        for row in &sheet.rows {
            let code = row.first().map(String::as_str).unwrap_or_default();
            let mobile = row.get(1).map(String::as_str).unwrap_or_default();
            reference.codes.insert(normalize_code(code));
            reference.mobiles.insert(normalize_mobile(mobile));
        }
    }

    reference
}

/// 貼り付けテキストを照合レコードに変換する
///
/// 空白区切りで2トークン未満の行は黙って読み飛ばす。3トークン目以降は無視。
pub fn parse_candidates(text: &str) -> Vec<CandidateEntry> {
    text.lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let code = tokens.next()?;
            let mobile = tokens.next()?;
            Some(CandidateEntry::new(normalize_code(code), normalize_mobile(mobile)))
        })
        .collect()
}

/// レコードを一致・不一致に振り分ける
///
/// コードか携帯番号のどちらかが参照セットにあれば一致（OR条件）。
/// 各列内の順序は入力順を保つ。
pub fn match_candidates(
    reference: &ReferenceSet,
    candidates: impl IntoIterator<Item = CandidateEntry>,
) -> MatchResult {
    let mut result = MatchResult::default();

    for entry in candidates {
        if reference.contains_code(&entry.code) || reference.contains_mobile(&entry.mobile) {
            result.matched.push(entry);
        } else {
            result.unmatched.push(entry);
        }
    }

    result
}

/// 参照シートと貼り付けテキストを照合する
pub fn reconcile(sheets: &[Sheet], pasted: &str, options: &MatchOptions) -> MatchResult {
    let mut reference = build_reference_set(sheets);
    if options.exclude_empty_reference {
        reference.exclude_empty();
    }

    match_candidates(&reference, parse_candidates(pasted))
}
