//! 照合処理（Web・CLI共通の入口）

use crate::config::Config;
use crate::error::{ClientMatchError, Result};
use crate::matcher::{self, MatchOptions};
use client_match_common::{MatchResult, Sheet};
use tracing::info;

/// 照合の入力制限
#[derive(Debug, Clone, Copy)]
pub struct CompareLimits {
    pub max_pasted_lines: usize,
}

impl From<&Config> for CompareLimits {
    fn from(config: &Config) -> Self {
        Self {
            max_pasted_lines: config.max_pasted_lines,
        }
    }
}

impl From<&Config> for MatchOptions {
    fn from(config: &Config) -> Self {
        Self {
            exclude_empty_reference: config.exclude_empty_reference,
        }
    }
}

/// 参照シートと貼り付けテキストを照合する
///
/// 行数が上限を超える場合は照合せずにエラーを返す。
pub fn compare(
    sheets: &[Sheet],
    pasted: &str,
    options: &MatchOptions,
    limits: CompareLimits,
) -> Result<MatchResult> {
    let lines = pasted.lines().count();
    if lines > limits.max_pasted_lines {
        return Err(ClientMatchError::TooManyLines {
            lines,
            limit: limits.max_pasted_lines,
        });
    }

    let result = matcher::reconcile(sheets, pasted, options);

    info!(
        sheets = sheets.len(),
        reference_rows = sheets.iter().map(|s| s.rows.len()).sum::<usize>(),
        pasted_lines = lines,
        matched = result.matched_count(),
        unmatched = result.unmatched_count(),
        "comparison finished"
    );

    Ok(result)
}
