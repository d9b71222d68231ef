//! 照合データの型定義
//!
//! CLIとWebで共有される型:
//! - CandidateEntry: 正規化済みの貼り付けレコード（コード + 携帯番号）
//! - MatchResult: 照合結果（一致 / 不一致）
//! - Sheet: 参照ファイルの1シート分のセル文字列

use serde::{Deserialize, Serialize};

/// 照合対象レコード（正規化済み）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateEntry {
    /// 顧客コード（英数字・大文字）
    pub code: String,
    /// 携帯番号（数字のみ・最大10桁）
    pub mobile: String,
}

impl CandidateEntry {
    pub fn new(code: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            mobile: mobile.into(),
        }
    }
}

/// 照合結果
///
/// 入力レコードはどちらか一方にのみ、入力順を保って格納される。
/// ダウンロード用のペイロードとしてもこのままJSON化して受け渡す。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchResult {
    pub matched: Vec<CandidateEntry>,
    pub unmatched: Vec<CandidateEntry>,
}

impl MatchResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// 照合したレコード総数
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// 参照ファイルのシート（ヘッダーなし、先頭行からデータ）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}
