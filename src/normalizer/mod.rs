//! 照合キーの正規化
//!
//! 参照ファイルと貼り付けデータの両方に同じ正規化を適用する。
//! どちらか片方だけ別の処理をすると照合が成立しない。
//!
//! - 顧客コード: ゼロ幅スペース除去・前後空白除去の後、英数字以外を削除して大文字化
//! - 携帯番号: 同様の前処理の後、数字以外を削除し、10桁を超える場合は末尾10桁
//!   （国番号プレフィックスの除去）

use regex::Regex;

/// ゼロ幅スペース（U+200B）
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// 携帯番号の桁数
pub const MOBILE_DIGITS: usize = 10;

lazy_static::lazy_static! {
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^A-Za-z0-9]").unwrap();
    static ref NON_DIGIT_RE: Regex = Regex::new(r"[^0-9]").unwrap();
}

/// ゼロ幅スペースと前後の空白を除去
fn strip_invisible(raw: &str) -> String {
    raw.replace(ZERO_WIDTH_SPACE, "").trim().to_string()
}

/// 顧客コードを正規化する
///
/// 不正な文字しかない場合は空文字列を返す。
pub fn normalize_code(raw: &str) -> String {
    let cleaned = strip_invisible(raw);
    NON_ALNUM_RE.replace_all(&cleaned, "").to_ascii_uppercase()
}

/// 携帯番号を正規化する
///
/// 結果は常に数字のみ・[`MOBILE_DIGITS`]桁以下。
pub fn normalize_mobile(raw: &str) -> String {
    let cleaned = strip_invisible(raw);
    let digits = NON_DIGIT_RE.replace_all(&cleaned, "").into_owned();

    // 数字はASCIIのみなのでバイト位置で切り出せる
    if digits.len() > MOBILE_DIGITS {
        digits[digits.len() - MOBILE_DIGITS..].to_string()
    } else {
        digits
    }
}
