use std::collections::HashSet;

/// 参照セット（正規化済みの顧客コード・携帯番号）
///
/// リクエストごとに作り直し、応答後に破棄する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    pub codes: HashSet<String>,
    pub mobiles: HashSet<String>,
}

impl ReferenceSet {
    /// 空文字列を両セットから取り除く
    pub fn exclude_empty(&mut self) {
        self.codes.remove("");
        self.mobiles.remove("");
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn contains_mobile(&self, mobile: &str) -> bool {
        self.mobiles.contains(mobile)
    }
}

/// 照合オプション
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// 空の顧客コード・携帯番号を参照セットに含めない
    ///
    /// 既定ではfalse（空セル同士でも一致扱いになる）。
    pub exclude_empty_reference: bool,
}
