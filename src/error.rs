use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォーム項目がありません: {0}")]
    MissingField(String),

    #[error("アップロードの読み込みに失敗: {0}")]
    Upload(String),

    #[error("参照ファイルを読み込めません: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("貼り付けデータの行数が多すぎます: {lines}行（上限 {limit}行）")]
    TooManyLines { lines: usize, limit: usize },

    #[error("ダウンロードデータが不正: {0}")]
    InvalidPayload(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] client_match_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientMatchError {
    /// 利用者の入力に起因するエラーか
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ClientMatchError::FileNotFound(_)
                | ClientMatchError::MissingField(_)
                | ClientMatchError::Upload(_)
                | ClientMatchError::Spreadsheet(_)
                | ClientMatchError::TooManyLines { .. }
                | ClientMatchError::InvalidPayload(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClientMatchError>;
