use super::{page, AppState};
use crate::compare::{compare as run_compare, CompareLimits};
use crate::error::{ClientMatchError, Result};
use crate::export::{content_disposition, excel, XLSX_MIME};
use crate::matcher::MatchOptions;
use crate::reference;
use axum::extract::{Form, Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use client_match_common::{decode_records, MatchResult};
use serde::Deserialize;
use tracing::debug;

/// 入力フォーム
pub async fn index() -> Html<String> {
    Html(page::render_index())
}

/// アップロードされた参照ファイルと貼り付けデータを照合する
pub async fn compare(State(state): State<AppState>, mut multipart: Multipart) -> Result<Html<String>> {
    let mut file: Option<Vec<u8>> = None;
    let mut pasted_data: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ClientMatchError::Upload(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let upload_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ClientMatchError::Upload(e.to_string()))?;
                debug!(bytes = bytes.len(), file_name = ?upload_name, "reference uploaded");
                file = Some(bytes.to_vec());
            }
            "pasted_data" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ClientMatchError::Upload(e.to_string()))?;
                pasted_data = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ClientMatchError::MissingField("file".into()))?;
    let pasted_data = pasted_data.ok_or_else(|| ClientMatchError::MissingField("pasted_data".into()))?;

    let sheets = reference::read_reference_bytes(file)?;
    let config = state.config.as_ref();
    let result = run_compare(
        &sheets,
        &pasted_data,
        &MatchOptions::from(config),
        CompareLimits::from(config),
    )?;

    Ok(Html(page::render_results(
        &result,
        &pasted_data,
        &config.default_file_name,
    )?))
}

/// ダウンロードフォーム
///
/// `results` はJSON（現行）。`matched` / `unmatched` は旧形式の区切り文字列。
#[derive(Debug, Default, Deserialize)]
pub struct DownloadForm {
    pub file_name: Option<String>,
    pub results: Option<String>,
    pub matched: Option<String>,
    pub unmatched: Option<String>,
}

impl DownloadForm {
    /// フォームから照合結果を復元する
    pub fn into_result(self) -> Result<MatchResult> {
        if let Some(json) = self.results {
            return MatchResult::from_json(&json)
                .map_err(|e| ClientMatchError::InvalidPayload(e.to_string()));
        }

        match (self.matched, self.unmatched) {
            (None, None) => Err(ClientMatchError::MissingField("results".into())),
            (matched, unmatched) => Ok(MatchResult {
                matched: decode_records(matched.as_deref().unwrap_or_default()),
                unmatched: decode_records(unmatched.as_deref().unwrap_or_default()),
            }),
        }
    }
}

/// 照合結果をxlsxとして返す
pub async fn download(State(state): State<AppState>, Form(form): Form<DownloadForm>) -> Result<Response> {
    let file_name = form
        .file_name
        .clone()
        .unwrap_or_else(|| state.config.default_file_name.clone());
    let result = form.into_result()?;
    let bytes = excel::result_workbook_bytes(&result)?;

    debug!(
        matched = result.matched_count(),
        unmatched = result.unmatched_count(),
        bytes = bytes.len(),
        "result workbook generated"
    );

    let headers = [
        (header::CONTENT_TYPE, XLSX_MIME.to_string()),
        (header::CONTENT_DISPOSITION, content_disposition(&file_name)),
    ];
    Ok((headers, bytes).into_response())
}
