//! HTMLページの生成

use crate::error::Result;
use client_match_common::{CandidateEntry, MatchResult};

const STYLE: &str = r#"
    body { font-family: -apple-system, 'Segoe UI', Roboto, Arial, sans-serif; max-width: 960px; margin: 0 auto; padding: 20px; color: #333; }
    h1 { font-size: 22px; }
    textarea { width: 100%; font-family: monospace; }
    .columns { display: flex; gap: 24px; }
    .columns > section { flex: 1; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: left; }
    th { background: #f5f5f5; }
    .error { color: #b00020; }
"#;

/// HTML特殊文字のエスケープ
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>顧客照合</title>
    <style>{STYLE}</style>
</head>
<body>
    <h1>顧客コード・携帯番号照合</h1>
{body}
</body>
</html>
"#
    )
}

fn compare_form(pasted_data: &str) -> String {
    format!(
        r#"    <form action="/compare" method="post" enctype="multipart/form-data">
        <p><label>参照ファイル: <input type="file" name="file" required></label></p>
        <p><label>照合データ（1行に「コード 携帯番号」）:<br>
        <textarea name="pasted_data" rows="12" required>{}</textarea></label></p>
        <p><button type="submit">照合</button></p>
    </form>
"#,
        escape_html(pasted_data)
    )
}

fn records_table(title: &str, records: &[CandidateEntry]) -> String {
    let rows: String = records
        .iter()
        .map(|r| {
            format!(
                "            <tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(&r.code),
                escape_html(&r.mobile)
            )
        })
        .collect();

    format!(
        r#"        <section>
        <h2>{} ({})</h2>
        <table>
            <tr><th>ClientCode</th><th>Mobile</th></tr>
{}        </table>
        </section>
"#,
        escape_html(title),
        records.len(),
        rows
    )
}

/// 入力フォームのみのページ
pub fn render_index() -> String {
    layout(&compare_form(""))
}

/// 照合結果ページ
///
/// 貼り付けデータを再表示し、結果をJSONで埋め込んだダウンロードフォームを付ける。
pub fn render_results(result: &MatchResult, pasted_data: &str, default_file_name: &str) -> Result<String> {
    let payload = result.to_json()?;

    let body = format!(
        r#"{form}
    <div class="columns">
{matched}{unmatched}    </div>
    <form action="/download" method="post">
        <input type="hidden" name="results" value="{payload}">
        <p><label>ファイル名: <input type="text" name="file_name" value="{file_name}"></label>.xlsx
        <button type="submit">ダウンロード</button></p>
    </form>
"#,
        form = compare_form(pasted_data),
        matched = records_table("一致", &result.matched),
        unmatched = records_table("不一致", &result.unmatched),
        payload = escape_html(&payload),
        file_name = escape_html(default_file_name),
    );

    Ok(layout(&body))
}

/// エラーページ
pub fn render_error(message: &str) -> String {
    layout(&format!(
        "    <p class=\"error\">{}</p>\n    <p><a href=\"/\">戻る</a></p>\n",
        escape_html(message)
    ))
}
