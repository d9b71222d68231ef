//! ログ出力の初期化

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログレベル文字列を解釈する（不明な値はINFO）
pub fn parse_level(level: &str) -> Level {
    match level.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// tracingのサブスクライバを設定する
///
/// `RUST_LOG` があればそちらを優先する。
pub fn setup_logging(level: &str) {
    let level = parse_level(level);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()))
        .add_directive("hyper=info".parse().unwrap_or_else(|_| level.into()));

    let fmt_layer = fmt::layer()
        .with_target(level >= Level::DEBUG)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    // テストなどで二重に初期化されても無視する
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
