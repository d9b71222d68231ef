use crate::error::{ClientMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 環境変数: 待ち受けホスト
pub const HOST_ENV: &str = "CLIENT_MATCH_HOST";
/// 環境変数: 待ち受けポート
pub const PORT_ENV: &str = "CLIENT_MATCH_PORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
    /// アップロード本文の上限（バイト）
    pub max_upload_bytes: usize,
    /// 貼り付けデータの行数上限
    pub max_pasted_lines: usize,
    /// 空の参照値を照合から除外する
    pub exclude_empty_reference: bool,
    /// ダウンロードファイル名の既定値（拡張子なし）
    pub default_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default_config()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ClientMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("client-match").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            debug: false,
            log_level: "info".into(),
            max_upload_bytes: 16 * 1024 * 1024,
            max_pasted_lines: 100_000,
            exclude_empty_reference: false,
            default_file_name: "results".into(),
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// 変数参照関数を使って環境変数の上書きを適用する
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        // 環境変数を優先
        if let Some(host) = lookup(HOST_ENV) {
            self.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.port = port.parse().map_err(|_| {
                ClientMatchError::Config(format!("{} がポート番号ではありません: {}", PORT_ENV, port))
            })?;
        }
        Ok(())
    }

    /// 設定値を検証する
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ClientMatchError::Config("port は1以上を指定してください".into()));
        }
        if self.max_upload_bytes == 0 {
            return Err(ClientMatchError::Config("max_upload_bytes は1以上を指定してください".into()));
        }
        if self.max_pasted_lines == 0 {
            return Err(ClientMatchError::Config("max_pasted_lines は1以上を指定してください".into()));
        }
        Ok(())
    }

    /// 待ち受けアドレス（host:port）
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 有効なログレベル（debug指定時はDEBUG固定）
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"port": 8080, "debug": true}"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.effective_log_level(), "debug");
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let config = Config { port: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(ClientMatchError::Config(_))));

        let config = Config { max_pasted_lines: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_upload_limit() {
        let config = Config { max_upload_bytes: 0, ..Config::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_upload_bytes"));
    }

    #[test]
    fn test_apply_env_overrides_host_and_port() {
        let mut config = Config::default();
        config
            .apply_env_from(|key| match key {
                HOST_ENV => Some("0.0.0.0".to_string()),
                PORT_ENV => Some("8080".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_apply_env_without_variables_keeps_values() {
        let mut config = Config::default();
        config.apply_env_from(|_| None).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_apply_env_rejects_non_numeric_port() {
        let mut config = Config::default();
        let err = config
            .apply_env_from(|key| (key == PORT_ENV).then(|| "http".to_string()))
            .unwrap_err();
        assert!(matches!(err, ClientMatchError::Config(_)));
        assert!(err.to_string().contains(PORT_ENV));
        assert_eq!(config.port, 5000);
    }
}
