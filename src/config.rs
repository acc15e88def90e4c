use crate::error::{LiquorHubError, Result};
use liquor_hub_common::DEFAULT_CATALOG_FILENAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 既定の画像編集モデル
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// APIキーを読む環境変数（先にあるものを優先）
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub image_model: String,
    /// 既定カタログのパス（未設定ならカレントの LICORES.xlsx）
    pub catalog_path: Option<PathBuf>,
    /// 既定カタログのURL（設定されていればファイルより優先）
    pub catalog_url: Option<String>,
    pub timeout_seconds: u64,
}

/// 既定カタログの取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LiquorHubError::Config("No se encontró el directorio home".into()))?;
        Ok(home.join(".config").join("liquor-hub").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_key: None,
            image_model: DEFAULT_IMAGE_MODEL.into(),
            catalog_path: None,
            catalog_url: None,
            timeout_seconds: 120,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        for name in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(name) {
                if !key.trim().is_empty() {
                    return Ok(key);
                }
            }
        }

        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LiquorHubError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn set_catalog_url(&mut self, url: String) -> Result<()> {
        self.catalog_url = if url.trim().is_empty() { None } else { Some(url) };
        self.save()
    }

    pub fn catalog_source(&self) -> CatalogSource {
        match &self.catalog_url {
            Some(url) => CatalogSource::Url(url.clone()),
            None => CatalogSource::File(
                self.catalog_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILENAME)),
            ),
        }
    }
}
