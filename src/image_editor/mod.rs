//! AI画像編集（Gemini）
//!
//! 写真と指示文を送り、生成された画像を1枚受け取る。
//! レスポンスに画像が無い場合は通信エラーではなくアプリ側の失敗
//! （`NoImageGenerated`）として扱う。

mod session;
pub mod types;

pub use session::EditSession;

use crate::config::Config;
use crate::error::{LiquorHubError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};
use types::{Content, GeminiRequest, GeminiResponse, InlineData, Part};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// 指示文の候補
pub const PROMPT_SUGGESTIONS: &[&str] =
    &["Añade hielo", "Fondo vintage", "Estilo neón", "Efecto revista"];

/// 送信できる画像形式
const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::WebP,
    ImageFormat::Gif,
];

/// Data URLからBase64データ部分を抽出
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出（取れなければ "image/png"）
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("image/png")
}

fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// 編集元の画像
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SourceImage {
    /// バイト列から作る（形式は中身から判定）
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&bytes)
            .map_err(|e| LiquorHubError::ImageLoad(e.to_string()))?;

        if !SUPPORTED_FORMATS.contains(&format) {
            return Err(LiquorHubError::ImageLoad(format!(
                "formato no soportado: {:?}",
                format
            )));
        }

        Ok(Self {
            mime_type: format.to_mime_type().to_string(),
            bytes,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LiquorHubError::FileNotFound(path.display().to_string()));
        }
        Self::from_bytes(std::fs::read(path)?)
    }

    /// "data:image/png;base64,..." 形式から作る
    ///
    /// MIMEタイプは中身から判定し直す。宣言と違う場合は中身を優先する。
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        let data = extract_base64_from_data_url(data_url)
            .ok_or_else(|| LiquorHubError::ImageLoad("Data URL no válida".into()))?;
        let bytes = STANDARD
            .decode(data)
            .map_err(|e| LiquorHubError::ImageLoad(e.to_string()))?;
        let image = Self::from_bytes(bytes)?;

        let declared = extract_mime_type_from_data_url(data_url);
        if declared != image.mime_type {
            warn!(%declared, detected = %image.mime_type, "el tipo declarado no coincide con la imagen");
        }
        Ok(image)
    }

    pub fn to_data_url(&self) -> String {
        to_data_url(&self.mime_type, &self.bytes)
    }
}

/// 生成された画像
#[derive(Debug, Clone, PartialEq)]
pub struct EditedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl EditedImage {
    pub fn to_data_url(&self) -> String {
        to_data_url(&self.mime_type, &self.bytes)
    }

    /// MIMEタイプに合う拡張子
    pub fn extension(&self) -> &'static str {
        ImageFormat::from_mime_type(&self.mime_type)
            .and_then(|f| f.extensions_str().first().copied())
            .unwrap_or("png")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// レスポンスから画像を取り出す
pub fn edited_image_from_response(response: &GeminiResponse) -> Result<EditedImage> {
    let Some(inline) = response.first_image() else {
        if let Some(text) = response.text() {
            warn!(%text, "la respuesta no contiene imagen");
        }
        return Err(LiquorHubError::NoImageGenerated);
    };

    let bytes = STANDARD
        .decode(inline.data.trim())
        .map_err(|e| LiquorHubError::ApiParse(format!("base64: {}", e)))?;

    let mime_type = if inline.mime_type.is_empty() {
        "image/png".to_string()
    } else {
        inline.mime_type.clone()
    };

    Ok(EditedImage { mime_type, bytes })
}

/// 指示文を送信用の文章にする
pub fn build_instruction(prompt: &str) -> String {
    format!(
        "Transform this image based on the following instruction: {}. Return ONLY the generated image.",
        prompt
    )
}

/// Gemini画像編集クライアント
#[derive(Debug, Clone)]
pub struct ImageEditor {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl ImageEditor {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            api_base: GEMINI_API_BASE.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.get_api_key()?, config.image_model.clone(), config.timeout())
    }

    /// APIのベースURLを差し替える（プロキシ・テスト用）
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }

    pub fn build_request(image: &SourceImage, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: STANDARD.encode(&image.bytes),
                        },
                    },
                    Part::Text {
                        text: build_instruction(prompt),
                    },
                ],
            }],
        }
    }

    /// 画像を編集する
    pub async fn edit(&self, image: &SourceImage, prompt: &str) -> Result<EditedImage> {
        let request = Self::build_request(image, prompt);
        let url = format!("{}?key={}", self.endpoint(), self.api_key);

        debug!(model = %self.model, bytes = image.bytes.len(), "enviando imagen a Gemini");

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LiquorHubError::ApiCall(format!("API error: {} {}", status, text.trim())));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LiquorHubError::ApiParse(e.to_string()))?;

        edited_image_from_response(&payload)
    }
}
