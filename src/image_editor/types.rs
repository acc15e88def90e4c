//! Gemini generateContent のリクエスト/レスポンス型

use serde::{Deserialize, Serialize};

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    InlineData { inline_data: InlineData },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(alias = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// Gemini APIレスポンス
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeminiResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub content: ResponseContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
    #[serde(rename = "inlineData", alias = "inline_data")]
    pub inline_data: Option<InlineData>,
}

impl GeminiResponse {
    /// 最初の候補に含まれる最初の画像
    pub fn first_image(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }

    /// 画像の代わりに返ってきたテキスト（ログ用）
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_text_serialize() {
        let part = Part::Text { text: "Hello".to_string() };
        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"text":"Hello"}"#);
    }

    #[test]
    fn test_part_inline_data_serialize() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: "base64data".to_string(),
            },
        };
        let json = serde_json::to_string(&part).expect("シリアライズ失敗");
        assert!(json.contains("\"inline_data\""));
        assert!(json.contains("\"mime_type\":\"image/png\""));
        assert!(json.contains("\"data\":\"base64data\""));
    }

    #[test]
    fn test_response_with_image() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Aquí está tu imagen" },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                    ]
                }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        let image = response.first_image().expect("画像がない");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(response.text(), Some("Aquí está tu imagen"));
    }

    #[test]
    fn test_response_text_only() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"No puedo"}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert!(response.first_image().is_none());
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(response.first_image().is_none());
        assert!(response.text().is_none());
    }
}
