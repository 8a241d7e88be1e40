//! Menu sheet images and the OCR backend.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::{Value, json};

use crate::error::{GatewayError, GatewayResult};

const DEFAULT_MIME: &str = "image/jpeg";

/// Base64 image body as uploaded by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    mime: String,
    base64: String,
}

impl ImagePayload {
    /// Accepts a `data:<mime>;base64,<body>` URL or a bare base64 body.
    pub fn parse(input: &str) -> GatewayResult<Self> {
        let input = input.trim();
        let (header, body) = match input.rsplit_once(',') {
            Some((header, body)) => (Some(header), body),
            None => (None, input),
        };

        if body.is_empty() {
            return Err(GatewayError::InvalidImage("image is empty".to_string()));
        }
        STANDARD
            .decode(body)
            .map_err(|e| GatewayError::InvalidImage(e.to_string()))?;

        let mime = header
            .and_then(|h| h.strip_prefix("data:"))
            .and_then(|h| h.split(';').next())
            .filter(|m| m.starts_with("image/"))
            .unwrap_or(DEFAULT_MIME);

        Ok(Self {
            mime: mime.to_string(),
            base64: body.to_string(),
        })
    }

    pub fn base64(&self) -> &str {
        &self.base64
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Extracts raw text from an image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// `Ok(None)` when the image holds no text.
    async fn detect_text(&self, image: &ImagePayload) -> GatewayResult<Option<String>>;
}

/// Google Cloud Vision `images:annotate` with `TEXT_DETECTION`.
#[derive(Debug, Clone)]
pub struct GoogleVision {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleVision {
    pub fn new(client: Client, api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

fn full_text(response: &Value) -> Option<String> {
    response["responses"][0]["textAnnotations"][0]["description"]
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

#[async_trait]
impl OcrEngine for GoogleVision {
    #[tracing::instrument(skip_all)]
    async fn detect_text(&self, image: &ImagePayload) -> GatewayResult<Option<String>> {
        let url = format!(
            "{}/v1/images:annotate",
            self.endpoint.trim_end_matches('/')
        );
        let body = json!({
            "requests": [{
                "image": { "content": image.base64() },
                "features": [{ "type": "TEXT_DETECTION" }]
            }]
        });

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Upstream {
                service: "Google Vision",
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let value: Value = response.json().await?;
        Ok(full_text(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_url() {
        let image = ImagePayload::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(image.mime(), "image/png");
        assert_eq!(image.base64(), "iVBORw0KGgo=");
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_parse_bare_base64_defaults_to_jpeg() {
        let image = ImagePayload::parse("/9j/4AAQ").unwrap();
        assert_eq!(image.mime(), "image/jpeg");
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert!(matches!(
            ImagePayload::parse(""),
            Err(GatewayError::InvalidImage(_))
        ));
        assert!(matches!(
            ImagePayload::parse("data:image/png;base64,"),
            Err(GatewayError::InvalidImage(_))
        ));
        assert!(matches!(
            ImagePayload::parse("not base64 at all!"),
            Err(GatewayError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_full_text_reads_first_annotation() {
        let response = json!({
            "responses": [{
                "textAnnotations": [
                    { "description": "02/10(월) 카레라이스\n" },
                    { "description": "카레라이스" }
                ]
            }]
        });
        assert_eq!(full_text(&response).as_deref(), Some("02/10(월) 카레라이스"));
        assert_eq!(full_text(&json!({ "responses": [{}] })), None);
    }
}
