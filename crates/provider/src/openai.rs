use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::credentials::ApiKey;
use crate::error::{GatewayError, GatewayResult};

/// One chat completion call.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    pub system: Option<String>,
    pub prompt: String,
    /// `data:` URL attached as an image part.
    pub image_url: Option<String>,
    /// Ask for `response_format: json_object`.
    pub json_mode: bool,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Seam between the gateway and a chat completion backend.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the assistant message content.
    async fn complete(&self, request: ChatRequest) -> GatewayResult<String>;
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

/// OpenAI-compatible `/chat/completions` client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: ApiKey,
    settings: OpenAiSettings,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(client: Client, api_key: ApiKey, settings: OpenAiSettings) -> Self {
        Self {
            client,
            api_key,
            settings,
        }
    }

    fn body(&self, request: &ChatRequest) -> Value {
        let mut messages = Vec::new();
        if let Some(system) = &request.system {
            messages.push(json!({ "role": "system", "content": system }));
        }

        let user = match &request.image_url {
            Some(url) => json!({
                "role": "user",
                "content": [
                    { "type": "text", "text": request.prompt },
                    { "type": "image_url", "image_url": { "url": url } }
                ]
            }),
            None => json!({ "role": "user", "content": request.prompt }),
        };
        messages.push(user);

        let mut body = json!({
            "model": self.settings.model,
            "messages": messages,
        });
        if request.json_mode {
            body["response_format"] = json!({ "type": "json_object" });
        }
        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }
        body
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    #[tracing::instrument(skip_all, fields(model = %self.settings.model))]
    async fn complete(&self, request: ChatRequest) -> GatewayResult<String> {
        let url = format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        );

        tracing::debug!(image = request.image_url.is_some(), "sending chat completion");

        let response = self
            .client
            .post(url)
            .bearer_auth(self.api_key.expose())
            .timeout(self.settings.timeout)
            .json(&self.body(&request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "OpenAI request failed");
            return Err(GatewayError::Upstream {
                service: "OpenAI",
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await?;
        Ok(chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenAiClient {
        OpenAiClient::new(
            Client::new(),
            ApiKey::parse("sk-test").unwrap(),
            OpenAiSettings {
                base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-4o-mini".to_string(),
                timeout: Duration::from_secs(5),
            },
        )
    }

    #[test]
    fn test_text_body_with_system_and_json_mode() {
        let body = client().body(&ChatRequest {
            system: Some("요리 전문가".to_string()),
            prompt: "저녁 추천".to_string(),
            json_mode: true,
            ..Default::default()
        });

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "저녁 추천");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_image_body_uses_content_parts() {
        let body = client().body(&ChatRequest {
            prompt: "급식표".to_string(),
            image_url: Some("data:image/jpeg;base64,AAAA".to_string()),
            max_tokens: Some(2000),
            temperature: Some(0.1),
            ..Default::default()
        });

        let user = &body["messages"][0];
        assert_eq!(user["content"][0]["type"], "text");
        assert_eq!(user["content"][1]["image_url"]["url"], "data:image/jpeg;base64,AAAA");
        assert_eq!(body["max_tokens"], 2000);
        assert!(body.get("response_format").is_none());
    }
}
