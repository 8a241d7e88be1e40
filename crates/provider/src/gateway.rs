//! Demo/live dispatch for the two AI-backed endpoints.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use time::{Date, OffsetDateTime};

use crate::credentials::Mode;
use crate::error::{GatewayError, GatewayResult};
use crate::menu::{IMAGE_PROMPT, demo_menu, ocr_prompt, parse_menu_reply};
use crate::openai::{ChatModel, ChatRequest, OpenAiClient, OpenAiSettings};
use crate::vision::{GoogleVision, ImagePayload, OcrEngine};

const RECOMMEND_SYSTEM: &str = "당신은 따뜻한 요리 전문가 AI입니다.";

/// Everything needed to build a [`Gateway`] for one request.
#[derive(Clone)]
pub struct Providers {
    client: Client,
    server_key: Option<String>,
    openai: OpenAiSettings,
    vision: Option<VisionSettings>,
}

#[derive(Clone)]
pub struct VisionSettings {
    pub api_key: String,
    pub endpoint: String,
}

impl Providers {
    pub fn new(
        server_key: Option<String>,
        openai: OpenAiSettings,
        vision: Option<VisionSettings>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            server_key,
            openai,
            vision,
        })
    }

    /// Whether the server itself holds a usable OpenAI key.
    pub fn has_server_key(&self) -> bool {
        !Mode::resolve(None, self.server_key.as_deref()).is_demo()
    }

    pub fn gateway(&self, request_key: Option<&str>) -> Gateway {
        match Mode::resolve(request_key, self.server_key.as_deref()) {
            Mode::Demo => Gateway::demo(),
            Mode::Live(key) => {
                let chat = OpenAiClient::new(self.client.clone(), key, self.openai.clone());
                let ocr = self.vision.as_ref().map(|vision| {
                    Arc::new(GoogleVision::new(
                        self.client.clone(),
                        vision.api_key.clone(),
                        vision.endpoint.clone(),
                    )) as Arc<dyn OcrEngine>
                });
                Gateway::live(Arc::new(chat), ocr)
            }
        }
    }
}

enum Backend {
    Demo,
    Live {
        chat: Arc<dyn ChatModel>,
        ocr: Option<Arc<dyn OcrEngine>>,
    },
}

/// Per-request facade over either the demo engine or the live model.
pub struct Gateway {
    backend: Backend,
}

impl Gateway {
    pub fn demo() -> Self {
        Self {
            backend: Backend::Demo,
        }
    }

    pub fn live(chat: Arc<dyn ChatModel>, ocr: Option<Arc<dyn OcrEngine>>) -> Self {
        Self {
            backend: Backend::Live { chat, ocr },
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self.backend, Backend::Demo)
    }

    /// Date → menu object read from a photographed menu sheet.
    pub async fn analyze(&self, image: &str) -> GatewayResult<Value> {
        let image = ImagePayload::parse(image)?;

        let (chat, ocr) = match &self.backend {
            Backend::Demo => {
                tracing::info!("demo mode: returning sample menu");
                return Ok(demo_menu(today()));
            }
            Backend::Live { chat, ocr } => (chat, ocr),
        };

        let raw_text = match ocr {
            Some(ocr) => ocr.detect_text(&image).await.unwrap_or_else(|e| {
                tracing::warn!("OCR failed, sending the image to the model instead: {e}");
                None
            }),
            None => None,
        };

        let request = match raw_text {
            Some(text) => ChatRequest {
                prompt: ocr_prompt(&text),
                max_tokens: Some(1000),
                ..Default::default()
            },
            None => ChatRequest {
                prompt: IMAGE_PROMPT.to_string(),
                image_url: Some(image.data_url()),
                max_tokens: Some(2000),
                temperature: Some(0.1),
                ..Default::default()
            },
        };

        let reply = chat.complete(request).await?;
        Ok(parse_menu_reply(&reply))
    }

    /// Dinner recommendation avoiding today's lunch.
    ///
    /// In demo mode `click_count` pages through the built-in catalog. In live mode
    /// the model's JSON object is passed through untouched.
    pub async fn recommend(
        &self,
        lunch: &str,
        ingredients: &str,
        click_count: u32,
    ) -> GatewayResult<Value> {
        let chat = match &self.backend {
            Backend::Demo => {
                tracing::info!(click_count, "demo mode: recommending from recipe catalog");
                let payload = lunchcheck_recipe::recommend(lunch, ingredients, click_count);
                return Ok(serde_json::to_value(payload)?);
            }
            Backend::Live { chat, .. } => chat,
        };

        let reply = chat
            .complete(ChatRequest {
                system: Some(RECOMMEND_SYSTEM.to_string()),
                prompt: recommend_prompt(lunch, ingredients),
                json_mode: true,
                ..Default::default()
            })
            .await?;

        serde_json::from_str(&reply).map_err(|e| {
            tracing::error!("model reply is not valid JSON: {e}");
            GatewayError::MalformedResponse(e.to_string())
        })
    }
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

fn recommend_prompt(lunch: &str, ingredients: &str) -> String {
    format!(
        r#"[상황]
오늘 아이 급식: {lunch}
냉장고 재료: {ingredients}

[작업]
1. 점심과 주재료/조리방식이 겹치지 않는 저녁 메뉴 2개를 추천하세요.
2. 각 메뉴별 상세 레시피와 팁을 포함하세요.
3. 지친 부모님을 위한 따뜻한 응원 멘트로 마무리하세요.

[형식 - JSON]
{{
  "analysis": "점심 메뉴 분석",
  "recipes": [
    {{
      "name": "요리명",
      "desc": "한 줄 설명",
      "time": "분",
      "diff": "쉬움/보통/어려움",
      "ingredients": ["재료1", "재료2"],
      "steps": ["Step 1", "Step 2"],
      "tip": "꿀팁"
    }}
  ],
  "message": "응원 메시지"
}}
반드시 JSON 형식으로만 응답하세요."#
    )
}
