use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::Value;

use super::AppState;
use crate::error::AppError;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecommendInput {
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub click_count: Option<u32>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// POST /api/recommend
#[tracing::instrument(skip_all)]
pub async fn action(
    State(state): State<AppState>,
    Json(input): Json<RecommendInput>,
) -> Result<Json<Value>, AppError> {
    let click_count = input.click_count.unwrap_or(0);
    let gateway = state.providers.gateway(input.api_key.as_deref());
    tracing::debug!(demo = gateway.is_demo(), click_count, "recommending dinner");

    let payload = gateway
        .recommend(
            input.lunch.as_deref().unwrap_or_default(),
            input.ingredients.as_deref().unwrap_or_default(),
            click_count,
        )
        .await?;

    Ok(Json(payload))
}
