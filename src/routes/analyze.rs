use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::Value;

use super::AppState;
use crate::error::AppError;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeInput {
    /// Data URL or bare base64 of the menu sheet photo.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// POST /api/analyze - Extracts the date → lunch menu map from a photo.
#[tracing::instrument(skip_all)]
pub async fn action(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeInput>,
) -> Result<Json<Value>, AppError> {
    let image = input
        .image
        .filter(|image| !image.trim().is_empty())
        .ok_or_else(|| AppError::ValidationError("image is required".to_string()))?;

    let gateway = state.providers.gateway(input.api_key.as_deref());
    let menu = gateway.analyze(&image).await?;

    Ok(Json(menu))
}
