use axum::{Json, extract::State};
use serde::Serialize;

use super::AppState;

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub has_server_key: bool,
    pub demo_mode: bool,
}

/// GET /api/config - Tells the page whether it must ask the user for a key.
pub async fn get(State(state): State<AppState>) -> Json<ClientConfig> {
    let has_server_key = state.providers.has_server_key();
    Json(ClientConfig {
        has_server_key,
        demo_mode: !has_server_key,
    })
}
