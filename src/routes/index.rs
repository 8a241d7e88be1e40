use askama::Template;
use axum::{extract::State, response::Html};

use super::AppState;
use crate::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub demo_mode: bool,
    pub version: &'static str,
}

pub async fn page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        demo_mode: !state.providers.has_server_key(),
        version: env!("CARGO_PKG_VERSION"),
    };

    template
        .render()
        .map(Html)
        .map_err(|e| AppError::InternalError(format!("Failed to render index page: {e}")))
}
