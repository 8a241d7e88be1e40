use axum::{
    Router,
    routing::{get, post},
};
use lunchcheck_provider::Providers;
use tower_http::cors::CorsLayer;

mod analyze;
mod client_config;
mod health;
mod index;
mod recommend;

pub use analyze::AnalyzeInput;
pub use recommend::RecommendInput;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub providers: Providers,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> anyhow::Result<Self> {
        let providers = config.providers()?;
        Ok(Self { config, providers })
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/api/config", get(client_config::get))
        .route("/api/analyze", post(analyze::action))
        .route("/api/recommend", post(recommend::action))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
