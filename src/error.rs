use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lunchcheck_provider::GatewayError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Provider error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Internal server error")]
    InternalError(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::GatewayError(GatewayError::InvalidImage(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::GatewayError(GatewayError::SerializationError(_))
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::GatewayError(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::GatewayError(GatewayError::InvalidImage(msg)) => msg.clone(),
            AppError::GatewayError(e) => {
                tracing::error!("Provider error: {}", e);
                e.to_string()
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An unexpected error occurred. Please try again later.".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::ValidationError("image is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(GatewayError::InvalidImage("empty".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(GatewayError::MalformedResponse("eof".into())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(GatewayError::Upstream {
                service: "OpenAI",
                status: 429,
                body: "quota".into(),
            })
            .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::InternalError("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
