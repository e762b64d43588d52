use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skydesk_core::CoreError;

#[derive(Debug)]
pub enum AppError {
    NotFoundError(String),
    BadGatewayError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadGatewayError(msg) => {
                tracing::error!("Upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, "Flight service unavailable".to_string())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Upstream(_) | CoreError::UpstreamStatus { .. } | CoreError::Decode(_) => {
                AppError::BadGatewayError(err.to_string())
            }
            CoreError::MissingElement(_) | CoreError::Document(_) | CoreError::Config(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}
