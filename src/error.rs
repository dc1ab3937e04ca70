use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// Errors that cross the HTTP boundary.
///
/// Everything recoverable is handled before this point (loaders substitute
/// empty collections, the color endpoint substitutes its fallback color);
/// what remains maps onto a small set of status codes with JSON bodies.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} is required")]
    MissingInput(&'static str),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingInput(_) | AppError::UnsupportedLanguage(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Upstream(e) => {
                // Upstream details go to the log, not to the client
                error!("Upstream failure: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
