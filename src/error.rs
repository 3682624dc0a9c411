use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every request failure converts into one of these variants and renders
/// as an HTTP status plus a `{"error": …}` JSON body; nothing propagates
/// beyond the request that caused it.
#[derive(Debug)]
pub enum ApiError {
    /// POST body without a usable title
    MissingTitle,
    /// No item with the requested id (GET, DELETE)
    ItemNotFound,
    /// No item with the requested id (PUT keeps its own wording)
    ItemNotFoundForEdit,
    /// Store write failure mid-request
    Store(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingTitle => (
                StatusCode::BAD_REQUEST,
                "'title' is required".to_string(),
            ),
            ApiError::ItemNotFound => (
                StatusCode::NOT_FOUND,
                "item not found".to_string(),
            ),
            ApiError::ItemNotFoundForEdit => (
                StatusCode::NOT_FOUND,
                "item not found for edit".to_string(),
            ),
            ApiError::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("storage error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}
