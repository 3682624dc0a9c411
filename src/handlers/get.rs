use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// GET /items/{id} handler - Retrieve a single item
///
/// Ids are opaque strings; an id in any format that matches no stored item
/// is a plain not-found, not a validation failure.
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "No item with the given id", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    match state.store.get(&id).await {
        Some(item) => {
            tracing::debug!("Retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::ItemNotFound)
        }
    }
}
