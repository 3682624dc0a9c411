use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, UpdateItemRequest};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// PUT /items/{id} handler - Partially update an item
///
/// Only supplied non-empty fields are overwritten; an empty string behaves
/// like an omitted field and cannot clear a value.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 404, description = "No item with the given id", body = ErrorResponse),
        (status = 500, description = "Store write failure", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    match state.store.update(&id, body.title, body.description).await? {
        Some(item) => {
            tracing::info!("Item updated: {}", item.id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found for edit with id: {}", id);
            Err(ApiError::ItemNotFoundForEdit)
        }
    }
}
