use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateItemRequest, Item};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// POST /items handler - Create a new item
///
/// A missing or empty title is rejected before the store is touched. The
/// store assigns the id and defaults the description.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing or empty title", body = ErrorResponse),
        (status = 500, description = "Store write failure", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let title = body
        .title
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingTitle)?;

    let item = state.store.create(title, body.description).await?;

    tracing::info!("Item created: {} ({})", item.title, item.id);
    Ok((StatusCode::CREATED, Json(item)))
}
