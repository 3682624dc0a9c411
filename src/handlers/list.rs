use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /items handler - List all items
///
/// Returns the full item sequence in store order. Always succeeds; an
/// empty store yields an empty array.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items in store order", body = Vec<Item>)
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list().await;

    tracing::debug!("Listed {} items", items.len());
    (StatusCode::OK, Json(items))
}
