use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State, http::StatusCode};

/// DELETE /items/{id} handler - Remove an item
///
/// The removed item is returned wrapped in a single-element array; clients
/// consume the deletion result as a list.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Array containing the removed item", body = Vec<Item>),
        (status = 404, description = "No item with the given id", body = ErrorResponse),
        (status = 500, description = "Store write failure", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    match state.store.delete(&id).await? {
        Some(item) => {
            tracing::info!("Item deleted: {}", item.id);
            Ok((StatusCode::OK, Json(vec![item])))
        }
        None => {
            tracing::warn!("Attempted to delete nonexistent id: {}", id);
            Err(ApiError::ItemNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handlers::{create_handler, get_handler, list_handler};
    use crate::store::ItemStore;
    use axum::{Router, body::Body, http::Request, routing::get, routing::post};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn setup_test_app() -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = ItemStore::open(dir.path().join("db.json")).await.unwrap();

        let config = Config {
            service_port: 3333,
            service_host: "0.0.0.0".to_string(),
            store_path: dir.path().join("db.json").display().to_string(),
        };

        let state = AppState {
            store,
            config: Arc::new(config),
        };

        let app = Router::new()
            .route(
                crate::routes::ITEMS,
                post(create_handler).get(list_handler),
            )
            .route(
                crate::routes::ITEM,
                get(get_handler).delete(delete_handler),
            )
            .with_state(state);

        (app, dir)
    }

    async fn create_item(app: &Router, body: &str) -> Item {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_delete_returns_removed_item_as_array() {
        let (app, _dir) = setup_test_app().await;

        let created = create_item(&app, r#"{"title":"task"}"#).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/items/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let removed: Vec<Item> = serde_json::from_slice(&body).unwrap();
        assert_eq!(removed, vec![created.clone()]);

        // A subsequent GET for the same id is a not-found
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/items/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_404_and_keeps_items() {
        let (app, _dir) = setup_test_app().await;

        create_item(&app, r#"{"title":"task"}"#).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/items/no-such-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "item not found");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let items: Vec<Item> = serde_json::from_slice(&body).unwrap();
        assert_eq!(items.len(), 1, "Failed delete should not alter the store");
    }
}
