use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET / handler - Plain text service banner
///
/// Names the configured port so a client pointed at the wrong host or port
/// gets an immediate human-readable confirmation.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service banner", body = String, content_type = "text/plain")
    ),
    tag = "meta"
)]
pub async fn root_handler(State(state): State<AppState>) -> String {
    format!(
        "API running on port {}. See /items",
        state.config.service_port
    )
}
