use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use crate::config::Config;
use crate::controller::AppState;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route_layer(Extension(app_state.config))
}

/// Liveness probe, reports which providers are configured without calling them
async fn get_health_check(
    Extension(config): Extension<Arc<Config>>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "environment": config.environment,
            "maps_configured": config.maps_configured(),
            "image_search_configured": config.image_search_credentials().is_some(),
        })),
    )
}
