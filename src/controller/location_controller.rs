use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::error::ResolveError;
use crate::repositories::google_maps_repo::GoogleMapsRepo;
use crate::services::location_resolver::resolve_location;
use crate::services::static_map::StaticMapRenderer;

pub fn router(app_state: AppState) -> Router {
    let maps_repo = Arc::new(GoogleMapsRepo::new(
        app_state.http_client.clone(),
        app_state.config.google_maps_api_key.clone(),
        app_state.config.google_maps_base_url.clone(),
    ));
    let map_renderer = Arc::new(StaticMapRenderer::new(
        app_state.config.google_maps_base_url.clone(),
        app_state.config.google_maps_api_key.clone(),
    ));

    Router::new()
        .route("/resolve-location", post(resolve_location_handler))
        .route_layer(Extension(maps_repo))
        .route_layer(Extension(map_renderer))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ResolveLocationBody {
    pub location: Option<String>,
}

pub async fn resolve_location_handler(
    Extension(maps_repo): Extension<Arc<GoogleMapsRepo>>,
    Extension(map_renderer): Extension<Arc<StaticMapRenderer>>,
    body: Result<Json<ResolveLocationBody>, JsonRejection>,
) -> impl IntoResponse {
    let location = match body {
        Ok(Json(body)) => body.location.unwrap_or_default(),
        Err(e) => {
            warn!("Rejected resolve-location payload: {}", e);
            return (StatusCode::BAD_REQUEST, Json(json!({ "message": e.to_string() }))).into_response();
        }
    };

    return match resolve_location(&maps_repo, &map_renderer, &location).await {
        Ok(resolved) => {
            (StatusCode::OK, Json(resolved)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong resolving location {} due to: {}", location, e);
            let body = match &e {
                ResolveError::Upstream(_) => json!({
                    "message": "Failed to resolve location",
                    "error": e.to_string(),
                }),
                _ => json!({ "message": e.to_string() }),
            };
            (e.status_code(), Json(body)).into_response()
        }
    };
}
