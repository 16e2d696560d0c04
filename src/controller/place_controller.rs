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
use crate::services::place_enricher::enrich_place;

pub fn router(app_state: AppState) -> Router {
    let maps_repo = Arc::new(GoogleMapsRepo::new(
        app_state.http_client.clone(),
        app_state.config.google_maps_api_key.clone(),
        app_state.config.google_maps_base_url.clone(),
    ));

    Router::new()
        .route("/enrich-place", post(enrich_place_handler))
        .route_layer(Extension(maps_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnrichPlaceBody {
    pub place_name: Option<String>,
}

pub async fn enrich_place_handler(
    Extension(maps_repo): Extension<Arc<GoogleMapsRepo>>,
    body: Result<Json<EnrichPlaceBody>, JsonRejection>,
) -> impl IntoResponse {
    let place_name = match body {
        Ok(Json(body)) => body.place_name.unwrap_or_default(),
        Err(e) => {
            warn!("Rejected enrich-place payload: {}", e);
            return (StatusCode::BAD_REQUEST, Json(json!({ "message": e.to_string() }))).into_response();
        }
    };

    return match enrich_place(&maps_repo, &place_name).await {
        Ok(place) => {
            (StatusCode::OK, Json(place)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong enriching place {} due to: {}", place_name, e);
            let body = match &e {
                ResolveError::Validation(message) => json!({ "message": message }),
                ResolveError::NotFound(message) => json!({
                    "message": message,
                    "place_name": place_name,
                }),
                ResolveError::Upstream(_) => json!({
                    "message": "Failed to enrich place",
                    "error": e.to_string(),
                    "place_name": place_name,
                }),
            };
            (e.status_code(), Json(body)).into_response()
        }
    };
}
