use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use crate::controller::AppState;
use crate::models::itinerary::ItineraryActivity;
use crate::repositories::image_search_repo::ImageSearchRepo;
use crate::services::image_resolver::ImageResolver;
use crate::services::itinerary_images::resolve_activity_images;

pub fn router(app_state: AppState) -> anyhow::Result<Router> {
    let credentials = app_state
        .config
        .image_search_credentials()
        .map(|(api_key, engine_id)| (api_key.to_string(), engine_id.to_string()));
    let image_resolver = Arc::new(ImageResolver::new(
        ImageSearchRepo::new(
            app_state.http_client.clone(),
            app_state.config.custom_search_base_url.clone(),
        ),
        credentials,
        &app_state.config.placeholder_image_base_url,
    )?);

    Ok(Router::new()
        .route("/search-images", get(search_images))
        .route("/itinerary-images", post(itinerary_images))
        .route_layer(Extension(image_resolver)))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SearchImagesParam {
    pub q: Option<String>,
}

pub async fn search_images(
    Extension(image_resolver): Extension<Arc<ImageResolver>>,
    Query(query): Query<SearchImagesParam>,
) -> impl IntoResponse {
    let q = query.q.unwrap_or_default();
    if q.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Query parameter q is required" })),
        ).into_response();
    }

    let image = image_resolver.resolve(&q).await;
    (StatusCode::OK, Json(image)).into_response()
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ItineraryImagesBody {
    #[serde(default)]
    pub activities: Vec<ItineraryActivity>,
}

pub async fn itinerary_images(
    Extension(image_resolver): Extension<Arc<ImageResolver>>,
    body: Result<Json<ItineraryImagesBody>, JsonRejection>,
) -> impl IntoResponse {
    let activities = match body {
        Ok(Json(body)) => body.activities,
        Err(e) => {
            warn!("Rejected itinerary-images payload: {}", e);
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response();
        }
    };
    if activities.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "At least one activity is required" })),
        ).into_response();
    }

    let images = resolve_activity_images(&image_resolver, activities).await;
    (StatusCode::OK, Json(json!({ "activities": images }))).into_response()
}
