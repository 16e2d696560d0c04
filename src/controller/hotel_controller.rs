use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Extension, Json, Router};
use serde_json::json;
use tracing::{info, warn};
use crate::models::hotel::HotelSearchRequest;
use crate::repositories::hotel_repo::MockHotelRepo;
use crate::services::hotel_search::search_hotels;

pub fn router() -> Router {
    let hotel_repo = Arc::new(MockHotelRepo::new());

    Router::new()
        .route("/search-hotels", post(search_hotels_handler))
        .route_layer(Extension(hotel_repo))
}

pub async fn search_hotels_handler(
    Extension(hotel_repo): Extension<Arc<MockHotelRepo>>,
    body: Result<Json<HotelSearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match body {
        Ok(Json(request)) => request,
        Err(e) => {
            warn!("Rejected search-hotels payload: {}", e);
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response();
        }
    };

    return match search_hotels(&hotel_repo, request) {
        Ok(outcome) => {
            let matched = outcome.results.len();
            info!("Hotel search matched {} hotels", matched);
            (
                StatusCode::OK,
                Json(json!({
                    "results": outcome.results,
                    "searchParams": outcome.search_params,
                    "message": format!("Found {} hotels", matched),
                })),
            ).into_response()
        }
        Err(e) => {
            warn!("Invalid hotel search: {}", e);
            (e.status_code(), Json(json!({ "error": e.to_string() }))).into_response()
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::config::test_config;
    use crate::controller::router_endpoints;
    use crate::test_support::{spawn_server, test_client, test_state};

    async fn search(body: Value) -> reqwest::Response {
        let state = test_state(test_config());
        let app = spawn_server(router_endpoints(state).unwrap()).await;
        test_client()
            .post(format!("{}/search-hotels", app))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn location_search_returns_matching_hotels() {
        let response = search(json!({
            "checkin": "2024-04-01",
            "checkout": "2024-04-03",
            "adults": 2,
            "searchType": "location",
            "location": "中央区",
        }))
        .await;

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["results"].as_array().unwrap().len(), 1);
        assert_eq!(body["searchParams"]["searchType"], "location");
        assert_eq!(body["searchParams"]["nights"], 2);
        assert_eq!(body["message"], "Found 1 hotels");
    }

    #[tokio::test]
    async fn coordinates_search_returns_catalog() {
        let response = search(json!({
            "checkin": "2024-04-01",
            "checkout": "2024-04-02",
            "adults": 1,
            "searchType": "coordinates",
            "coordinates": { "lat": 35.68, "lng": 139.76 },
        }))
        .await;

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn untyped_search_with_loose_dates_returns_catalog() {
        let response = search(json!({
            "checkin": "April 1",
            "checkout": "April 3",
            "adults": 2,
        }))
        .await;

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
        assert!(body["searchParams"].get("nights").is_none());
        assert_eq!(body["message"], "Found 3 hotels");
    }

    #[tokio::test]
    async fn missing_checkout_is_400() {
        let response = search(json!({
            "checkin": "2024-04-01",
            "adults": 1,
            "searchType": "coordinates",
            "coordinates": { "lat": 35.68, "lng": 139.76 },
        }))
        .await;

        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }
}
