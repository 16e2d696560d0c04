//! In-process fake providers for tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use crate::config::Config;
use crate::controller::AppState;

/// Client that never routes loopback traffic through an ambient proxy.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub fn test_state(config: Config) -> AppState {
    AppState {
        config: Arc::new(config),
        http_client: test_client(),
    }
}

/// Serves `app` on an ephemeral local port and returns its base url.
pub async fn spawn_server(app: Router) -> String {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let address = server.local_addr();
    tokio::spawn(server);
    format!("http://{}", address)
}

/// Google Maps style provider answering every endpoint with a canned payload.
pub fn fake_maps_provider(
    geocode: Value,
    text_search: Value,
    details: Option<Value>,
) -> Router {
    Router::new()
        .route("/maps/api/geocode/json", get(move || async move { Json(geocode) }))
        .route("/maps/api/place/textsearch/json", get(move || async move { Json(text_search) }))
        .route(
            "/maps/api/place/details/json",
            get(move || async move {
                match details {
                    Some(body) => (StatusCode::OK, Json(body)).into_response(),
                    None => (StatusCode::INTERNAL_SERVER_ERROR, "details unavailable").into_response(),
                }
            }),
        )
}

/// Image search provider that fails for any query containing "broken",
/// finds nothing for queries containing "nothing", and otherwise returns
/// one link derived from the query.
pub fn fake_image_provider() -> Router {
    Router::new().route(
        "/customsearch/v1",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let query = params.get("q").cloned().unwrap_or_default();
            if query.contains("broken") {
                return (StatusCode::INTERNAL_SERVER_ERROR, "quota exceeded").into_response();
            }
            if query.contains("nothing") {
                return Json(json!({ "kind": "customsearch#search" })).into_response();
            }
            let link = format!("https://images.example/{}.jpg", query.replace(' ', "-"));
            Json(json!({ "items": [{ "link": link, "title": query }] })).into_response()
        }),
    )
}

pub fn kyoto_geocode() -> Value {
    json!({
        "status": "OK",
        "results": [{
            "place_id": "geo-kyoto",
            "formatted_address": "Kyoto, Japan",
            "types": ["locality", "political"],
            "geometry": { "location": { "lat": 35.0116, "lng": 135.7681 } },
            "address_components": [
                { "long_name": "Kyoto", "short_name": "Kyoto", "types": ["locality"] }
            ]
        }]
    })
}

pub fn kinkakuji_search() -> Value {
    json!({
        "status": "OK",
        "results": [{
            "place_id": "place-kinkakuji",
            "name": "Kinkaku-ji",
            "formatted_address": "1 Kinkakujicho, Kita Ward, Kyoto",
            "rating": 4.5,
            "types": ["tourist_attraction"],
            "geometry": { "location": { "lat": 35.0394, "lng": 135.7292 } },
            "photos": [{ "photo_reference": "search-photo", "height": 600, "width": 800 }]
        }]
    })
}

pub fn kinkakuji_details(review_count: usize) -> Value {
    let reviews: Vec<Value> = (1..=review_count)
        .map(|i| json!({ "author_name": format!("reviewer {}", i), "rating": 5, "text": format!("review {}", i) }))
        .collect();
    json!({
        "status": "OK",
        "result": {
            "place_id": "place-kinkakuji",
            "name": "Kinkaku-ji (Golden Pavilion)",
            "formatted_address": "1 Kinkakujicho, Kita Ward, Kyoto, 603-8361, Japan",
            "rating": 4.6,
            "geometry": { "location": { "lat": 35.03937, "lng": 135.72924 } },
            "reviews": reviews,
            "website": "https://www.shokoku-ji.jp/kinkakuji/",
            "formatted_phone_number": "075-461-0013",
            "photos": [{ "photo_reference": "details-photo" }]
        }
    })
}
