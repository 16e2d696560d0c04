use serde::Serialize;
use tracing::info;
use crate::error::ResolveError;
use crate::models::coordinates::Coordinates;
use crate::models::google::{GeocodeResult, STATUS_OK};
use crate::models::place::PlaceDetails;
use crate::repositories::google_maps_repo::GoogleMapsRepo;
use crate::services::static_map::StaticMapRenderer;

#[derive(Clone, Serialize, Debug)]
pub struct ResolvedLocation {
    pub location: String,
    pub coordinates: Coordinates,
    pub place_details: PlaceDetails,
    pub photo_url: Option<String>,
    pub map_image_url: String,
    pub formatted_address: String,
}

/// Geocodes a free-text location with a single provider call.
pub async fn resolve_location(
    maps_repo: &GoogleMapsRepo,
    map_renderer: &StaticMapRenderer,
    location: &str,
) -> Result<ResolvedLocation, ResolveError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(ResolveError::validation("Location is required"));
    }

    let response = maps_repo.geocode(location).await?;
    if response.status != STATUS_OK {
        info!("Geocode for {} returned status {}", location, response.status);
        return Err(ResolveError::not_found("Location not found"));
    }
    let result = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::not_found("Location not found"))?;

    let coordinates = result.geometry.location;
    let map_image_url = map_renderer.render(coordinates)?;
    Ok(ResolvedLocation {
        location: location.to_string(),
        coordinates,
        place_details: place_details_from_geocode(&result, location),
        photo_url: None,
        map_image_url,
        formatted_address: result.formatted_address,
    })
}

fn place_details_from_geocode(
    result: &GeocodeResult,
    location: &str,
) -> PlaceDetails {
    let name = result
        .address_components
        .first()
        .map(|component| component.long_name.clone())
        .unwrap_or_else(|| location.to_string());

    PlaceDetails {
        place_id: result.place_id.clone(),
        name,
        formatted_address: result.formatted_address.clone(),
        rating: None,
        types: Some(result.types.clone()).filter(|types| !types.is_empty()),
        geometry: Some(result.geometry.location),
        reviews: None,
        website: None,
        phone: None,
    }
}
