use serde::Serialize;
use tracing::warn;
use crate::error::ResolveError;
use crate::models::coordinates::Coordinates;
use crate::models::google::{PlaceDetailsResult, PlaceSearchResult, STATUS_OK};
use crate::models::place::{PlaceDetails, Review, MAX_REVIEWS};
use crate::repositories::google_maps_repo::GoogleMapsRepo;

#[derive(Clone, Serialize, Debug)]
pub struct EnrichedPlace {
    pub place_name: String,
    pub place_details: PlaceDetails,
    pub photo_url: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// Text search is required; the details lookup that follows is best effort
/// and leaves the search result untouched when it fails.
pub async fn enrich_place(
    maps_repo: &GoogleMapsRepo,
    place_name: &str,
) -> Result<EnrichedPlace, ResolveError> {
    let place_name = place_name.trim();
    if place_name.is_empty() {
        return Err(ResolveError::validation("Place name is required"));
    }

    let search = maps_repo.text_search(place_name).await?;
    let candidate = search
        .results
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::not_found("Place not found"))?;

    let enrichment = fetch_enrichment(maps_repo, &candidate.place_id).await;

    let photo_reference = enrichment
        .as_ref()
        .and_then(|details| details.photos.first())
        .or_else(|| candidate.photos.first())
        .map(|photo| photo.photo_reference.clone());

    // Coordinates stay on the search result even when details carry a geometry.
    let coordinates = candidate.geometry.as_ref().map(|geometry| geometry.location);

    let mut place_details = base_details(&candidate);
    if let Some(details) = enrichment {
        place_details = apply_enrichment(place_details, details);
    }

    let photo_url = photo_reference
        .map(|reference| maps_repo.photo_url(&reference))
        .transpose()?;

    Ok(EnrichedPlace {
        place_name: place_name.to_string(),
        place_details,
        photo_url,
        coordinates,
    })
}

async fn fetch_enrichment(
    maps_repo: &GoogleMapsRepo,
    place_id: &str,
) -> Option<PlaceDetailsResult> {
    match maps_repo.place_details(place_id).await {
        Ok(response) if response.status == STATUS_OK => response.result,
        Ok(response) => {
            warn!("Place details for {} returned status {}, skipping enrichment", place_id, response.status);
            None
        }
        Err(e) => {
            warn!("Place details lookup for {} failed due to: {:#}, skipping enrichment", place_id, e);
            None
        }
    }
}

fn base_details(candidate: &PlaceSearchResult) -> PlaceDetails {
    PlaceDetails {
        place_id: candidate.place_id.clone(),
        name: candidate.name.clone(),
        formatted_address: candidate.formatted_address.clone(),
        rating: candidate.rating,
        types: candidate.types.clone(),
        geometry: candidate.geometry.as_ref().map(|geometry| geometry.location),
        reviews: None,
        website: None,
        phone: None,
    }
}

/// Shallow overlay: every field present on `details` replaces the base value.
fn apply_enrichment(
    base: PlaceDetails,
    details: PlaceDetailsResult,
) -> PlaceDetails {
    let reviews = details.reviews.map(|reviews| {
        reviews
            .into_iter()
            .take(MAX_REVIEWS)
            .map(|review| Review {
                author_name: review.author_name,
                rating: review.rating,
                text: review.text,
                relative_time_description: review.relative_time_description,
            })
            .collect::<Vec<Review>>()
    });

    PlaceDetails {
        place_id: details.place_id.unwrap_or(base.place_id),
        name: details.name.unwrap_or(base.name),
        formatted_address: details.formatted_address.unwrap_or(base.formatted_address),
        rating: details.rating.or(base.rating),
        types: details.types.or(base.types),
        geometry: details.geometry.map(|geometry| geometry.location).or(base.geometry),
        reviews: reviews.or(base.reviews),
        website: details.website.or(base.website),
        phone: details.formatted_phone_number.or(base.phone),
    }
}
