use futures::future::join_all;
use tracing::info;
use crate::models::image::ImageSource;
use crate::models::itinerary::{ActivityImage, ItineraryActivity};
use crate::services::image_resolver::ImageResolver;

/// Looks up every activity's image concurrently. Results keep input order and
/// a failed lookup only degrades its own entry.
pub async fn resolve_activity_images(
    image_resolver: &ImageResolver,
    activities: Vec<ItineraryActivity>,
) -> Vec<ActivityImage> {
    let total = activities.len();
    let lookups = activities.into_iter().map(|activity| async move {
        let image = image_resolver.resolve(&activity.search_term()).await;
        ActivityImage {
            id: activity.id,
            name: activity.name,
            image,
        }
    });

    let images = join_all(lookups).await;
    let provider_hits = images
        .iter()
        .filter(|entry| entry.image.source == ImageSource::Provider)
        .count();
    info!("Resolved images for {} activities, {} from provider", total, provider_hits);
    images
}
