pub mod hotel_search;
pub mod image_resolver;
pub mod itinerary_images;
pub mod location_resolver;
pub mod place_enricher;
pub mod static_map;
