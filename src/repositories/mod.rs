pub mod google_maps_repo;
pub mod hotel_repo;
pub mod image_search_repo;
