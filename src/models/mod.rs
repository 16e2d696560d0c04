pub mod coordinates;
pub mod google;
pub mod hotel;
pub mod image;
pub mod itinerary;
pub mod place;
