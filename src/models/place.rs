use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::coordinates::Coordinates;

pub const MAX_REVIEWS: usize = 3;

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub rating: Option<f64>,
    pub types: Option<Vec<String>>,
    pub geometry: Option<Coordinates>,
    pub reviews: Option<Vec<Review>>,
    pub website: Option<String>,
    pub phone: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Review {
    pub author_name: String,
    pub rating: Option<f64>,
    pub text: String,
    pub relative_time_description: Option<String>,
}
