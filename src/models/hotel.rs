use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::coordinates::Coordinates;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub address: String,
    pub price_per_night: u32,
    pub currency: String,
    pub rating: f64,
    pub image_url: String,
    pub coordinates: Coordinates,
    pub amenities: Vec<String>,
}

impl HotelRecord {
    /// Case-sensitive substring match on the location or the hotel name.
    pub fn matches(&self, query: &str) -> bool {
        self.location.contains(query) || self.name.contains(query)
    }
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchRequest {
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub adults: Option<u32>,
    pub search_type: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub location: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchParams {
    pub checkin: String,
    pub checkout: String,
    pub adults: u32,
    pub nights: Option<i64>,
    pub search_type: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub location: Option<String>,
}
