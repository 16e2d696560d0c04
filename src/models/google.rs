//! Wire formats of the Google Maps Platform and Custom Search responses.
//! Only the fields this service reads are modelled.

use serde::{Deserialize, Serialize};
use crate::models::coordinates::Coordinates;

pub const STATUS_OK: &str = "OK";

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Photo {
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub html_attributions: Vec<String>,
    pub photo_reference: String,
    #[serde(default)]
    pub width: i64,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GeocodeResult {
    #[serde(default)]
    pub place_id: String,
    pub formatted_address: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceSearchResult>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceSearchResult {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    pub rating: Option<f64>,
    pub types: Option<Vec<String>>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceDetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetailsResult>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct PlaceDetailsResult {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub types: Option<Vec<String>>,
    pub geometry: Option<Geometry>,
    pub reviews: Option<Vec<DetailsReview>>,
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct DetailsReview {
    #[serde(default)]
    pub author_name: String,
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: String,
    pub relative_time_description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ImageSearchResponse {
    #[serde(default)]
    pub items: Vec<ImageSearchItem>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ImageSearchItem {
    pub link: String,
    pub title: Option<String>,
}
