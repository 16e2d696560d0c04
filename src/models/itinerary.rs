use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::image::ImageResult;

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ItineraryActivity {
    pub id: Option<String>,
    pub name: String,
    pub location: Option<String>,
}

impl ItineraryActivity {
    pub fn search_term(&self) -> String {
        let term = match &self.location {
            Some(location) => format!("{} {}", self.name.trim(), location.trim()),
            None => self.name.clone(),
        };
        term.trim().to_string()
    }
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ActivityImage {
    pub id: Option<String>,
    pub name: String,
    pub image: ImageResult,
}
