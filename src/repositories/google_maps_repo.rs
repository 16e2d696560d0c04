use anyhow::{anyhow, Context};
use reqwest::{Client, Url};
use tracing::debug;
use crate::models::google::{GeocodeResponse, PlaceDetailsResponse, TextSearchResponse};

pub const PHOTO_MAX_WIDTH: u32 = 800;

const DETAILS_FIELDS: &str =
    "place_id,name,formatted_address,rating,types,geometry,reviews,website,formatted_phone_number,photos";

pub struct GoogleMapsRepo {
    http_client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleMapsRepo {
    pub fn new(
        http_client: Client,
        api_key: Option<String>,
        base_url: String,
    ) -> Self {
        Self {
            http_client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("GOOGLE_MAPS_API_KEY is not configured"))
    }

    pub async fn geocode(
        &self,
        address: &str,
    ) -> anyhow::Result<GeocodeResponse> {
        let url = format!("{}/geocode/json", self.base_url);
        debug!("Calling geocode for address: {}", address);

        self.http_client
            .get(&url)
            .query(&[("address", address), ("key", self.api_key()?)])
            .send()
            .await
            .with_context(|| format!("Failed to send geocode request for {}", address))?
            .error_for_status()
            .context("Geocode provider returned an error status")?
            .json::<GeocodeResponse>()
            .await
            .with_context(|| format!("Failed to parse geocode response for {}", address))
    }

    pub async fn text_search(
        &self,
        query: &str,
    ) -> anyhow::Result<TextSearchResponse> {
        let url = format!("{}/place/textsearch/json", self.base_url);
        debug!("Calling place text search for query: {}", query);

        self.http_client
            .get(&url)
            .query(&[("query", query), ("key", self.api_key()?)])
            .send()
            .await
            .with_context(|| format!("Failed to send text search request for {}", query))?
            .error_for_status()
            .context("Text search provider returned an error status")?
            .json::<TextSearchResponse>()
            .await
            .with_context(|| format!("Failed to parse text search response for {}", query))
    }

    pub async fn place_details(
        &self,
        place_id: &str,
    ) -> anyhow::Result<PlaceDetailsResponse> {
        let url = format!("{}/place/details/json", self.base_url);
        debug!("Calling place details for place_id: {}", place_id);

        self.http_client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("fields", DETAILS_FIELDS),
                ("key", self.api_key()?),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send place details request for {}", place_id))?
            .error_for_status()
            .context("Place details provider returned an error status")?
            .json::<PlaceDetailsResponse>()
            .await
            .with_context(|| format!("Failed to parse place details response for {}", place_id))
    }

    /// The reference is opaque and only ever templated, never fetched.
    pub fn photo_url(
        &self,
        photo_reference: &str,
    ) -> anyhow::Result<String> {
        let max_width = PHOTO_MAX_WIDTH.to_string();
        let mut params = vec![
            ("maxwidth", max_width.as_str()),
            ("photo_reference", photo_reference),
        ];
        if let Some(key) = &self.api_key {
            params.push(("key", key.as_str()));
        }

        let url = Url::parse_with_params(&format!("{}/place/photo", self.base_url), &params)
            .with_context(|| format!("Invalid maps base URL {}", self.base_url))?;
        Ok(url.to_string())
    }
}
