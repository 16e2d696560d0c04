use anyhow::Context;
use reqwest::Client;
use tracing::debug;
use crate::models::google::ImageSearchResponse;

pub struct ImageSearchRepo {
    http_client: Client,
    base_url: String,
}

impl ImageSearchRepo {
    pub fn new(
        http_client: Client,
        base_url: String,
    ) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Any transport failure, non-success status or unreadable body comes back as `Err`.
    pub async fn search(
        &self,
        api_key: &str,
        engine_id: &str,
        query: &str,
    ) -> anyhow::Result<ImageSearchResponse> {
        debug!("Calling image search for query: {}", query);

        self.http_client
            .get(&self.base_url)
            .query(&[
                ("key", api_key),
                ("cx", engine_id),
                ("q", query),
                ("searchType", "image"),
                ("num", "1"),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send image search request for {}", query))?
            .error_for_status()
            .context("Image search provider returned an error status")?
            .json::<ImageSearchResponse>()
            .await
            .with_context(|| format!("Failed to parse image search response for {}", query))
    }
}
