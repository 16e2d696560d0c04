use clap::Parser;

/// Engine id shipped in the sample `.env`; treated the same as a missing one.
pub const PLACEHOLDER_SEARCH_ENGINE_ID: &str = "your_search_engine_id";

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = "127.0.0.1")]
    pub host: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of origins allowed by CORS
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    #[clap(env, long)]
    pub google_maps_api_key: Option<String>,

    #[clap(env, long)]
    pub google_search_api_key: Option<String>,

    #[clap(env, long)]
    pub google_search_engine_id: Option<String>,

    #[clap(env, long, default_value = "https://maps.googleapis.com/maps/api")]
    pub google_maps_base_url: String,

    #[clap(env, long, default_value = "https://www.googleapis.com/customsearch/v1")]
    pub custom_search_base_url: String,

    #[clap(env, long, default_value = "https://picsum.photos")]
    pub placeholder_image_base_url: String,
}

impl Config {
    /// An empty key fails every maps call just like a missing one.
    pub fn maps_configured(&self) -> bool {
        self.google_maps_api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Both the key and a real engine id are needed before the image provider is called.
    pub fn image_search_credentials(&self) -> Option<(&str, &str)> {
        let api_key = self.google_search_api_key.as_deref().filter(|k| !k.is_empty())?;
        let engine_id = self
            .google_search_engine_id
            .as_deref()
            .filter(|id| !id.is_empty() && *id != PLACEHOLDER_SEARCH_ENGINE_ID)?;
        Some((api_key, engine_id))
    }
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        origin_urls: "http://localhost:3000".to_string(),
        google_maps_api_key: Some("maps-key".to_string()),
        google_search_api_key: Some("search-key".to_string()),
        google_search_engine_id: Some("engine-id".to_string()),
        google_maps_base_url: "http://127.0.0.1:9/maps/api".to_string(),
        custom_search_base_url: "http://127.0.0.1:9/customsearch/v1".to_string(),
        placeholder_image_base_url: "https://picsum.photos".to_string(),
    }
}
