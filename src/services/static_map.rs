use anyhow::Context;
use reqwest::Url;
use crate::models::coordinates::Coordinates;

pub const MAP_ZOOM: u8 = 15;
pub const MAP_SIZE: &str = "800x400";

pub struct StaticMapRenderer {
    base_url: String,
    api_key: Option<String>,
}

impl StaticMapRenderer {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Map image centred on `coordinates` with a single red marker.
    pub fn render(&self, coordinates: Coordinates) -> anyhow::Result<String> {
        let center = format!("{},{}", coordinates.lat, coordinates.lng);
        let zoom = MAP_ZOOM.to_string();
        let markers = format!("color:red|{}", center);
        let mut params = vec![
            ("center", center.as_str()),
            ("zoom", zoom.as_str()),
            ("size", MAP_SIZE),
            ("markers", markers.as_str()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("key", key.as_str()));
        }

        let url = Url::parse_with_params(&format!("{}/staticmap", self.base_url), &params)
            .with_context(|| format!("Invalid static map base URL {}", self.base_url))?;
        Ok(url.to_string())
    }
}
