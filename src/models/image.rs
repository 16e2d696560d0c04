use serde::{Deserialize, Serialize};

/// Tells a genuine provider hit apart from a substituted placeholder.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Provider,
    FallbackUnconfigured,
    FallbackError,
    FallbackEmpty,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub image_url: String,
    pub source: ImageSource,
}
