use anyhow::bail;
use reqwest::Url;
use tracing::{debug, warn};
use crate::models::image::{ImageResult, ImageSource};
use crate::repositories::image_search_repo::ImageSearchRepo;

pub const DEFAULT_FALLBACK_TERM: &str = "travel";

const PLACEHOLDER_WIDTH: &str = "800";
const PLACEHOLDER_HEIGHT: &str = "600";

enum ProviderOutcome {
    Unconfigured,
    Failed(anyhow::Error),
    Empty,
    Hit(String),
}

/// Image lookup that always yields a usable url: provider hit first, then a
/// placeholder keyed by the query.
pub struct ImageResolver {
    search_repo: ImageSearchRepo,
    credentials: Option<(String, String)>,
    placeholder_base: Url,
}

impl ImageResolver {
    pub fn new(
        search_repo: ImageSearchRepo,
        credentials: Option<(String, String)>,
        placeholder_base_url: &str,
    ) -> anyhow::Result<Self> {
        let placeholder_base = Url::parse(placeholder_base_url)?;
        if placeholder_base.cannot_be_a_base() {
            bail!("Placeholder image url {} cannot be used as a base", placeholder_base_url);
        }
        Ok(Self {
            search_repo,
            credentials,
            placeholder_base,
        })
    }

    pub async fn resolve(&self, query: &str) -> ImageResult {
        if query.trim().is_empty() {
            return self.fallback(None, ImageSource::FallbackEmpty);
        }

        match self.lookup_provider(query).await {
            ProviderOutcome::Hit(link) => ImageResult {
                image_url: link,
                source: ImageSource::Provider,
            },
            ProviderOutcome::Unconfigured => {
                debug!("Image search is not configured, using placeholder for {}", query);
                self.fallback(Some(query), ImageSource::FallbackUnconfigured)
            }
            ProviderOutcome::Failed(e) => {
                warn!("Image search for {} failed due to: {:#}", query, e);
                self.fallback(Some(query), ImageSource::FallbackError)
            }
            ProviderOutcome::Empty => {
                debug!("Image search for {} found nothing", query);
                self.fallback(Some(query), ImageSource::FallbackEmpty)
            }
        }
    }

    async fn lookup_provider(&self, query: &str) -> ProviderOutcome {
        let Some((api_key, engine_id)) = &self.credentials else {
            return ProviderOutcome::Unconfigured;
        };

        match self.search_repo.search(api_key, engine_id, query).await {
            Ok(response) => match response.items.into_iter().next() {
                Some(item) => ProviderOutcome::Hit(item.link),
                None => ProviderOutcome::Empty,
            },
            Err(e) => ProviderOutcome::Failed(e),
        }
    }

    pub fn fallback(
        &self,
        query: Option<&str>,
        source: ImageSource,
    ) -> ImageResult {
        ImageResult {
            image_url: self.fallback_url(query),
            source,
        }
    }

    /// Deterministic placeholder for `query`, percent-encoded as a path segment.
    pub fn fallback_url(&self, query: Option<&str>) -> String {
        let term = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_FALLBACK_TERM);

        let mut url = self.placeholder_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["seed", term, PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT]);
        }
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fake_image_provider, spawn_server, test_client};

    fn resolver(base_url: &str, credentials: Option<(String, String)>) -> ImageResolver {
        ImageResolver::new(
            ImageSearchRepo::new(test_client(), format!("{}/customsearch/v1", base_url)),
            credentials,
            "https://picsum.photos",
        )
        .unwrap()
    }

    fn credentials() -> Option<(String, String)> {
        Some(("search-key".to_string(), "engine-id".to_string()))
    }

    #[tokio::test]
    async fn unconfigured_provider_uses_placeholder() {
        let resolver = resolver("http://127.0.0.1:9", None);
        let result = resolver.resolve("Kyoto temple").await;

        assert_eq!(result.source, ImageSource::FallbackUnconfigured);
        assert_eq!(result.image_url, "https://picsum.photos/seed/Kyoto%20temple/800/600");
    }

    #[tokio::test]
    async fn provider_hit_returns_first_link() {
        let base = spawn_server(fake_image_provider()).await;
        let result = resolver(&base, credentials()).resolve("Fushimi Inari").await;

        assert_eq!(
            result,
            ImageResult {
                image_url: "https://images.example/Fushimi-Inari.jpg".to_string(),
                source: ImageSource::Provider,
            }
        );
    }

    #[tokio::test]
    async fn empty_results_use_placeholder() {
        let base = spawn_server(fake_image_provider()).await;
        let result = resolver(&base, credentials()).resolve("nothing here").await;

        assert_eq!(result.source, ImageSource::FallbackEmpty);
        assert!(result.image_url.contains("nothing%20here"));
    }

    #[tokio::test]
    async fn error_status_uses_placeholder() {
        let base = spawn_server(fake_image_provider()).await;
        let result = resolver(&base, credentials()).resolve("broken query").await;

        assert_eq!(result.source, ImageSource::FallbackError);
        assert!(result.image_url.contains("broken%20query"));
    }

    #[tokio::test]
    async fn unreachable_provider_uses_placeholder() {
        let result = resolver("http://127.0.0.1:9", credentials()).resolve("Osaka").await;
        assert_eq!(result.source, ImageSource::FallbackError);
        assert_eq!(result.image_url, "https://picsum.photos/seed/Osaka/800/600");
    }

    #[tokio::test]
    async fn blank_query_skips_provider() {
        // Port 9 is closed, so a provider call would report FallbackError.
        let result = resolver("http://127.0.0.1:9", credentials()).resolve("  ").await;
        assert_eq!(result.source, ImageSource::FallbackEmpty);
        assert_eq!(result.image_url, "https://picsum.photos/seed/travel/800/600");
    }

    #[test]
    fn missing_query_falls_back_to_default_term() {
        let resolver = resolver("http://127.0.0.1:9", None);
        assert_eq!(resolver.fallback_url(None), "https://picsum.photos/seed/travel/800/600");
        assert_eq!(resolver.fallback_url(Some("  ")), "https://picsum.photos/seed/travel/800/600");
    }

    #[test]
    fn fallback_encodes_non_ascii_and_slashes() {
        let resolver = resolver("http://127.0.0.1:9", None);
        assert_eq!(
            resolver.fallback_url(Some("東京/夜景")),
            "https://picsum.photos/seed/%E6%9D%B1%E4%BA%AC%2F%E5%A4%9C%E6%99%AF/800/600"
        );
    }

    #[test]
    fn rejects_unusable_placeholder_base() {
        let repo = ImageSearchRepo::new(test_client(), "http://127.0.0.1:9".to_string());
        assert!(ImageResolver::new(repo, None, "mailto:someone@example.com").is_err());
    }
}
