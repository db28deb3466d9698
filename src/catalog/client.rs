use async_trait::async_trait;
use tracing::debug;

use super::error::SourceError;
use super::model::{self, CatalogPage, EntityDetail};

/// Everything the viewer needs from the network.
///
/// Implementations must be cheap to share; the view state holds one
/// behind an `Arc` and hands clones to every in-flight request.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// `GET {base}/pokemon?limit={limit}&offset={offset}`
    async fn fetch_page(&self, limit: u32, offset: u64) -> Result<CatalogPage, SourceError>;

    /// `GET {base}/pokemon/{name}`
    async fn fetch_entity(&self, name: &str) -> Result<EntityDetail, SourceError>;

    /// Raw bytes of a static resource (sprites, placeholder)
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError>;
}

/// `CatalogSource` backed by the public REST service
pub struct HttpCatalog {
    api_base: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Issue a GET and fail on any non-success status
    async fn get(&self, url: &str) -> Result<reqwest::Response, SourceError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        Ok(response)
    }

    /// `{base}/pokemon/{name}` with the name percent-encoded as one segment
    fn entity_url(&self, name: &str) -> Result<reqwest::Url, SourceError> {
        let mut url = reqwest::Url::parse(&self.api_base)
            .map_err(|e| SourceError::Transport(format!("invalid api base: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Transport(format!("invalid api base: {}", self.api_base)))?
            .pop_if_empty()
            .push("pokemon")
            .push(name.trim());
        Ok(url)
    }

    async fn get_text(&self, url: &str) -> Result<String, SourceError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, limit: u32, offset: u64) -> Result<CatalogPage, SourceError> {
        let url = format!("{}/pokemon?limit={}&offset={}", self.api_base, limit, offset);
        let body = self.get_text(&url).await?;
        model::parse_page(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn fetch_entity(&self, name: &str) -> Result<EntityDetail, SourceError> {
        let url = self.entity_url(name)?;
        let body = self.get_text(url.as_str()).await?;
        model::parse_detail(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl std::fmt::Debug for HttpCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalog")
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let catalog = HttpCatalog::new("https://pokeapi.co/api/v2/");
        assert_eq!(catalog.api_base, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn test_entity_name_is_one_encoded_segment() {
        let catalog = HttpCatalog::new("https://pokeapi.co/api/v2/");

        let url = catalog.entity_url("pikachu").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/pikachu");

        let url = catalog.entity_url(" a/b?c#d ").unwrap();
        assert_eq!(url.path(), "/api/v2/pokemon/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_unparseable_base_is_transport_error() {
        let catalog = HttpCatalog::new("not a url");
        assert!(matches!(
            catalog.entity_url("pikachu"),
            Err(SourceError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is closed in any sane test environment
        let catalog = HttpCatalog::new("http://127.0.0.1:9");
        let result = catalog.fetch_page(20, 0).await;
        assert!(matches!(result, Err(SourceError::Transport(_))));
    }
}
