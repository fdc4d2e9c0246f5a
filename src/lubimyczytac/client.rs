//! HTTP client for lubimyczytac.pl

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use super::error::ClientError;
use super::page::AuthorPage;
use super::types::Author;
use crate::config::SourceConfig;

pub const DEFAULT_BASE_URL: &str = "https://lubimyczytac.pl";

static DEFAULT_ORIGIN: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(DEFAULT_BASE_URL)
        .unwrap_or_else(|e| panic!("invalid default base url {DEFAULT_BASE_URL:?}: {e}"))
});

/// Parsed [`DEFAULT_BASE_URL`]
pub fn default_base_url() -> Url {
    DEFAULT_ORIGIN.clone()
}

/// Fetches author pages from lubimyczytac.pl or a compatible origin
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Origin author pages are requested from; also the fallback origin for
    /// pages without a `<base href>`
    base_url: Url,
}

impl Client {
    /// Create a client for the public site.
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, default_base_url())
    }

    /// Create a client for a custom origin.
    pub fn with_base_url(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Build the HTTP client from configuration.
    pub fn from_config(config: &SourceConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_base_url(http, config.base_url.clone()))
    }

    /// Profile page URL for an author. The id is used verbatim.
    pub fn author_url(&self, id: &str) -> String {
        format!(
            "{}/autor/{}/x",
            self.base_url.as_str().trim_end_matches('/'),
            id
        )
    }

    /// Fetch the raw profile page of an author.
    pub async fn fetch_author_page(&self, id: &str) -> Result<Vec<u8>, ClientError> {
        let url = self.author_url(id);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            // Drain so the connection goes back to the pool
            let _ = response.bytes().await;
            return Err(if status == StatusCode::NOT_FOUND {
                ClientError::AuthorNotFound
            } else {
                ClientError::UnexpectedStatus(status.as_u16())
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch and extract an author.
    pub async fn get_author(&self, id: &str) -> Result<Author, ClientError> {
        let body = self.fetch_author_page(id).await?;
        let page = AuthorPage::parse(&body, &self.base_url)?;

        Ok(page.into_author(id))
    }
}
