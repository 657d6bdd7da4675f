//! TMDB v3 client for production use.

use async_trait::async_trait;
use marquee_core::TmdbConfig;
use serde::de::DeserializeOwned;
use url::Url;

use super::MovieDatabase;
use crate::errors::{DETAILS_OPERATION, MovieSearchError, SEARCH_OPERATION};
use crate::types::{Movie, MovieSearchPage};

/// Client for the TMDB v3 HTTP API.
///
/// Configuration is injected at construction; the provider never reads the
/// environment. Each operation sends exactly one GET request with no retries
/// and no timeout beyond the HTTP client's defaults.
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    language: String,
}

impl TmdbProvider {
    /// Create TMDB provider from configuration.
    ///
    /// # Errors
    /// - `MovieSearchError::InvalidBaseUrl` - Base URL does not parse or cannot carry paths
    pub fn new(config: TmdbConfig) -> Result<Self, MovieSearchError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create TMDB provider sharing an existing HTTP client.
    ///
    /// # Errors
    /// - `MovieSearchError::InvalidBaseUrl` - Base URL does not parse or cannot carry paths
    pub fn with_client(client: reqwest::Client, config: TmdbConfig) -> Result<Self, MovieSearchError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| MovieSearchError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        if base_url.cannot_be_a_base() {
            return Err(MovieSearchError::InvalidBaseUrl {
                base_url: config.base_url,
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            language: config.language,
        })
    }

    /// The configured credential, or a configuration error when it is absent.
    fn api_key(&self) -> Result<&str, MovieSearchError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(MovieSearchError::MissingApiKey)
    }

    /// Build `{base}/search/movie?api_key=..&query=..&language=..`.
    ///
    /// # Errors
    /// - `MovieSearchError::InvalidBaseUrl` - Base URL cannot carry paths
    pub fn search_url(&self, api_key: &str, query: &str) -> Result<Url, MovieSearchError> {
        let mut url = self.endpoint(&["search", "movie"])?;
        url.query_pairs_mut()
            .append_pair("api_key", api_key)
            .append_pair("query", query)
            .append_pair("language", &self.language);
        Ok(url)
    }

    /// Build `{base}/movie/{id}?api_key=..&language=..`.
    ///
    /// # Errors
    /// - `MovieSearchError::InvalidBaseUrl` - Base URL cannot carry paths
    pub fn details_url(&self, api_key: &str, id: u64) -> Result<Url, MovieSearchError> {
        let mut url = self.endpoint(&["movie", &id.to_string()])?;
        url.query_pairs_mut()
            .append_pair("api_key", api_key)
            .append_pair("language", &self.language);
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, MovieSearchError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| MovieSearchError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one GET request and decode the JSON body.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: Url,
        operation: &'static str,
    ) -> Result<T, MovieSearchError> {
        // The query string carries the API key; only the path is logged.
        tracing::debug!(operation, path = url.path(), "Sending TMDB request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MovieSearchError::Network {
                operation,
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(operation, status = status.as_u16(), "TMDB request failed");
            return Err(MovieSearchError::RequestFailed {
                operation,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MovieSearchError::Network {
                operation,
                reason: e.without_url().to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| MovieSearchError::Parse {
            operation,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl MovieDatabase for TmdbProvider {
    async fn search_by_title(&self, query: &str) -> Result<Vec<Movie>, MovieSearchError> {
        let api_key = self.api_key()?;
        if query.is_empty() {
            return Err(MovieSearchError::EmptyQuery);
        }

        let url = self.search_url(api_key, query)?;
        let page: MovieSearchPage = self.fetch_json(url, SEARCH_OPERATION).await?;
        Ok(page.results)
    }

    async fn movie_details(&self, id: u64) -> Result<Movie, MovieSearchError> {
        let api_key = self.api_key()?;
        let url = self.details_url(api_key, id)?;
        self.fetch_json(url, DETAILS_OPERATION).await
    }
}
