//! Movie search service used by the presentation layer.

use std::sync::Arc;

use marquee_core::{MarqueeConfig, RuntimeMode};

use crate::errors::MovieSearchError;
use crate::providers::{DemoProvider, MovieDatabase, TmdbProvider};
use crate::types::Movie;

/// Movie search service wrapping one movie database backend.
///
/// Cloning is cheap and shares the backend, so the service can live in
/// per-request web state.
#[derive(Debug, Clone)]
pub struct MovieSearchService {
    database: Arc<dyn MovieDatabase>,
}

impl MovieSearchService {
    /// Creates a service over an explicit backend.
    pub fn new(database: Arc<dyn MovieDatabase>) -> Self {
        Self { database }
    }

    /// Creates the backend matching the configured runtime mode.
    ///
    /// Production mode talks to TMDB. Development mode serves demo data.
    /// A missing API key is not an error here; each production call reports it.
    ///
    /// # Errors
    /// - `MovieSearchError::InvalidBaseUrl` - Configured TMDB base URL is unusable
    pub fn from_config(config: &MarqueeConfig) -> Result<Self, MovieSearchError> {
        let database: Arc<dyn MovieDatabase> = match config.mode {
            RuntimeMode::Production => Arc::new(TmdbProvider::new(config.tmdb.clone())?),
            RuntimeMode::Development => Arc::new(DemoProvider::new()),
        };

        tracing::info!(mode = %config.mode, "Movie search backend ready");
        Ok(Self::new(database))
    }

    /// Search movies by title.
    ///
    /// # Errors
    /// - `MovieSearchError` - Any failure reported by the backend, unchanged
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, MovieSearchError> {
        let movies = self.database.search_by_title(query).await?;
        tracing::debug!(query, results = movies.len(), "Movie search completed");
        Ok(movies)
    }

    /// Fetch details for one movie.
    ///
    /// # Errors
    /// - `MovieSearchError` - Any failure reported by the backend, unchanged
    pub async fn movie_details(&self, id: u64) -> Result<Movie, MovieSearchError> {
        let movie = self.database.movie_details(id).await?;
        tracing::debug!(id, title = %movie.title, "Movie details fetched");
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            release_date: "2010-07-16".to_string(),
            poster_path: None,
            overview: String::new(),
            vote_average: 8.4,
        }
    }

    #[tokio::test]
    async fn test_service_delegates_and_preserves_order() {
        let mock = Arc::new(MockProvider::new(vec![movie(2, "B"), movie(1, "A")]));
        let service = MovieSearchService::new(mock.clone());

        let movies = service.search_movies("anything").await.unwrap();
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(mock.search_calls(), 1);

        let details = service.movie_details(1).await.unwrap();
        assert_eq!(details.title, "A");
        assert_eq!(mock.detail_calls(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_backend() {
        let mock = Arc::new(MockProvider::new(vec![movie(1, "A")]));
        let service = MovieSearchService::new(mock.clone());
        let clone = service.clone();

        service.search_movies("a").await.unwrap();
        clone.search_movies("a").await.unwrap();
        assert_eq!(mock.search_calls(), 2);
    }

    #[tokio::test]
    async fn test_development_mode_uses_demo_data() {
        let service = MovieSearchService::from_config(&MarqueeConfig::for_development()).unwrap();

        let movies = service.search_movies("Inception").await.unwrap();
        assert_eq!(movies[0].id, 27205);
    }

    #[tokio::test]
    async fn test_production_mode_without_key_reports_missing_key() {
        let service = MovieSearchService::from_config(&MarqueeConfig::default()).unwrap();

        let result = service.search_movies("Inception").await;
        assert!(matches!(result, Err(MovieSearchError::MissingApiKey)));
    }
}
