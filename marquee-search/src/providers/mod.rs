//! Movie database implementations.

use async_trait::async_trait;

use crate::errors::MovieSearchError;
use crate::types::Movie;

pub mod demo;
pub mod mock;
pub mod tmdb;

pub use demo::DemoProvider;
#[cfg(test)]
pub use mock::MockProvider;
pub use tmdb::TmdbProvider;

/// The two read operations Marquee needs from a movie database.
///
/// Implementations provide the real TMDB client, offline demo data, and
/// stubs for tests. Each call is an independent, side-effect free read.
#[async_trait]
pub trait MovieDatabase: Send + Sync + std::fmt::Debug {
    /// Search movies by title. Result order is the order the backend returned.
    ///
    /// # Errors
    /// - `MovieSearchError::MissingApiKey` - Credential not configured
    /// - `MovieSearchError::EmptyQuery` - Query is the empty string
    /// - `MovieSearchError::RequestFailed` - Backend returned a non-success status
    /// - `MovieSearchError::Network` - Network connectivity issues
    /// - `MovieSearchError::Parse` - Response body has an unexpected shape
    async fn search_by_title(&self, query: &str) -> Result<Vec<Movie>, MovieSearchError>;

    /// Fetch a single movie by identifier.
    ///
    /// # Errors
    /// - `MovieSearchError::MissingApiKey` - Credential not configured
    /// - `MovieSearchError::RequestFailed` - Backend returned a non-success status
    /// - `MovieSearchError::Network` - Network connectivity issues
    /// - `MovieSearchError::Parse` - Response body has an unexpected shape
    async fn movie_details(&self, id: u64) -> Result<Movie, MovieSearchError>;
}
