//! Mock provider implementation for testing.

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::MovieDatabase;
#[cfg(test)]
use crate::errors::MovieSearchError;
#[cfg(test)]
use crate::types::Movie;

/// Mock provider for testing. Serves canned movies and counts calls.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider {
    movies: Vec<Movie>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a mock provider returning the given movies for every search.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies,
            ..Default::default()
        }
    }

    /// Number of `search_by_title` calls seen so far.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of `movie_details` calls seen so far.
    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl MovieDatabase for MockProvider {
    async fn search_by_title(&self, _query: &str) -> Result<Vec<Movie>, MovieSearchError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.movies.clone())
    }

    async fn movie_details(&self, id: u64) -> Result<Movie, MovieSearchError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(MovieSearchError::RequestFailed {
                operation: crate::errors::DETAILS_OPERATION,
                status: 404,
            })
    }
}
