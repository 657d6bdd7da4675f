//! Marquee Search - Movie database access

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Translates title searches and detail lookups into calls against the
//! external movie database and maps the JSON responses into typed results.

pub mod errors;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::MovieSearchError;
pub use providers::{DemoProvider, MovieDatabase, TmdbProvider};
pub use service::MovieSearchService;
pub use types::{Movie, MovieSearchPage, POSTER_BASE_URL};

/// Convenience type alias for Results with MovieSearchError.
pub type Result<T> = std::result::Result<T, MovieSearchError>;
