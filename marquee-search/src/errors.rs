//! Error types for movie database access.

use thiserror::Error;

/// Operation name reported when a title search fails.
pub const SEARCH_OPERATION: &str = "search movies";

/// Operation name reported when a detail lookup fails.
pub const DETAILS_OPERATION: &str = "get movie details";

/// Errors that can occur while talking to the movie database.
#[derive(Debug, Error)]
pub enum MovieSearchError {
    /// The access credential is not configured. Raised before any network I/O.
    #[error("TMDB_API_KEY is not defined")]
    MissingApiKey,

    /// The configured base URL cannot carry request paths.
    #[error("Invalid movie database base URL '{base_url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected base URL
        base_url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A title search was requested with an empty query.
    #[error("Search query must not be empty")]
    EmptyQuery,

    /// The movie database answered with a non-success status.
    #[error("Failed to {operation}: HTTP {status}")]
    RequestFailed {
        /// The operation that failed
        operation: &'static str,
        /// HTTP status code returned by the movie database
        status: u16,
    },

    /// The request could not be sent or the response could not be read.
    #[error("Failed to {operation}: network error: {reason}")]
    Network {
        /// The operation that failed
        operation: &'static str,
        /// The reason for the network error
        reason: String,
    },

    /// The response body does not have the expected shape.
    #[error("Failed to {operation}: unexpected response body: {reason}")]
    Parse {
        /// The operation that failed
        operation: &'static str,
        /// The reason for the parse error
        reason: String,
    },
}

impl MovieSearchError {
    /// Name of the operation that failed, when the error came from a request.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::RequestFailed { operation, .. }
            | Self::Network { operation, .. }
            | Self::Parse { operation, .. } => Some(*operation),
            Self::MissingApiKey | Self::InvalidBaseUrl { .. } | Self::EmptyQuery => None,
        }
    }

    /// Checks if this error stems from local configuration rather than the remote service.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::InvalidBaseUrl { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_names_operation() {
        let error = MovieSearchError::RequestFailed {
            operation: SEARCH_OPERATION,
            status: 401,
        };

        assert_eq!(error.to_string(), "Failed to search movies: HTTP 401");
        assert_eq!(error.operation(), Some("search movies"));
        assert!(!error.is_configuration_error());
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let error = MovieSearchError::MissingApiKey;

        assert!(error.is_configuration_error());
        assert_eq!(error.operation(), None);
    }
}
