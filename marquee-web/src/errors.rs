//! Error pages for failed requests

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use marquee_search::MovieSearchError;
use serde_json::json;
use thiserror::Error;

use crate::components::{layout, notice};

/// Errors surfaced by page and API handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// The movie id path segment is not a number.
    #[error("Invalid movie id '{raw}'")]
    InvalidMovieId {
        /// The path segment as received
        raw: String,
    },

    /// The movie database call failed.
    #[error(transparent)]
    Search(#[from] MovieSearchError),
}

impl WebError {
    /// HTTP status reported to the browser.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::InvalidMovieId { .. } => StatusCode::BAD_REQUEST,
            WebError::Search(MovieSearchError::EmptyQuery) => StatusCode::BAD_REQUEST,
            WebError::Search(e) if e.is_configuration_error() => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Search(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the user. Configuration details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            WebError::InvalidMovieId { .. } => "映画IDが正しくありません。".to_string(),
            WebError::Search(MovieSearchError::EmptyQuery) => "検索クエリがありません。".to_string(),
            WebError::Search(e) if e.is_configuration_error() => {
                "サーバーの設定に問題があります。".to_string()
            }
            WebError::Search(e) => e.to_string(),
        }
    }

    fn log(&self) {
        let status = self.status_code();
        let operation = match self {
            WebError::Search(e) => e.operation(),
            WebError::InvalidMovieId { .. } => None,
        };
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), operation, error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), operation, error = %self, "Request rejected");
        }
    }

    /// Converts this error into a JSON response for the API routes.
    pub fn into_json_response(self) -> Response {
        self.log();
        (
            self.status_code(),
            Json(json!({ "error": self.user_message() })),
        )
            .into_response()
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        self.log();
        let content = format!(
            r#"{}
            {}
            <p class="mt-6"><a href="/" class="text-sky-600 hover:underline">ホームに戻る</a></p>"#,
            layout::page_header("エラー", None),
            notice(&self.user_message())
        );

        (self.status_code(), layout::render_page("エラー", "", &content)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            WebError::InvalidMovieId { raw: "abc".into() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebError::from(MovieSearchError::MissingApiKey).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebError::from(MovieSearchError::RequestFailed {
                operation: "search movies",
                status: 404
            })
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_request_failure_message_names_operation() {
        let error = WebError::from(MovieSearchError::RequestFailed {
            operation: "get movie details",
            status: 500,
        });
        assert_eq!(error.user_message(), "Failed to get movie details: HTTP 500");
    }

    #[test]
    fn test_configuration_error_is_not_leaked() {
        let error = WebError::from(MovieSearchError::MissingApiKey);
        assert!(!error.user_message().contains("TMDB_API_KEY"));
    }
}
