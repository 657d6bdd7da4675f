//! API handlers for movie search and details

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Json, Response};
use marquee_search::{Movie, MovieSearchError};
use serde::Serialize;

use crate::errors::WebError;
use crate::pages::SearchParams;
use crate::pages::movie::parse_movie_id;
use crate::server::AppState;

/// Body of `GET /api/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The query that was searched, as received
    pub query: String,
    /// Matching movies in movie database order
    pub results: Vec<Movie>,
    /// Number of results
    pub total: usize,
}

/// Searches movies by title and returns JSON.
///
/// A blank query is rejected with 400 without calling the movie database.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(query) = params.entered_query() else {
        return WebError::from(MovieSearchError::EmptyQuery).into_json_response();
    };

    match state.search_service.search_movies(query).await {
        Ok(results) => Json(SearchResponse {
            query: query.to_string(),
            total: results.len(),
            results,
        })
        .into_response(),
        Err(e) => WebError::from(e).into_json_response(),
    }
}

/// Returns one movie as JSON.
pub async fn api_movie(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_movie_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return e.into_json_response(),
    };

    match state.search_service.movie_details(id).await {
        Ok(movie) => Json(movie).into_response(),
        Err(e) => WebError::from(e).into_json_response(),
    }
}
