//! Movie detail page

use axum::extract::{Path, State};
use axum::response::Html;

use crate::components::{layout, movie_detail};
use crate::errors::WebError;
use crate::server::AppState;

/// Parses the `{id}` path segment into a movie identifier.
///
/// # Errors
/// - `WebError::InvalidMovieId` - The segment is not an unsigned integer
pub fn parse_movie_id(raw: &str) -> Result<u64, WebError> {
    raw.trim().parse().map_err(|_| WebError::InvalidMovieId {
        raw: raw.to_string(),
    })
}

/// Renders the detail page for `/movie/{id}`.
///
/// # Errors
/// - `WebError::InvalidMovieId` - Path segment is not numeric; no lookup is made
/// - `WebError::Search` - The movie database call failed
pub async fn movie_page(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, WebError> {
    let id = parse_movie_id(&raw_id)?;
    let movie = state.search_service.movie_details(id).await?;

    Ok(layout::render_page(
        &movie.title,
        "",
        &movie_detail(&movie),
    ))
}
