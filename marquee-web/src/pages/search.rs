//! Search results page

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::components::{layout, movie_grid, notice};
use crate::errors::WebError;
use crate::server::AppState;

/// Query string accepted by the search routes.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text title query; missing and blank are treated alike
    pub query: Option<String>,
}

impl SearchParams {
    /// The query exactly as entered, or `None` when it is missing or blank.
    pub fn entered_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .filter(|query| !query.trim().is_empty())
    }
}

/// Renders search results for `?query=`.
///
/// Without a query the page shows a notice and the movie database is not called.
///
/// # Errors
/// - `WebError::Search` - The movie database call failed
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, WebError> {
    let Some(query) = params.entered_query() else {
        return Ok(layout::render_page(
            "検索",
            "search",
            &notice("検索クエリがありません。"),
        ));
    };

    let movies = state.search_service.search_movies(query).await?;

    let results = if movies.is_empty() {
        notice("検索結果が見つかりませんでした。")
    } else {
        movie_grid(&movies)
    };

    let content = format!(
        "{}\n{}",
        layout::page_header(
            &format!("検索結果: {query}"),
            Some(&format!("{} 件", movies.len()))
        ),
        results
    );

    Ok(layout::render_page(
        &format!("検索結果: {query}"),
        "search",
        &content,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: Option<&str>) -> SearchParams {
        SearchParams {
            query: query.map(str::to_string),
        }
    }

    #[test]
    fn test_entered_query_keeps_surrounding_whitespace() {
        assert_eq!(params(Some(" Inception ")).entered_query(), Some(" Inception "));
        assert_eq!(params(Some("Inception")).entered_query(), Some("Inception"));
    }

    #[test]
    fn test_blank_query_counts_as_missing() {
        assert_eq!(params(None).entered_query(), None);
        assert_eq!(params(Some("")).entered_query(), None);
        assert_eq!(params(Some("  ")).entered_query(), None);
        assert_eq!(params(Some("\u{3000}")).entered_query(), None);
    }
}
