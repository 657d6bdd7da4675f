//! HTTP server for Marquee
//!
//! Routes for the server-rendered search pages and the JSON API, all backed
//! by one shared movie search service.

use axum::Router;
use axum::routing::get;
use marquee_core::{MarqueeError, ServerConfig};
use marquee_search::MovieSearchService;
use tower_http::trace::TraceLayer;

use crate::handlers::{api_movie, api_search};
use crate::pages::{home_page, movie_page, search_page};

/// Per-request application state. Holds no mutable data.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Movie database access shared by all handlers
    pub search_service: MovieSearchService,
}

impl AppState {
    /// Creates application state around a search service.
    pub fn new(search_service: MovieSearchService) -> Self {
        Self { search_service }
    }
}

/// Builds the router with all page and API routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(home_page))
        .route("/search", get(search_page))
        .route("/movie/{id}", get(movie_page))
        // JSON API endpoints
        .route("/api/search", get(api_search))
        .route("/api/movie/{id}", get(api_movie))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until the process stops.
///
/// # Errors
/// - `MarqueeError::Io` - The address cannot be bound or the server fails
pub async fn run_server(
    server: &ServerConfig,
    search_service: MovieSearchService,
) -> Result<(), MarqueeError> {
    let app = build_router(AppState::new(search_service));

    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Marquee running on http://{address}");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use marquee_search::{Movie, MovieDatabase, MovieSearchError};
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, Default)]
    struct CountingDatabase {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MovieDatabase for CountingDatabase {
        async fn search_by_title(&self, _query: &str) -> Result<Vec<Movie>, MovieSearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn movie_details(&self, _id: u64) -> Result<Movie, MovieSearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(MovieSearchError::MissingApiKey)
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn router_with(database: Arc<CountingDatabase>) -> Router {
        build_router(AppState::new(MovieSearchService::new(database)))
    }

    #[tokio::test]
    async fn test_home_page_has_search_form() {
        let (status, body) = get(router_with(Arc::default()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<form action="/search" method="GET""#));
        assert!(body.contains(r#"name="query""#));
        assert!(body.contains("映画検索"));
    }

    #[tokio::test]
    async fn test_blank_query_skips_database() {
        let database = Arc::new(CountingDatabase::default());

        let (status, body) = get(router_with(database.clone()), "/search?query=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("検索クエリがありません。"));

        let (status, _) = get(router_with(database.clone()), "/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(database.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_results_render_notice() {
        let database = Arc::new(CountingDatabase::default());

        let (status, body) = get(router_with(database.clone()), "/search?query=nothing").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("検索結果が見つかりませんでした。"));
        assert!(body.contains("0 件"));
        assert_eq!(database.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_numeric_movie_id_is_bad_request() {
        let database = Arc::new(CountingDatabase::default());

        let (status, _) = get(router_with(database.clone()), "/movie/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(database.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_configuration_error_renders_error_page() {
        let (status, body) = get(router_with(Arc::default()), "/movie/27205").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("サーバーの設定に問題があります。"));
    }

    #[tokio::test]
    async fn test_api_blank_query_is_bad_request() {
        let (status, body) = get(router_with(Arc::default()), "/api/search?query=%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "検索クエリがありません。");
    }

    #[tokio::test]
    async fn test_api_does_not_allow_cross_origin_use() {
        let response = router_with(Arc::default())
            .oneshot(
                Request::get("/api/search?query=Inception")
                    .header("origin", "https://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            !response
                .headers()
                .contains_key("access-control-allow-origin")
        );
    }
}
