//! Full-stack page rendering
//!
//! Router -> search service -> TMDB client -> fake movie database.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use marquee_search::MovieSearchService;
use marquee_web::{AppState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::fake_tmdb::{FakeResponse, FakeTmdb, inception_json, movie_json};

fn router_for(fake: &FakeTmdb) -> Router {
    let service = MovieSearchService::new(Arc::new(fake.provider()));
    build_router(AppState::new(service))
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

async fn inception_fake() -> FakeTmdb {
    FakeTmdb::start(
        FakeResponse::json(json!({
            "results": [inception_json(), movie_json(155, "ダークナイト")]
        })),
        FakeResponse::json(inception_json()),
    )
    .await
}

#[tokio::test]
async fn test_search_page_renders_result_grid() {
    let fake = inception_fake().await;

    let (status, body) = get(router_for(&fake), "/search?query=Inception").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("検索結果: Inception"));
    assert!(body.contains("2 件"));
    assert!(body.contains(r#"href="/movie/27205""#));
    assert!(body.contains("https://image.tmdb.org/t/p/w500/x.jpg"));
    assert!(body.find("/movie/27205").unwrap() < body.find("/movie/155").unwrap());
    assert_eq!(fake.requests().len(), 1);
}

#[tokio::test]
async fn test_search_page_without_query_makes_no_request() {
    let fake = inception_fake().await;

    let (status, body) = get(router_for(&fake), "/search?query=").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("検索クエリがありません。"));
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_search_query_is_escaped_in_page() {
    let fake = inception_fake().await;

    let (_, body) = get(router_for(&fake), "/search?query=%3Cscript%3E").await;

    assert!(!body.contains("<script>"));
    assert!(body.contains("検索結果: &lt;script&gt;"));
}

#[tokio::test]
async fn test_movie_page_renders_details() {
    let fake = inception_fake().await;

    let (status, body) = get(router_for(&fake), "/movie/27205").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("インセプション"));
    assert!(body.contains("公開日：2010-07-16"));
    assert!(body.contains("評価： 8.4/ 10"));

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/3/movie/27205");
}

#[tokio::test]
async fn test_upstream_failure_renders_bad_gateway() {
    let fake = FakeTmdb::start(
        FakeResponse::status(StatusCode::INTERNAL_SERVER_ERROR),
        FakeResponse::status(StatusCode::NOT_FOUND),
    )
    .await;

    let (status, body) = get(router_for(&fake), "/search?query=Inception").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Failed to search movies: HTTP 500"));

    let (status, body) = get(router_for(&fake), "/movie/1").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Failed to get movie details: HTTP 404"));
}

#[tokio::test]
async fn test_api_search_returns_json() {
    let fake = inception_fake().await;

    let (status, body) = get(router_for(&fake), "/api/search?query=Inception").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["query"], "Inception");
    assert_eq!(json["total"], 2);
    assert_eq!(json["results"][0]["id"], 27205);
    assert_eq!(json["results"][1]["title"], "ダークナイト");
}

#[tokio::test]
async fn test_api_movie_returns_json() {
    let fake = inception_fake().await;

    let (status, body) = get(router_for(&fake), "/api/movie/27205").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["title"], "インセプション");
    assert_eq!(json["vote_average"], 8.4);
}

#[tokio::test]
async fn test_search_query_reaches_movie_database_unchanged() {
    let fake = inception_fake().await;

    let (status, body) = get(router_for(&fake), "/search?query=%20Inception%20").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("検索結果:  Inception "));

    let (status, body) = get(router_for(&fake), "/api/search?query=%20Inception%20").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["query"], " Inception ");

    let requests = fake.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.params["query"], " Inception ");
    }
}
