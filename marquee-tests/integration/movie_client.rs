//! TMDB client behavior over real HTTP
//!
//! Checks request shape, result mapping and failure reporting of the
//! production movie database client.

use axum::http::StatusCode;
use marquee_search::{MovieDatabase, MovieSearchError, TmdbProvider};
use serde_json::json;

use crate::fake_tmdb::{FakeResponse, FakeTmdb, TEST_API_KEY, inception_json, movie_json};

async fn fake_with_search(search: FakeResponse) -> FakeTmdb {
    FakeTmdb::start(search, FakeResponse::json(inception_json())).await
}

#[tokio::test]
async fn test_search_returns_inception_from_one_request() {
    let fake = fake_with_search(FakeResponse::json(json!({
        "page": 1,
        "results": [inception_json()],
        "total_results": 1
    })))
    .await;

    let movies = fake.provider().search_by_title("Inception").await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, 27205);
    assert_eq!(movies[0].title, "インセプション");

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/3/search/movie");
    assert_eq!(requests[0].params["query"], "Inception");
    assert_eq!(requests[0].params["language"], "ja-JP");
    assert_eq!(requests[0].params["api_key"], TEST_API_KEY);
}

#[tokio::test]
async fn test_search_preserves_length_and_order() {
    let fake = fake_with_search(FakeResponse::json(json!({
        "results": [movie_json(30, "C"), movie_json(10, "A"), movie_json(20, "B")]
    })))
    .await;

    let movies = fake.provider().search_by_title("any").await.unwrap();

    let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[tokio::test]
async fn test_search_with_zero_results_is_empty() {
    let fake = fake_with_search(FakeResponse::json(json!({ "results": [] }))).await;

    let movies = fake.provider().search_by_title("nothing").await.unwrap();

    assert!(movies.is_empty());
    assert_eq!(fake.requests().len(), 1);
}

#[tokio::test]
async fn test_search_query_is_url_escaped() {
    let fake = fake_with_search(FakeResponse::json(json!({ "results": [] }))).await;

    fake.provider()
        .search_by_title("Tom & Jerry #2")
        .await
        .unwrap();

    let requests = fake.requests();
    let raw_query = requests[0].raw_query.as_deref().unwrap();
    assert!(!raw_query.contains("Tom & Jerry"));
    assert!(!raw_query.contains('#'));
    assert_eq!(requests[0].params["query"], "Tom & Jerry #2");
}

#[tokio::test]
async fn test_details_hits_movie_path() {
    let fake = fake_with_search(FakeResponse::json(json!({ "results": [] }))).await;

    let movie = fake.provider().movie_details(27205).await.unwrap();

    assert_eq!(movie.vote_average, 8.4);
    assert_eq!(movie.formatted_rating(), "8.4");

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/3/movie/27205");
    assert_eq!(requests[0].params["language"], "ja-JP");
    assert!(!requests[0].params.contains_key("query"));
}

#[tokio::test]
async fn test_missing_api_key_fails_without_requests() {
    let fake = fake_with_search(FakeResponse::json(json!({ "results": [] }))).await;
    let provider = TmdbProvider::new(fake.config(None)).unwrap();

    let search = provider.search_by_title("Inception").await;
    let details = provider.movie_details(27205).await;

    assert!(matches!(search, Err(MovieSearchError::MissingApiKey)));
    assert!(matches!(details, Err(MovieSearchError::MissingApiKey)));
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_non_success_status_names_the_operation() {
    let fake = FakeTmdb::start(
        FakeResponse::status(StatusCode::UNAUTHORIZED),
        FakeResponse::status(StatusCode::NOT_FOUND),
    )
    .await;
    let provider = fake.provider();

    let search = provider.search_by_title("Inception").await.unwrap_err();
    assert!(matches!(
        search,
        MovieSearchError::RequestFailed {
            operation: "search movies",
            status: 401
        }
    ));

    let details = provider.movie_details(1).await.unwrap_err();
    assert!(matches!(
        details,
        MovieSearchError::RequestFailed {
            operation: "get movie details",
            status: 404
        }
    ));

    assert_eq!(fake.requests().len(), 2);
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let fake = FakeTmdb::start(
        FakeResponse::raw("{\"results\": \"not a list\"}"),
        FakeResponse::json(json!({ "id": 27205 })),
    )
    .await;
    let provider = fake.provider();

    let search = provider.search_by_title("Inception").await;
    assert!(matches!(
        search,
        Err(MovieSearchError::Parse {
            operation: "search movies",
            ..
        })
    ));

    let details = provider.movie_details(27205).await;
    assert!(matches!(
        details,
        Err(MovieSearchError::Parse {
            operation: "get movie details",
            ..
        })
    ));
}

#[tokio::test]
async fn test_whitespace_query_issues_one_request_each() {
    let fake = fake_with_search(FakeResponse::json(json!({ "results": [] }))).await;
    let provider = fake.provider();

    for query in [" ", "\u{3000}"] {
        let movies = provider.search_by_title(query).await.unwrap();
        assert!(movies.is_empty());
    }

    let requests = fake.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].params["query"], " ");
    assert_eq!(requests[1].params["query"], "\u{3000}");
}
