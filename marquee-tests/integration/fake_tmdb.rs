//! In-process fake of the TMDB v3 API
//!
//! Serves canned responses for `/3/search/movie` and `/3/movie/{id}` and
//! records every request it receives.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use marquee_core::TmdbConfig;
use marquee_search::TmdbProvider;
use serde_json::{Value, json};

pub const TEST_API_KEY: &str = "test-key";

/// Canned reply for one endpoint.
#[derive(Debug, Clone)]
pub struct FakeResponse {
    pub status: StatusCode,
    pub body: String,
}

impl FakeResponse {
    pub fn json(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: json!({ "status_message": "error", "success": false }).to_string(),
        }
    }

    pub fn raw(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }
}

/// One request as seen by the fake.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub raw_query: Option<String>,
    pub params: HashMap<String, String>,
}

#[derive(Debug)]
struct FakeState {
    search: FakeResponse,
    details: FakeResponse,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Running fake server. Lives until the test's runtime shuts down.
pub struct FakeTmdb {
    base_url: String,
    state: Arc<FakeState>,
}

impl FakeTmdb {
    pub async fn start(search: FakeResponse, details: FakeResponse) -> Self {
        let state = Arc::new(FakeState {
            search,
            details,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(respond).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{address}/3"),
            state,
        }
    }

    pub fn config(&self, api_key: Option<&str>) -> TmdbConfig {
        TmdbConfig {
            api_key: api_key.map(str::to_string),
            base_url: self.base_url.clone(),
            language: "ja-JP".to_string(),
        }
    }

    pub fn provider(&self) -> TmdbProvider {
        TmdbProvider::new(self.config(Some(TEST_API_KEY))).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<Arc<FakeState>>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        raw_query: uri.query().map(str::to_string),
        params,
    });

    let reply = if uri.path() == "/3/search/movie" {
        &state.search
    } else if uri.path().starts_with("/3/movie/") {
        &state.details
    } else {
        return StatusCode::NOT_FOUND.into_response();
    };

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
        .into_response()
}

pub fn inception_json() -> Value {
    json!({
        "id": 27205,
        "title": "インセプション",
        "release_date": "2010-07-16",
        "poster_path": "/x.jpg",
        "vote_average": 8.4,
        "overview": "..."
    })
}

pub fn movie_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "release_date": "",
        "poster_path": null,
        "vote_average": 5.0,
        "overview": ""
    })
}
