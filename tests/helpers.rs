use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use url::Url;

use passage::{
    api::router,
    app_state::AppState,
    extractor::{ExtractOptions, VerseOffset},
    fetcher::Fetcher,
};

/// The full router, fetching from `upstream` (a wiremock server URI).
pub fn test_app(upstream: &str, verse_offset: VerseOffset) -> Router {
    let base = Url::parse(&format!("{upstream}/passage/")).unwrap();
    let fetcher = Fetcher::new(base, Some(std::time::Duration::from_secs(5))).unwrap();
    let options = ExtractOptions {
        verse_offset,
        ..ExtractOptions::default()
    };
    router(AppState::new(Arc::new(fetcher), options, "NKJV"))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
