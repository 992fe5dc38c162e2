//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use lucky_api::i18n::Language;
use lucky_api::state::AppState;
use lucky_core::clock::Clock;
use lucky_core::rng::DeterministicRng;
use lucky_draw::application::command_handlers::SessionRepository;
use lucky_draw::domain::aggregates::DrawSession;
use lucky_session_store::memory_repository::InMemorySnapshotRepository;
use lucky_test_support::{FixedClock, SequenceRng};
use tower::ServiceExt;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// A running app plus the store behind it, so several requests can share
/// sessions.
pub struct TestApp {
    state: AppState,
}

impl TestApp {
    /// Build an app whose draws replay `values`, defaulting to `language`.
    pub fn new(values: Vec<i64>, language: Language) -> Self {
        let rng: Arc<Mutex<dyn DeterministicRng + Send>> =
            Arc::new(Mutex::new(SequenceRng::new(values)));
        let session_repository: Arc<SessionRepository> =
            Arc::new(InMemorySnapshotRepository::<DrawSession>::new());
        let state = AppState::new(fixed_clock(), rng, session_repository, language);
        Self { state }
    }

    /// The full router, with the same route structure as `main.rs`.
    pub fn router(&self) -> Router {
        lucky_api::app(self.state.clone())
    }

    /// Start a session and return its ID.
    pub async fn start_session(&self) -> String {
        let (status, json) =
            post_json(self.router(), "/api/v1/sessions", &serde_json::json!({})).await;
        assert_eq!(status, StatusCode::CREATED);
        json["session_id"].as_str().unwrap().to_owned()
    }

    /// POST a draw for `session_id`.
    pub async fn draw(
        &self,
        session_id: &str,
        min: i64,
        max: i64,
    ) -> (StatusCode, serde_json::Value) {
        post_json(
            self.router(),
            &format!("/api/v1/sessions/{session_id}/draw"),
            &serde_json::json!({ "min": min, "max": max }),
        )
        .await
    }
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a DELETE request and return the status.
pub async fn delete(app: Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap().status()
}
