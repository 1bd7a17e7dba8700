//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use corridor_adventure::domain::cue::CueTimings;
use corridor_api::assets::FsAssetCatalog;
use corridor_api::state::AppState;
use corridor_event_store::memory_event_repository::InMemoryEventRepository;
use corridor_test_support::SteppingClock;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Start time shared across all integration tests.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// A full app over a fresh in-memory store. The returned clock drives cue
/// deadlines; the store outlives every `Router` clone.
pub struct TestApp {
    pub clock: Arc<SteppingClock>,
    state: AppState,
}

impl TestApp {
    /// Real cue timings, moved along by `clock`.
    pub fn new() -> Self {
        Self::with_timings(CueTimings::default())
    }

    /// Every cinematic is due the moment it starts.
    pub fn instant() -> Self {
        Self::with_timings(CueTimings::scaled(0.0))
    }

    fn with_timings(timings: CueTimings) -> Self {
        let clock = Arc::new(SteppingClock::new(start_time()));
        let state = AppState::new(
            clock.clone(),
            timings,
            Arc::new(InMemoryEventRepository::new()),
            Arc::new(FsAssetCatalog::new("/nonexistent/corridor-assets")),
        );
        Self { clock, state }
    }

    /// Uses the same route structure as `main.rs`.
    pub fn router(&self) -> Router {
        corridor_api::build_router(self.state.clone())
    }

    pub async fn open_run(&self) -> String {
        let (status, json) = post_json(self.router(), "/api/v1/runs", &serde_json::json!({})).await;
        assert_eq!(status, StatusCode::OK);
        json["run_id"].as_str().unwrap().to_owned()
    }

    pub async fn act(
        &self,
        run_id: &str,
        action: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        post_json(
            self.router(),
            &format!("/api/v1/runs/{run_id}/actions"),
            &action,
        )
        .await
    }

    pub async fn advance(&self, run_id: &str) -> (StatusCode, serde_json::Value) {
        post_json(
            self.router(),
            &format!("/api/v1/runs/{run_id}/advance-cues"),
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn view(&self, run_id: &str) -> serde_json::Value {
        let (status, json) = get_json(self.router(), &format!("/api/v1/runs/{run_id}")).await;
        assert_eq!(status, StatusCode::OK);
        json
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
