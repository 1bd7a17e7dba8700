//! Routes for adventure runs.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use corridor_adventure::application::command_handlers::{self, AdventureCommandResult};
use corridor_adventure::application::query_handlers::{self, AdventureRunView};
use corridor_adventure::domain::assets::{self, SceneMedia};
use corridor_adventure::domain::commands;
use corridor_adventure::domain::scene::Action;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body returned after a command is successfully handled.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// The run the command applied to.
    pub run_id: Uuid,
    /// IDs of the domain events produced and persisted.
    pub event_ids: Vec<Uuid>,
}

impl From<AdventureCommandResult> for CommandResponse {
    fn from(result: AdventureCommandResult) -> Self {
        Self {
            run_id: result.run_id,
            event_ids: result.stored_events.iter().map(|e| e.event_id).collect(),
        }
    }
}

/// A run as the presentation layer draws it.
#[derive(Debug, Serialize)]
pub struct RunResponse {
    #[serde(flatten)]
    pub view: AdventureRunView,
    /// Background and track that exist for the current scene.
    pub media: SceneMedia,
}

/// POST /
#[instrument(skip(state))]
async fn open_run(State(state): State<AppState>) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::OpenRun {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling open_run command");

    let result = command_handlers::handle_open_run(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
    )
    .await?;

    Ok(Json(result.into()))
}

/// GET /{run_id}
#[instrument(skip(state))]
async fn get_run(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
) -> Result<Json<RunResponse>, ApiError> {
    let view = query_handlers::get_run_by_id(run_id, &*state.event_repository).await?;
    let media = assets::resolve_media(view.scene, state.assets.as_ref());
    Ok(Json(RunResponse { view, media }))
}

/// POST /{run_id}/actions
#[instrument(skip(state, action), fields(action = %action.kind()))]
async fn perform_action(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
    Json(action): Json<Action>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::PerformAction {
        correlation_id: Uuid::new_v4(),
        run_id,
        action,
    };

    info!(correlation_id = %command.correlation_id, "handling perform_action command");

    let result = command_handlers::handle_perform_action(
        &command,
        state.clock.as_ref(),
        &state.timings,
        &*state.event_repository,
    )
    .await?;

    Ok(Json(result.into()))
}

/// POST /{run_id}/advance-cues
#[instrument(skip(state))]
async fn advance_cues(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
) -> Result<Json<CommandResponse>, ApiError> {
    let command = commands::AdvanceCues {
        correlation_id: Uuid::new_v4(),
        run_id,
    };

    info!(correlation_id = %command.correlation_id, "handling advance_cues command");

    let result = command_handlers::handle_advance_cues(
        &command,
        state.clock.as_ref(),
        &state.timings,
        &*state.event_repository,
    )
    .await?;

    Ok(Json(result.into()))
}

/// Returns the router for adventure runs.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(open_run))
        .route("/{run_id}", get(get_run))
        .route("/{run_id}/actions", post(perform_action))
        .route("/{run_id}/advance-cues", post(advance_cues))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use corridor_adventure::domain::assets::{AssetCatalog, Track};
    use corridor_adventure::domain::cue::CueTimings;
    use corridor_core::clock::Clock;
    use corridor_core::repository::EventRepository;
    use corridor_event_store::memory_event_repository::InMemoryEventRepository;
    use corridor_test_support::{EmptyEventRepository, FailingEventRepository, FixedClock};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct TitleOnly;

    impl AssetCatalog for TitleOnly {
        fn has_image(&self, name: &str) -> bool {
            name == "title.jpg"
        }

        fn track_file(&self, track: Track) -> Option<String> {
            (track == Track::Area).then(|| "sound_1.mp3".to_owned())
        }
    }

    fn app_state_with(event_repository: Arc<dyn EventRepository>) -> AppState {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        ));
        AppState::new(
            clock,
            CueTimings::default(),
            event_repository,
            Arc::new(TitleOnly),
        )
    }

    fn post_request(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_open_run_returns_200_with_run_id_and_event_ids() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(EmptyEventRepository)));
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        Uuid::parse_str(json["run_id"].as_str().unwrap()).unwrap();
        let event_ids = json["event_ids"].as_array().unwrap();
        assert_eq!(event_ids.len(), 1);
        for id in event_ids {
            Uuid::parse_str(id.as_str().unwrap()).unwrap();
        }
    }

    #[tokio::test]
    async fn test_get_run_returns_view_with_media() {
        // Arrange
        let state = app_state_with(Arc::new(InMemoryEventRepository::new()));
        let opened = router()
            .with_state(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let run_id = json_body(opened).await["run_id"]
            .as_str()
            .unwrap()
            .to_owned();

        let request = Request::builder()
            .method("GET")
            .uri(format!("/{run_id}"))
            .body(Body::empty())
            .unwrap();

        // Act
        let response = router().with_state(state).oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["run_id"], run_id);
        assert_eq!(json["scene"], "title");
        assert_eq!(json["version"], 1);
        assert_eq!(
            json["available_actions"],
            serde_json::json!(["start_game", "show_credits", "show_walkthrough"])
        );
        assert_eq!(json["media"]["background"], "title.jpg");
        assert_eq!(json["media"]["track"], "area");
        assert_eq!(json["media"]["track_file"], "sound_1.mp3");
    }

    #[tokio::test]
    async fn test_get_run_returns_404_for_unknown_run() {
        let app = router().with_state(app_state_with(Arc::new(EmptyEventRepository)));
        let request = Request::builder()
            .method("GET")
            .uri(format!("/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "aggregate_not_found");
    }

    #[tokio::test]
    async fn test_perform_action_returns_400_for_unavailable_action() {
        // Arrange
        let state = app_state_with(Arc::new(InMemoryEventRepository::new()));
        let opened = router()
            .with_state(state.clone())
            .oneshot(post_request("/", &serde_json::json!({})))
            .await
            .unwrap();
        let run_id = json_body(opened).await["run_id"]
            .as_str()
            .unwrap()
            .to_owned();

        // Act
        let response = router()
            .with_state(state)
            .oneshot(post_request(
                &format!("/{run_id}/actions"),
                &serde_json::json!({ "action": "try_south_door" }),
            ))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_perform_action_returns_422_for_unknown_action() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(EmptyEventRepository)));
        let request = post_request(
            &format!("/{}/actions", Uuid::new_v4()),
            &serde_json::json!({ "action": "dance" }),
        );

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_advance_cues_returns_500_when_repository_fails() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(FailingEventRepository)));
        let request = post_request(
            &format!("/{}/advance-cues", Uuid::new_v4()),
            &serde_json::json!({}),
        );

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "infrastructure_error");
    }
}
