//! Routes for draw sessions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use lucky_draw::application::command_handlers;
use lucky_draw::application::query_handlers::{self, SessionView};
use lucky_draw::domain::commands;

use crate::error::ApiError;
use crate::routes::LanguageQuery;
use crate::state::AppState;

/// Request body for POST /{session_id}/draw.
#[derive(Debug, Deserialize)]
pub struct DrawRequest {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
}

/// Response body for a successful draw.
#[derive(Debug, Serialize)]
pub struct DrawResponse {
    /// The drawn value.
    pub value: i64,
    /// Whether the presenter should celebrate this value.
    pub notable: bool,
    /// Session history after the draw, newest first.
    pub history: Vec<i64>,
}

/// Response body returned when a session is started.
#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    /// The new session's identifier.
    pub session_id: Uuid,
    /// Snapshot version of the new session.
    pub version: i64,
}

/// POST /
#[instrument(skip(state, query))]
async fn start_session(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<(StatusCode, Json<StartSessionResponse>), ApiError> {
    let language = query.or(state.default_language);
    let command = commands::StartSession {
        correlation_id: Uuid::new_v4(),
        session_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling start_session command");

    let snapshot = command_handlers::handle_start_session(
        &command,
        state.clock.as_ref(),
        &*state.session_repository,
    )
    .await
    .map_err(ApiError::in_language(language))?;

    Ok((
        StatusCode::CREATED,
        Json(StartSessionResponse {
            session_id: snapshot.aggregate_id,
            version: snapshot.version,
        }),
    ))
}

/// GET /{session_id}
#[instrument(skip(state, query))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<SessionView>, ApiError> {
    let language = query.or(state.default_language);
    let view = query_handlers::get_session_by_id(session_id, &*state.session_repository)
        .await
        .map_err(ApiError::in_language(language))?;
    Ok(Json(view))
}

/// POST /{session_id}/draw
#[instrument(skip(state, query, request), fields(min = request.min, max = request.max))]
async fn draw(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<LanguageQuery>,
    Json(request): Json<DrawRequest>,
) -> Result<Json<DrawResponse>, ApiError> {
    let language = query.or(state.default_language);
    let command = commands::GenerateNumber {
        correlation_id: Uuid::new_v4(),
        session_id,
        min: request.min,
        max: request.max,
    };

    info!(correlation_id = %command.correlation_id, "handling generate_number command");

    let outcome = command_handlers::handle_generate_number(
        &command,
        state.clock.as_ref(),
        &state.rng,
        &*state.session_repository,
    )
    .await
    .map_err(ApiError::in_language(language))?;

    Ok(Json(DrawResponse {
        value: outcome.result.value,
        notable: outcome.result.notable,
        history: outcome.history,
    }))
}

/// DELETE /{session_id}
#[instrument(skip(state, query))]
async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<LanguageQuery>,
) -> Result<StatusCode, ApiError> {
    let language = query.or(state.default_language);
    let command = commands::EndSession {
        correlation_id: Uuid::new_v4(),
        session_id,
    };

    info!(correlation_id = %command.correlation_id, "handling end_session command");

    command_handlers::handle_end_session(&command, &*state.session_repository)
        .await
        .map_err(ApiError::in_language(language))?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /{session_id}/reset
#[instrument(skip(state, query))]
async fn reset(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<SessionView>, ApiError> {
    let language = query.or(state.default_language);
    let command = commands::ResetSession {
        correlation_id: Uuid::new_v4(),
        session_id,
    };

    info!(correlation_id = %command.correlation_id, "handling reset_session command");

    let snapshot = command_handlers::handle_reset_session(
        &command,
        state.clock.as_ref(),
        &*state.session_repository,
    )
    .await
    .map_err(ApiError::in_language(language))?;

    Ok(Json(SessionView::from(&snapshot)))
}

/// Returns the router for draw sessions.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(start_session))
        .route("/{session_id}", get(get_session).delete(end_session))
        .route("/{session_id}/draw", post(draw))
        .route("/{session_id}/reset", post(reset))
}
