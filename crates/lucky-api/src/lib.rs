//! Lucky Number — HTTP API.
//!
//! Presents the draw context over JSON: session lifecycle, draws, resets and
//! the widget's display text.

pub mod config;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/sessions", routes::sessions::router())
        .nest("/api/v1/translations", routes::translations::router())
        .with_state(state)
}
