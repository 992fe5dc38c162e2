//! Display text for the widget.

use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::i18n::{Language, MessageKey, translate};
use crate::routes::LanguageQuery;
use crate::state::AppState;

/// Every UI string for one language.
#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    /// The language of `messages`.
    pub language: Language,
    /// Text keyed by camelCase message key.
    pub messages: BTreeMap<MessageKey, &'static str>,
}

/// GET /?lang=
async fn get_translations(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Json<TranslationsResponse> {
    let language = query.or(state.default_language);
    let messages = MessageKey::ALL
        .into_iter()
        .map(|key| (key, translate(language, key)))
        .collect();

    Json(TranslationsResponse { language, messages })
}

/// Returns the router for display text.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_translations))
}
