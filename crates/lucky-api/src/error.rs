//! Lucky Number — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lucky_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

use crate::i18n::{Language, message_for, translate};

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message, localized where the widget has copy.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError {
    /// The underlying domain error.
    pub error: DomainError,
    /// Language for the response message.
    pub language: Language,
}

impl ApiError {
    /// Wraps `error`, to be rendered in `language`.
    #[must_use]
    pub fn new(error: DomainError, language: Language) -> Self {
        Self { error, language }
    }

    /// Returns a closure for `map_err` that wraps errors in `language`.
    pub fn in_language(language: Language) -> impl Fn(DomainError) -> Self {
        move |error| Self::new(error, language)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.error {
            DomainError::InvalidRange { .. } => (StatusCode::BAD_REQUEST, "range_error"),
            DomainError::NoUniqueValue { .. } => (StatusCode::CONFLICT, "uniqueness_error"),
            DomainError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "session_not_found"),
            DomainError::ConcurrencyConflict { .. } => {
                (StatusCode::CONFLICT, "concurrency_conflict")
            }
            DomainError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let message = match message_for(self.error.kind()) {
            Some(key) => translate(self.language, key).to_owned(),
            None => self.error.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.error, "request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use uuid::Uuid;

    fn status_of(err: DomainError) -> StatusCode {
        let response = ApiError::new(err, Language::En).into_response();
        response.status()
    }

    async fn body_of(err: DomainError, language: Language) -> serde_json::Value {
        let response = ApiError::new(err, language).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_invalid_range_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InvalidRange { min: 5, max: 5 }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_no_unique_value_maps_to_409() {
        assert_eq!(
            status_of(DomainError::NoUniqueValue { value: 5 }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_session_not_found_maps_to_404() {
        assert_eq!(
            status_of(DomainError::SessionNotFound(Uuid::new_v4())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_concurrency_conflict_maps_to_409() {
        assert_eq!(
            status_of(DomainError::ConcurrencyConflict {
                session_id: Uuid::new_v4(),
                expected: 1,
                actual: 2,
            }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Infrastructure("lock poisoned".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_range_error_message_is_localized() {
        let json = body_of(DomainError::InvalidRange { min: 9, max: 1 }, Language::Vi).await;

        assert_eq!(json["error"], "range_error");
        assert_eq!(json["message"], "Số \"Max\" phải lớn hơn số \"Min\".");
    }

    #[tokio::test]
    async fn test_uniqueness_error_message_is_localized() {
        let json = body_of(DomainError::NoUniqueValue { value: 3 }, Language::En).await;

        assert_eq!(json["error"], "uniqueness_error");
        assert_eq!(
            json["message"],
            "Cannot generate a new unique number. Please expand the range."
        );
    }

    #[tokio::test]
    async fn test_other_errors_use_their_display_text() {
        let id = Uuid::new_v4();
        let json = body_of(DomainError::SessionNotFound(id), Language::Vi).await;

        assert_eq!(json["error"], "session_not_found");
        assert_eq!(json["message"], format!("session not found: {id}"));
    }
}
