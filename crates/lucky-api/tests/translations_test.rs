//! Integration tests for the display text endpoint.

mod common;

use axum::http::StatusCode;
use lucky_api::i18n::Language;

#[tokio::test]
async fn test_translations_default_to_configured_language() {
    let app = common::TestApp::new(vec![], Language::Vi);

    let (status, json) = common::get_json(app.router(), "/api/v1/translations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["language"], "vi");
    assert_eq!(json["messages"]["title"], "Tạo Số May Mắn");
    assert_eq!(json["messages"].as_object().unwrap().len(), 14);
}

#[tokio::test]
async fn test_translations_honour_lang_query() {
    let app = common::TestApp::new(vec![], Language::Vi);

    let (status, json) = common::get_json(app.router(), "/api/v1/translations?lang=en").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["language"], "en");
    assert_eq!(json["messages"]["generateButton"], "Get my number");
    assert_eq!(json["messages"]["historyPlaceholder"], "No numbers generated yet.");
}

#[tokio::test]
async fn test_translations_accept_uppercase_lang_query() {
    let app = common::TestApp::new(vec![], Language::Vi);

    let (status, json) = common::get_json(app.router(), "/api/v1/translations?lang=EN").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["language"], "en");
    assert_eq!(json["messages"]["title"], "Lucky Number Generator");
}

#[tokio::test]
async fn test_translations_reject_unknown_language() {
    let app = common::TestApp::new(vec![], Language::Vi);

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/translations?lang=fr")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router(), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
