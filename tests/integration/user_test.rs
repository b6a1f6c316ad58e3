//! Integration tests for the user profile surface.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_me_returns_profile_without_hashes() {
    let app = TestApp::new();
    let (access, _) = app.signup("me@x.com", "password123").await;

    let response = app.request("GET", "/api/users/me", None, Some(&access)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("email").unwrap().as_str().unwrap(), "me@x.com");
    assert!(response.body.get("password_hash").is_none());
    assert!(response.body.get("refresh_hash").is_none());
}

#[tokio::test]
async fn test_me_requires_authentication() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/users/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    let (access, _) = app.signup("me@x.com", "password123").await;

    let response = app
        .request(
            "PATCH",
            "/api/users/me",
            Some(json!({ "first_name": "Ada", "last_name": "Lovelace" })),
            Some(&access),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("first_name").unwrap().as_str().unwrap(), "Ada");

    // Unchanged fields survive a partial update.
    assert_eq!(response.body.get("email").unwrap().as_str().unwrap(), "me@x.com");
}

#[tokio::test]
async fn test_update_profile_rejects_bad_email() {
    let app = TestApp::new();
    let (access, _) = app.signup("me@x.com", "password123").await;

    let response = app
        .request(
            "PATCH",
            "/api/users/me",
            Some(json!({ "email": "not-an-email" })),
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_profile_email_conflict() {
    let app = TestApp::new();
    app.signup("taken@x.com", "password123").await;
    let (access, _) = app.signup("me@x.com", "password123").await;

    let response = app
        .request(
            "PATCH",
            "/api/users/me",
            Some(json!({ "email": "taken@x.com" })),
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
