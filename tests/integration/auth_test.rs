//! Integration tests for the authentication flow.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, tokens_from};

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "email": "new@x.com", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.get("access_token").is_some());
    assert!(response.body.get("refresh_token").is_some());
}

#[tokio::test]
async fn test_signup_duplicate_email_forbidden() {
    let app = TestApp::new();
    app.signup("taken@x.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "email": "taken@x.com", "password": "other" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "CREDENTIALS_TAKEN"
    );
}

#[tokio::test]
async fn test_signup_duplicate_email_is_case_insensitive() {
    let app = TestApp::new();
    app.signup("taken@x.com", "password123").await;

    // A case variant of an existing address is the same account.
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "email": "Taken@X.com", "password": "other" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "CREDENTIALS_TAKEN"
    );
}

#[tokio::test]
async fn test_signup_rejects_malformed_input() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "email": "not-an-email", "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "email": "a@x.com", "password": "" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signin_success() {
    let app = TestApp::new();
    app.signup("user@x.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": "user@x.com", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
}

#[tokio::test]
async fn test_signin_bad_credentials_are_identical() {
    let app = TestApp::new();
    app.signup("user@x.com", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": "user@x.com", "password": "nope" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": "ghost@x.com", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::FORBIDDEN);
    assert_eq!(unknown_email.status, StatusCode::FORBIDDEN);
    // Same body either way, so accounts cannot be enumerated.
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_refresh_rotates_and_is_single_use() {
    let app = TestApp::new();
    let (_, refresh) = app.signup("user@x.com", "password123").await;

    let first = app
        .request("POST", "/api/auth/refresh", None, Some(&refresh))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let (_, new_refresh) = tokens_from(&first.body);
    assert_ne!(new_refresh, refresh);

    // The token that was just used is no longer accepted.
    let replay = app
        .request("POST", "/api/auth/refresh", None, Some(&refresh))
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);

    // The rotated token works.
    let second = app
        .request("POST", "/api/auth/refresh", None, Some(&new_refresh))
        .await;
    assert_eq!(second.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_revokes_refresh_but_access_survives() {
    let app = TestApp::new();
    let (access, refresh) = app.signup("user@x.com", "password123").await;

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&access))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let refresh_after = app
        .request("POST", "/api/auth/refresh", None, Some(&refresh))
        .await;
    assert_eq!(refresh_after.status, StatusCode::UNAUTHORIZED);

    // The access token still authenticates until its natural expiry.
    let me = app.request("GET", "/api/users/me", None, Some(&access)).await;
    assert_eq!(me.status, StatusCode::OK);

    // Logout is idempotent.
    let again = app
        .request("POST", "/api/auth/logout", None, Some(&access))
        .await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn test_cross_use_rejected_both_directions() {
    let app = TestApp::new();
    let (access, refresh) = app.signup("user@x.com", "password123").await;

    // Access token on the refresh-gated route.
    let response = app
        .request("POST", "/api/auth/refresh", None, Some(&access))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Refresh token on access-gated routes.
    let response = app
        .request("POST", "/api/auth/logout", None, Some(&refresh))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/api/users/me", None, Some(&refresh)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_or_garbage_bearer_rejected() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/auth/refresh", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("POST", "/api/auth/logout", None, Some("garbage.token.here"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signin_elsewhere_revokes_old_refresh_token() {
    let app = TestApp::new();
    let (_, old_refresh) = app.signup("user@x.com", "password123").await;

    // A second signin claims the single refresh slot.
    let signin = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(json!({ "email": "user@x.com", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(signin.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/auth/refresh", None, Some(&old_refresh))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").unwrap().as_str().unwrap(), "ok");
}
