//! Integration tests for bookmark CRUD and ownership.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_bookmark_crud_round_trip() {
    let app = TestApp::new();
    let (access, _) = app.signup("owner@x.com", "password123").await;

    // Starts empty.
    let list = app.request("GET", "/api/bookmarks", None, Some(&access)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap().len(), 0);

    // Create.
    let created = app
        .request(
            "POST",
            "/api/bookmarks",
            Some(json!({
                "title": "Rust book",
                "link": "https://doc.rust-lang.org/book/",
            })),
            Some(&access),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    // Read back.
    let fetched = app
        .request("GET", &format!("/api/bookmarks/{id}"), None, Some(&access))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.body.get("title").unwrap().as_str().unwrap(),
        "Rust book"
    );

    // Update.
    let updated = app
        .request(
            "PATCH",
            &format!("/api/bookmarks/{id}"),
            Some(json!({ "description": "The official book" })),
            Some(&access),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.body.get("description").unwrap().as_str().unwrap(),
        "The official book"
    );

    // Delete.
    let deleted = app
        .request("DELETE", &format!("/api/bookmarks/{id}"), None, Some(&access))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("GET", &format!("/api/bookmarks/{id}"), None, Some(&access))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bookmarks_require_authentication() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/bookmarks", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_bookmark_validates_link() {
    let app = TestApp::new();
    let (access, _) = app.signup("owner@x.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/bookmarks",
            Some(json!({ "title": "Bad", "link": "not a url" })),
            Some(&access),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_foreign_bookmarks_are_invisible_and_immutable() {
    let app = TestApp::new();
    let (owner, _) = app.signup("owner@x.com", "password123").await;
    let (intruder, _) = app.signup("intruder@x.com", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/bookmarks",
            Some(json!({ "title": "Private", "link": "https://example.com/" })),
            Some(&owner),
        )
        .await;
    let id = created.body.get("id").unwrap().as_str().unwrap().to_string();

    // Foreign reads look like a missing bookmark.
    let read = app
        .request("GET", &format!("/api/bookmarks/{id}"), None, Some(&intruder))
        .await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);

    // Foreign list does not include it.
    let list = app
        .request("GET", "/api/bookmarks", None, Some(&intruder))
        .await;
    assert_eq!(list.body.as_array().unwrap().len(), 0);

    // Foreign mutations are denied.
    let update = app
        .request(
            "PATCH",
            &format!("/api/bookmarks/{id}"),
            Some(json!({ "title": "Stolen" })),
            Some(&intruder),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request("DELETE", &format!("/api/bookmarks/{id}"), None, Some(&intruder))
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    // Owner still sees the original.
    let fetched = app
        .request("GET", &format!("/api/bookmarks/{id}"), None, Some(&owner))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body.get("title").unwrap().as_str().unwrap(), "Private");
}
