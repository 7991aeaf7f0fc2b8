// ABOUTME: Router tests for the user endpoints
// ABOUTME: Creation rules, duplicate emails, updates and deletion

mod common;

use axum::http::{Method, StatusCode};
use common::{send, test_app};
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_users() {
    let app = test_app().await;

    let (status, user) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "ada", "email": "ada@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(user["id"].is_string());

    let (status, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users, json!([user]));
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "ada", "email": "not-an-email"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Validation failed: email: Invalid email address"
    );
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = test_app().await;
    let payload = json!({"username": "ada", "email": "ada@example.com"});

    send(&app, Method::POST, "/users", Some(payload.clone())).await;
    let (status, body) = send(&app, Method::POST, "/users", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "EMAIL_EXISTS");
    assert_eq!(body["error"]["message"], "Email already exists");
}

#[tokio::test]
async fn test_update_and_delete_user() {
    let app = test_app().await;
    let (_, user) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"username": "ada", "email": "ada@example.com"})),
    )
    .await;
    let uri = format!("/users/{}", user["id"].as_str().unwrap());

    let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"username": "countess"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["username"], "countess");
    assert_eq!(updated["email"], "ada@example.com");

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"email": "nope"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
