use crate::{build_app, Config};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use std::path::PathBuf;
use taskdeck_storage::Database;
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        port: 3000,
        host: "127.0.0.1".to_string(),
        cors_origin: "http://localhost:3000".to_string(),
        backend_url: "http://localhost:5000".to_string(),
        database_path: PathBuf::from(":memory:"),
        api_url: "http://localhost:3000".to_string(),
    }
}

#[tokio::test]
async fn test_app_serves_health() {
    let db = Database::in_memory().await.unwrap();
    let app = build_app(&test_config(), &db).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let db = Database::in_memory().await.unwrap();
    let app = build_app(&test_config(), &db).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/tasks")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&header::HeaderValue::from_static("http://localhost:3000"))
    );
}

#[tokio::test]
async fn test_invalid_cors_origin_is_rejected() {
    let db = Database::in_memory().await.unwrap();
    let config = Config {
        cors_origin: "bad\norigin".to_string(),
        ..test_config()
    };

    assert!(build_app(&config, &db).is_err());
}
