// ABOUTME: Tests for the typed API client against a mock HTTP server
// ABOUTME: Covers request shapes, decoding and the single generic failure path

use pretty_assertions::assert_eq;
use serde_json::json;
use taskdeck_client::{ApiClient, ClientError};
use taskdeck_models::{
    CreateTaskRequest, CreateUserRequest, TaskDetailsInput, TaskPriority, TaskStatus,
    UpdateTaskRequest,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn task_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Write tests",
        "description": "For the client",
        "status": status,
        "details": {"priority": "high"},
        "users": [],
        "created_at": "2024-05-01T12:00:00Z"
    })
}

#[tokio::test]
async fn test_get_all_tasks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([task_json("t1", "pending"), task_json("t2", "completed")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let tasks = client.tasks().get_all().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].status, TaskStatus::Completed);
    assert_eq!(tasks[0].priority(), Some(TaskPriority::High));
}

#[tokio::test]
async fn test_create_task_posts_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({
            "title": "Write tests",
            "description": "For the client",
            "status": "pending",
            "details": {"priority": "medium"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json("new", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri()));
    let created = client
        .tasks()
        .create(&CreateTaskRequest {
            title: "Write tests".to_string(),
            description: "For the client".to_string(),
            status: TaskStatus::Pending,
            details: Some(TaskDetailsInput {
                priority: Some(TaskPriority::Medium),
                ..TaskDetailsInput::default()
            }),
        })
        .await
        .unwrap();

    assert_eq!(created.id, "new");
}

#[tokio::test]
async fn test_update_and_delete_task() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tasks/t1"))
        .and(body_json(json!({"status": "in_progress"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("t1", "in_progress")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let updated = client
        .tasks()
        .update(
            "t1",
            &UpdateTaskRequest {
                status: Some(TaskStatus::InProgress),
                ..UpdateTaskRequest::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, TaskStatus::InProgress);

    client.tasks().delete("t1").await.unwrap();
}

#[tokio::test]
async fn test_assign_user_uses_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tasks/t1/users/u9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("t1", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client.tasks().assign_user("t1", "u9").await.unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_a_single_error_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.users().get_all().await.unwrap_err();

    match &err {
        ClientError::Status { status, body } => {
            assert_eq!(*status, 503);
            assert_eq!(body, "busy");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_create_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({"username": "ada", "email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "u1", "username": "ada", "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let user = client
        .users()
        .create(&CreateUserRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.id, "u1");
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = ApiClient::new(format!("http://127.0.0.1:{}", port));
    let err = client.tasks().get_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_malformed_body_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    assert!(matches!(
        client.tasks().get_all().await,
        Err(ClientError::Request(_))
    ));
}
