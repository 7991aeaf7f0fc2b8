// ABOUTME: HTTP API layer for Taskdeck providing REST endpoints and routing
// ABOUTME: Task and user CRUD over SQLite plus pass-through routes to the AI backend

use axum::{
    routing::{get, post, put},
    Router,
};
use taskdeck_storage::{Database, TaskStorage, UserStorage};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod health;
pub mod proxy_handlers;
pub mod tasks_handlers;
pub mod users_handlers;

pub use error::{ApiResult, AppError};
pub use proxy_handlers::ProxyState;

/// Storage handles shared by the CRUD handlers
#[derive(Debug, Clone)]
pub struct DbState {
    pub task_storage: TaskStorage,
    pub user_storage: UserStorage,
}

impl DbState {
    pub fn new(db: &Database) -> Self {
        Self {
            task_storage: db.task_storage(),
            user_storage: db.user_storage(),
        }
    }
}

/// Creates the tasks API router
pub fn create_tasks_router() -> Router<DbState> {
    Router::new()
        .route(
            "/tasks",
            get(tasks_handlers::list_tasks).post(tasks_handlers::create_task),
        )
        .route(
            "/tasks/{task_id}",
            get(tasks_handlers::get_task)
                .put(tasks_handlers::update_task)
                .delete(tasks_handlers::delete_task),
        )
        .route(
            "/tasks/{task_id}/users/{user_id}",
            put(tasks_handlers::assign_user).delete(tasks_handlers::unassign_user),
        )
}

/// Creates the users API router
pub fn create_users_router() -> Router<DbState> {
    Router::new()
        .route(
            "/users",
            get(users_handlers::list_users).post(users_handlers::create_user),
        )
        .route(
            "/users/{user_id}",
            put(users_handlers::update_user).delete(users_handlers::delete_user),
        )
}

/// Creates the AI backend pass-through router
pub fn create_proxy_router() -> Router<ProxyState> {
    Router::new()
        .route("/api/chat", post(proxy_handlers::chat))
        .route(
            "/api/emotion-recognition",
            post(proxy_handlers::emotion_recognition),
        )
        .route("/api/habit-trainer", post(proxy_handlers::habit_trainer))
}

/// Full application router with every route and its state applied
pub fn create_router(db: DbState, proxy: ProxyState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .merge(create_tasks_router().with_state(db.clone()))
        .merge(create_users_router().with_state(db))
        .merge(create_proxy_router().with_state(proxy))
        .layer(TraceLayer::new_for_http())
}
