// ABOUTME: SQLite persistence for tasks, users and task assignments
// ABOUTME: Connection setup, embedded migrations and the per-entity stores

pub mod sqlite;
pub mod tasks;
pub mod users;

use thiserror::Error;

pub use sqlite::Database;
pub use tasks::TaskStorage;
pub use users::UserStorage;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("User {user_id} is not assigned to task {task_id}")]
    NotAssigned { task_id: String, user_id: String },
    #[error("Invalid stored value: {0}")]
    InvalidData(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
