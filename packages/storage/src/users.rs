// ABOUTME: User storage layer using SQLite
// ABOUTME: Emails are unique (case-insensitive); deleting a user drops their assignments

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use taskdeck_models::{CreateUserRequest, UpdateUserRequest, User};
use tracing::debug;

use crate::tasks::now_timestamp;
use crate::{StorageError, StorageResult};

#[derive(Debug, Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

pub(crate) fn row_to_user(row: &SqliteRow) -> StorageResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
    })
}

fn map_unique_violation(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::DuplicateEmail,
        _ => StorageError::Sqlx(err),
    }
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_users(&self) -> StorageResult<Vec<User>> {
        debug!("Fetching all users");

        let rows = sqlx::query("SELECT id, username, email FROM users ORDER BY created_at, rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_user).collect()
    }

    pub async fn get_user(&self, user_id: &str) -> StorageResult<User> {
        let row = sqlx::query("SELECT id, username, email FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or(StorageError::NotFound("User"))?;

        row_to_user(&row)
    }

    pub async fn create_user(&self, input: CreateUserRequest) -> StorageResult<User> {
        let id = uuid::Uuid::new_v4().to_string();
        debug!("Creating user {} ({})", id, input.username);

        sqlx::query("INSERT INTO users (id, username, email, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(now_timestamp())
            .execute(&self.pool)
            .await
            .map_err(map_unique_violation)?;

        Ok(User {
            id,
            username: input.username,
            email: input.email,
        })
    }

    pub async fn update_user(&self, user_id: &str, input: UpdateUserRequest) -> StorageResult<User> {
        debug!("Updating user: {}", user_id);

        let result = sqlx::query(
            r#"
            UPDATE users SET
                username = COALESCE(?, username),
                email = COALESCE(?, email)
            WHERE id = ?
            "#,
        )
        .bind(input.username)
        .bind(input.email)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("User"));
        }

        self.get_user(user_id).await
    }

    pub async fn delete_user(&self, user_id: &str) -> StorageResult<()> {
        debug!("Deleting user: {}", user_id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("User"));
        }
        Ok(())
    }
}
