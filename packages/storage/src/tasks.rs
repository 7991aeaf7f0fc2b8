// ABOUTME: Task storage layer using SQLite
// ABOUTME: CRUD for tasks plus user assignment; tasks are returned with their assigned users

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use taskdeck_models::{
    CreateTaskRequest, Task, TaskDetails, TaskDetailsInput, TaskStatus, UpdateTaskRequest, User,
};
use tracing::debug;

use crate::{StorageError, StorageResult};

#[derive(Debug, Clone)]
pub struct TaskStorage {
    pool: SqlitePool,
}

pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn details_to_json(details: Option<TaskDetailsInput>) -> StorageResult<Option<String>> {
    details
        .map(TaskDetails::from)
        .map(|d| serde_json::to_string(&d))
        .transpose()
        .map_err(StorageError::Json)
}

impl TaskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_tasks(&self) -> StorageResult<Vec<Task>> {
        debug!("Fetching all tasks");

        let rows = sqlx::query(
            r#"
            SELECT id, title, description, status, details, created_at, updated_at
            FROM tasks
            ORDER BY created_at, rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let mut assignments = self.all_assignments().await?;

        rows.iter()
            .map(|row| {
                let mut task = row_to_task(row)?;
                task.users = assignments.remove(&task.id).unwrap_or_default();
                Ok(task)
            })
            .collect()
    }

    pub async fn get_task(&self, task_id: &str) -> StorageResult<Task> {
        debug!("Fetching task: {}", task_id);

        let row = sqlx::query(
            r#"
            SELECT id, title, description, status, details, created_at, updated_at
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?
        .ok_or(StorageError::NotFound("Task"))?;

        let mut task = row_to_task(&row)?;
        task.users = self.assigned_users(task_id).await?;
        Ok(task)
    }

    pub async fn create_task(&self, input: CreateTaskRequest) -> StorageResult<Task> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();
        debug!("Creating task {} ({})", id, input.title);

        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, description, status, details, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.status.as_str())
        .bind(details_to_json(input.details)?)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_task(&id).await
    }

    pub async fn update_task(&self, task_id: &str, input: UpdateTaskRequest) -> StorageResult<Task> {
        debug!("Updating task: {}", task_id);

        let result = sqlx::query(
            r#"
            UPDATE tasks SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                status = COALESCE(?, status),
                details = COALESCE(?, details),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(input.title)
        .bind(input.description)
        .bind(input.status.map(|s| s.as_str()))
        .bind(details_to_json(input.details)?)
        .bind(now_timestamp())
        .bind(task_id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Task"));
        }

        self.get_task(task_id).await
    }

    pub async fn delete_task(&self, task_id: &str) -> StorageResult<()> {
        debug!("Deleting task: {}", task_id);

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Task"));
        }
        Ok(())
    }

    /// Assigns a user to a task. Assigning an already assigned user is a no-op.
    pub async fn assign_user(&self, task_id: &str, user_id: &str) -> StorageResult<Task> {
        debug!("Assigning user {} to task {}", user_id, task_id);

        self.ensure_task(task_id).await?;
        self.ensure_user(user_id).await?;

        sqlx::query(
            "INSERT OR IGNORE INTO task_users (task_id, user_id, assigned_at) VALUES (?, ?, ?)",
        )
        .bind(task_id)
        .bind(user_id)
        .bind(now_timestamp())
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_task(task_id).await
    }

    pub async fn unassign_user(&self, task_id: &str, user_id: &str) -> StorageResult<Task> {
        debug!("Removing user {} from task {}", user_id, task_id);

        self.ensure_task(task_id).await?;

        let result = sqlx::query("DELETE FROM task_users WHERE task_id = ? AND user_id = ?")
            .bind(task_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotAssigned {
                task_id: task_id.to_string(),
                user_id: user_id.to_string(),
            });
        }

        self.get_task(task_id).await
    }

    async fn exists(&self, query: &'static str, id: &str) -> StorageResult<bool> {
        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;
        Ok(row.is_some())
    }

    async fn ensure_task(&self, task_id: &str) -> StorageResult<()> {
        if self.exists("SELECT 1 FROM tasks WHERE id = ?", task_id).await? {
            Ok(())
        } else {
            Err(StorageError::NotFound("Task"))
        }
    }

    async fn ensure_user(&self, user_id: &str) -> StorageResult<()> {
        if self.exists("SELECT 1 FROM users WHERE id = ?", user_id).await? {
            Ok(())
        } else {
            Err(StorageError::NotFound("User"))
        }
    }

    async fn assigned_users(&self, task_id: &str) -> StorageResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT u.id, u.username, u.email
            FROM task_users tu
            JOIN users u ON u.id = tu.user_id
            WHERE tu.task_id = ?
            ORDER BY tu.rowid
            "#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        rows.iter().map(crate::users::row_to_user).collect()
    }

    async fn all_assignments(&self) -> StorageResult<HashMap<String, Vec<User>>> {
        let rows = sqlx::query(
            r#"
            SELECT tu.task_id, u.id, u.username, u.email
            FROM task_users tu
            JOIN users u ON u.id = tu.user_id
            ORDER BY tu.rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let mut by_task: HashMap<String, Vec<User>> = HashMap::new();
        for row in &rows {
            let task_id: String = row.try_get("task_id")?;
            by_task
                .entry(task_id)
                .or_default()
                .push(crate::users::row_to_user(row)?);
        }
        Ok(by_task)
    }
}

fn row_to_task(row: &SqliteRow) -> StorageResult<Task> {
    let status_str: String = row.try_get("status")?;
    let status = status_str
        .parse::<TaskStatus>()
        .map_err(|e| StorageError::InvalidData(e.to_string()))?;

    let details_json: Option<String> = row.try_get("details")?;
    let details = details_json
        .map(|json| serde_json::from_str::<TaskDetails>(&json))
        .transpose()?;

    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status,
        details,
        users: Vec::new(),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
