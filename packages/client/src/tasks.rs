use taskdeck_models::{CreateTaskRequest, Task, UpdateTaskRequest};

use crate::client::{segment, ApiClient};
use crate::error::ClientResult;

/// Task resource: `/tasks` and `/tasks/{id}/users/{user_id}`.
#[derive(Debug, Clone, Copy)]
pub struct TaskApi<'a> {
    api: &'a ApiClient,
}

impl<'a> TaskApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Task>> {
        let request = self.api.http().get(self.api.url("/tasks"));
        self.api.fetch_json(request).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Task> {
        let request = self.api.http().get(self.task_url(id));
        self.api.fetch_json(request).await
    }

    pub async fn create(&self, payload: &CreateTaskRequest) -> ClientResult<Task> {
        let request = self.api.http().post(self.api.url("/tasks")).json(payload);
        self.api.fetch_json(request).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateTaskRequest) -> ClientResult<Task> {
        let request = self.api.http().put(self.task_url(id)).json(payload);
        self.api.fetch_json(request).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let request = self.api.http().delete(self.task_url(id));
        self.api.fetch_empty(request).await
    }

    pub async fn assign_user(&self, task_id: &str, user_id: &str) -> ClientResult<Task> {
        let request = self.api.http().put(self.assignment_url(task_id, user_id));
        self.api.fetch_json(request).await
    }

    pub async fn unassign_user(&self, task_id: &str, user_id: &str) -> ClientResult<Task> {
        let request = self.api.http().delete(self.assignment_url(task_id, user_id));
        self.api.fetch_json(request).await
    }

    fn task_url(&self, id: &str) -> String {
        self.api.url(&format!("/tasks/{}", segment(id)))
    }

    fn assignment_url(&self, task_id: &str, user_id: &str) -> String {
        self.api.url(&format!(
            "/tasks/{}/users/{}",
            segment(task_id),
            segment(user_id)
        ))
    }
}
