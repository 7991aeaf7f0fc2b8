use taskdeck_models::{CreateUserRequest, UpdateUserRequest, User};

use crate::client::{segment, ApiClient};
use crate::error::ClientResult;

#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    api: &'a ApiClient,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<User>> {
        let request = self.api.http().get(self.api.url("/users"));
        self.api.fetch_json(request).await
    }

    pub async fn create(&self, payload: &CreateUserRequest) -> ClientResult<User> {
        let request = self.api.http().post(self.api.url("/users")).json(payload);
        self.api.fetch_json(request).await
    }

    pub async fn update(&self, id: &str, payload: &UpdateUserRequest) -> ClientResult<User> {
        let request = self.api.http().put(self.user_url(id)).json(payload);
        self.api.fetch_json(request).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let request = self.api.http().delete(self.user_url(id));
        self.api.fetch_empty(request).await
    }

    fn user_url(&self, id: &str) -> String {
        self.api.url(&format!("/users/{}", segment(id)))
    }
}
