use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::tasks::TaskApi;
use crate::users::UserApi;

/// HTTP API client for the Taskdeck server.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tasks(&self) -> TaskApi<'_> {
        TaskApi::new(self)
    }

    pub fn users(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Check server health
    pub async fn health_check(&self) -> ClientResult<bool> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        Ok(response.status().is_success())
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = Self::send(request).await?;
        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn fetch_empty(&self, request: RequestBuilder) -> ClientResult<()> {
        Self::send(request).await.map(|_| ())
    }

    async fn send(request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Request failed with status {}: {}", status, body);
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
