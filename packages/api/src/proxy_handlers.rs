// ABOUTME: Pass-through routes to the external AI backend
// ABOUTME: Chat, emotion recognition and habit plans; upstream failures become JSON errors, never panics

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reqwest::Client;
use serde_json::{json, Value};
use taskdeck_config::constants::{
    CHAT_REWRITE_URL, DEFAULT_BACKEND_URL, EMOTION_RECOGNITION_PATH, HABIT_TRAINER_PATH,
};
use tracing::{error, info, warn};

const INTERNAL_ERROR: &str = "Internal error";

/// Upstream locations and the shared HTTP client used by the proxy routes
#[derive(Debug, Clone)]
pub struct ProxyState {
    pub client: Client,
    pub backend_url: String,
    pub chat_url: String,
}

impl ProxyState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            chat_url: CHAT_REWRITE_URL.to_string(),
        }
    }

    /// Overrides the fixed chat rewrite target.
    pub fn with_chat_url(mut self, chat_url: impl Into<String>) -> Self {
        self.chat_url = chat_url.into();
        self
    }

    fn backend(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

impl Default for ProxyState {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

/// Message to surface from a failed upstream body: its `detail` or `error`
/// string when the body is JSON carrying one, otherwise the raw text.
pub fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}

fn relay_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR })),
    )
        .into_response()
}

fn habit_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "plan": "", "error": message.into() }))).into_response()
}

/// `POST /api/chat`: forwards the body unchanged to the fixed chat endpoint.
pub async fn chat(State(proxy): State<ProxyState>, body: Bytes) -> Response {
    info!(
        "Proxying chat request to {} ({} bytes)",
        proxy.chat_url,
        body.len()
    );

    let upstream = match proxy
        .client
        .post(&proxy.chat_url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to reach chat backend: {}", e);
            return internal_error();
        }
    };

    let status = upstream.status();
    if !status.is_success() {
        warn!("Chat backend responded with {}", status);
        return internal_error();
    }

    match upstream.json::<Value>().await {
        Ok(data) => (relay_status(status), Json(data)).into_response(),
        Err(e) => {
            error!("Failed to read chat backend response: {}", e);
            internal_error()
        }
    }
}

/// `POST /api/emotion-recognition`: forwards only the `text` field.
pub async fn emotion_recognition(State(proxy): State<ProxyState>, body: Bytes) -> Response {
    let request: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            error!("Invalid emotion recognition request body: {}", e);
            return internal_error();
        }
    };

    let payload = match request.get("text") {
        Some(text) => json!({ "text": text }),
        None => json!({}),
    };

    let url = proxy.backend(EMOTION_RECOGNITION_PATH);
    info!("Proxying emotion recognition request to {}", url);

    let upstream = match proxy.client.post(&url).json(&payload).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to reach emotion recognition backend: {}", e);
            return internal_error();
        }
    };

    let status = upstream.status();
    let text = match upstream.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read emotion recognition response: {}", e);
            return internal_error();
        }
    };

    if !status.is_success() {
        warn!("Emotion recognition backend responded with {}", status);
        return (
            relay_status(status),
            Json(json!({ "error": upstream_error_message(&text) })),
        )
            .into_response();
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            error!("Emotion recognition backend returned invalid JSON: {}", e);
            internal_error()
        }
    }
}

/// `POST /api/habit-trainer`: forwards the body unchanged and relays the plan.
pub async fn habit_trainer(State(proxy): State<ProxyState>, body: Bytes) -> Response {
    let request: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            error!("Invalid habit trainer request body: {}", e);
            return habit_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let url = proxy.backend(HABIT_TRAINER_PATH);
    info!("Proxying habit trainer request to {}", url);

    let upstream = match proxy.client.post(&url).json(&request).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to reach habit trainer backend: {}", e);
            return habit_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let status = relay_status(upstream.status());
    let text = match upstream.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read habit trainer response: {}", e);
            return habit_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    if !status.is_success() {
        warn!("Habit trainer backend responded with {}", status);
        return habit_error(status, upstream_error_message(&text));
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(data) => (status, Json(data)).into_response(),
        Err(e) => {
            error!("Habit trainer backend returned invalid JSON: {}", e);
            habit_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
