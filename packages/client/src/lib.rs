// ABOUTME: Typed HTTP client for the Taskdeck backend
// ABOUTME: One request per call, no retries; any failure surfaces as a ClientError

pub mod client;
pub mod error;
pub mod tasks;
pub mod users;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use tasks::TaskApi;
pub use users::UserApi;
