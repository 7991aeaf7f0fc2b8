// ABOUTME: Configuration constants and environment helpers for Taskdeck
// ABOUTME: Shared by the server, the API client and the terminal dashboard

pub mod constants;
pub mod env;

pub use env::{env_or_default, parse_env_or_default};
