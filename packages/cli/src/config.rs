// ABOUTME: Server configuration loaded from the environment
// ABOUTME: Port, bind host, CORS origin, AI backend URL and database location

use std::num::ParseIntError;
use std::path::PathBuf;
use taskdeck_config::constants::{
    BACKEND_URL, CORS_ORIGIN, DEFAULT_API_URL, DEFAULT_BACKEND_URL, DEFAULT_CORS_ORIGIN,
    DEFAULT_DATABASE_PATH, DEFAULT_HOST, DEFAULT_PORT, HOST, PORT, TASKDECK_API_URL,
    TASKDECK_DATABASE_PATH,
};
use taskdeck_config::env_or_default;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub cors_origin: String,
    pub backend_url: String,
    pub database_path: PathBuf,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_or_default(PORT, &DEFAULT_PORT.to_string()).parse::<u16>()?;
        validate_port(port)?;

        Ok(Config {
            port,
            host: env_or_default(HOST, DEFAULT_HOST),
            cors_origin: env_or_default(CORS_ORIGIN, DEFAULT_CORS_ORIGIN),
            backend_url: env_or_default(BACKEND_URL, DEFAULT_BACKEND_URL),
            database_path: PathBuf::from(env_or_default(
                TASKDECK_DATABASE_PATH,
                DEFAULT_DATABASE_PATH,
            )),
            api_url: env_or_default(TASKDECK_API_URL, DEFAULT_API_URL),
        })
    }

    /// Apply a `--port` flag, which wins over `PORT`.
    pub fn with_port(mut self, port: Option<u16>) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            validate_port(port)?;
            self.port = port;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn validate_port(port: u16) -> Result<(), ConfigError> {
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(())
}
