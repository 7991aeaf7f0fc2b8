// ABOUTME: Taskdeck CLI library: logging setup and HTTP server bootstrap
// ABOUTME: Wires configuration, the SQLite database and the API router together

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use taskdeck_api::{create_router, DbState, ProxyState};
use taskdeck_storage::Database;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod config;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

/// Install the global log subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

/// The full application: API routes plus CORS for the configured origin.
pub fn build_app(config: &Config, db: &Database) -> anyhow::Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let app = create_router(DbState::new(db), ProxyState::new(&config.backend_url)).layer(cors);
    Ok(app)
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("Opening database at {}", config.database_path.display());
    let db = Database::open(&config.database_path)
        .await
        .context("Failed to open database")?;

    let app = build_app(&config, &db)?;
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    info!("CORS origin: {}", config.cors_origin);
    info!("AI backend: {}", config.backend_url);

    axum::serve(listener, app).await?;
    Ok(())
}
