// src/main.rs
use std::net::SocketAddr;

use dotenvy::dotenv;
use rice_mill_backend::{bind_listener, build_app, database, AppConfig, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();
    let config = AppConfig::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .init();
    tracing::debug!(?config, "Loaded configuration");

    // Create database pool and tables
    let db_pool = match database::create_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error=%e, url=%config.database_url, "Failed to open database");
            return;
        }
    };
    if let Err(e) = database::init_schema(&db_pool).await {
        tracing::error!(error=%e, "Failed to create schema");
        return;
    }

    let app = build_app(AppState::new(db_pool));

    let addr = SocketAddr::from((config.host, config.port));
    let listener = match bind_listener(&config).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error=%e, "Failed to bind");
            return;
        }
    };
    let mode = if config.debug { "development" } else { "production" };
    tracing::info!("Server running on {} ({} mode)", addr, mode);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
