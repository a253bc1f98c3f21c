// src/lib.rs
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::AppConfig;
pub use state::AppState;

/// Full application: JSON API under `/api`, page shells at the root.
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::create_api_router())
        .merge(routes::pages::routes())
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Bind the configured `HOST:PORT`. A busy port is an error, not a retry.
pub async fn bind_listener(config: &AppConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind(SocketAddr::from((config.host, config.port))).await
}

async fn health_check() -> &'static str {
    "OK"
}
