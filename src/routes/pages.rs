use axum::{routing::get, Router};
use crate::handlers::pages;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/inventory", get(pages::inventory))
        .route("/orders", get(pages::orders))
        .route("/production", get(pages::production))
        .route("/sales", get(pages::sales))
}
