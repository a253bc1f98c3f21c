use axum::{
    routing::{get, delete},
    Router,
};
use crate::state::AppState;
use crate::handlers::production;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/production", get(production::list_production).post(production::create_production))
        // no PUT: production records are create/delete only
        .route("/production/{id}", delete(production::delete_production))
}
