use axum::{
    routing::{get, put},
    Router,
};
use crate::handlers::order::{
    list_orders, create_order, update_order, delete_order
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", put(update_order).delete(delete_order))
}
