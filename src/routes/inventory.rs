use axum::{
    routing::{get, put},
    Router,
};
use crate::handlers::inventory::{
    list_inventory, create_inventory, update_inventory, delete_inventory
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(list_inventory).post(create_inventory))
        .route("/inventory/{id}", put(update_inventory).delete(delete_inventory))
}
