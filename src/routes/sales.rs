use axum::{
    routing::{get, delete},
    Router,
};
use crate::state::AppState;
use crate::handlers::sale;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(sale::list_sales).post(sale::create_sale))
        // no PUT: sales are create/delete only
        .route("/sales/{id}", delete(sale::delete_sale))
}
