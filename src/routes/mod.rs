pub mod inventory;
pub mod orders;
pub mod production;
pub mod sales;
pub mod pages;

use axum::Router;
use crate::state::AppState;

/// JSON API, mounted under `/api`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(inventory::routes())
        .merge(orders::routes())
        .merge(production::routes())
        .merge(sales::routes())
}
