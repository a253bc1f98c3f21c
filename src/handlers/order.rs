// src/handlers/order.rs
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use crate::dtos::order::{CreateOrderRequest, UpdateOrderRequest, OrderResponse};
use crate::extract::{AppJson, AppPath};
use crate::models::order::{Order, DEFAULT_ORDER_STATUS};
use crate::state::AppState;
use crate::error::AppError;
use tracing::{error, instrument};

// GET /api/orders
#[instrument(skip(state))]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, customer_name, product, quantity, total_price, status, order_date
         FROM orders ORDER BY id"
    )
        .fetch_all(&state.db_pool)
        .await
        .map_err(|e| {
            error!(?e, "Failed to fetch orders");
            AppError::db(e)
        })?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// POST /api/orders
#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let status = payload.status.unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string());

    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders (customer_name, product, quantity, total_price, status, order_date)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, customer_name, product, quantity, total_price, status, order_date"
    )
    .bind(&payload.customer_name)
    .bind(&payload.product)
    .bind(payload.quantity)
    .bind(payload.total_price)
    .bind(status)
    .bind(Utc::now().naive_utc())
    .fetch_one(&state.db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}

// PUT /api/orders/:id - only supplied fields change
#[instrument(skip(state, payload))]
pub async fn update_order(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = sqlx::query_as::<_, Order>(
        "UPDATE orders SET
         customer_name = COALESCE($1, customer_name),
         product = COALESCE($2, product),
         quantity = COALESCE($3, quantity),
         total_price = COALESCE($4, total_price),
         status = COALESCE($5, status)
         WHERE id = $6
         RETURNING id, customer_name, product, quantity, total_price, status, order_date"
    )
    .bind(payload.customer_name)
    .bind(payload.product)
    .bind(payload.quantity)
    .bind(payload.total_price)
    .bind(payload.status)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Order not found"))?;

    Ok(Json(OrderResponse::from(order)))
}

// DELETE /api/orders/:id
#[instrument(skip(state))]
pub async fn delete_order(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Order not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
