// src/handlers/inventory.rs
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use crate::dtos::inventory::{CreateInventoryRequest, UpdateInventoryRequest, InventoryResponse};
use crate::extract::{AppJson, AppPath};
use crate::models::inventory::Inventory;
use crate::state::AppState;
use crate::error::AppError;
use tracing::{error, instrument};

// GET /api/inventory - List all inventory items
#[instrument(skip(state))]
pub async fn list_inventory(State(state): State<AppState>) -> Result<Json<Vec<InventoryResponse>>, AppError> {
    match sqlx::query_as::<_, Inventory>(
        "SELECT id, item_name, quantity, unit, date_added FROM inventory ORDER BY id"
    )
        .fetch_all(&state.db_pool)
        .await {
        Ok(items) => {
            let response = items.into_iter().map(InventoryResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch inventory");
            Err(e.into())
        }
    }
}

// POST /api/inventory - Add an inventory item
#[instrument(skip(state, payload))]
pub async fn create_inventory(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateInventoryRequest>,
) -> Result<(StatusCode, Json<InventoryResponse>), AppError> {
    let item = sqlx::query_as::<_, Inventory>(
        "INSERT INTO inventory (item_name, quantity, unit, date_added)
         VALUES ($1, $2, $3, $4)
         RETURNING id, item_name, quantity, unit, date_added"
    )
    .bind(&payload.item_name)
    .bind(payload.quantity)
    .bind(&payload.unit)
    .bind(Utc::now().naive_utc())
    .fetch_one(&state.db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(InventoryResponse::from(item))))
}

// PUT /api/inventory/:id - Partial update
#[instrument(skip(state, payload))]
pub async fn update_inventory(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateInventoryRequest>,
) -> Result<Json<InventoryResponse>, AppError> {
    let item = sqlx::query_as::<_, Inventory>(
        "UPDATE inventory SET
         item_name = COALESCE($1, item_name),
         quantity = COALESCE($2, quantity),
         unit = COALESCE($3, unit)
         WHERE id = $4
         RETURNING id, item_name, quantity, unit, date_added"
    )
    .bind(payload.item_name)
    .bind(payload.quantity)
    .bind(payload.unit)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Inventory item not found"))?;

    Ok(Json(InventoryResponse::from(item)))
}

// DELETE /api/inventory/:id
#[instrument(skip(state))]
pub async fn delete_inventory(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM inventory WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Inventory item not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
