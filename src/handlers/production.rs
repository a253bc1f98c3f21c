use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use crate::state::AppState;
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::dtos::production::{CreateProductionRequest, ProductionResponse};
use crate::models::production::Production;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn list_production(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<ProductionResponse>>, AppError> {
    let records = sqlx::query_as::<_, Production>(
        r#"SELECT id, raw_material, raw_quantity, finished_product, finished_quantity, production_date
        FROM production
        ORDER BY id"#
    )
    .fetch_all(&db_pool)
    .await?;

    Ok(Json(records.into_iter().map(ProductionResponse::from).collect()))
}

#[instrument(skip_all)]
pub async fn create_production(
    State(AppState { db_pool }): State<AppState>,
    AppJson(req): AppJson<CreateProductionRequest>,
) -> Result<(StatusCode, Json<ProductionResponse>), AppError> {
    let record = sqlx::query_as::<_, Production>(
        r#"INSERT INTO production (raw_material, raw_quantity, finished_product, finished_quantity, production_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, raw_material, raw_quantity, finished_product, finished_quantity, production_date"#
    )
    .bind(&req.raw_material)
    .bind(req.raw_quantity)
    .bind(&req.finished_product)
    .bind(req.finished_quantity)
    .bind(Utc::now().naive_utc())
    .fetch_one(&db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(ProductionResponse::from(record))))
}

#[instrument(skip_all, fields(id = id))]
pub async fn delete_production(
    State(AppState { db_pool }): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM production WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Production record not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
