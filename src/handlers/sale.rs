use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use crate::state::AppState;
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::dtos::sale::{CreateSaleRequest, SaleResponse};
use crate::models::sale::Sale;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn list_sales(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<SaleResponse>>, AppError> {
    let sales = sqlx::query_as::<_, Sale>(
        r#"SELECT id, product, quantity, price_per_unit, total_amount, customer_name, sale_date
        FROM sales
        ORDER BY id"#
    )
    .fetch_all(&db_pool)
    .await?;

    Ok(Json(sales.into_iter().map(SaleResponse::from).collect()))
}

#[instrument(skip_all)]
pub async fn create_sale(
    State(AppState { db_pool }): State<AppState>,
    AppJson(req): AppJson<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleResponse>), AppError> {
    // total_amount is taken as-is; no quantity * price check
    let sale = sqlx::query_as::<_, Sale>(
        r#"INSERT INTO sales (product, quantity, price_per_unit, total_amount, customer_name, sale_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, product, quantity, price_per_unit, total_amount, customer_name, sale_date"#
    )
    .bind(&req.product)
    .bind(req.quantity)
    .bind(req.price_per_unit)
    .bind(req.total_amount)
    .bind(&req.customer_name)
    .bind(Utc::now().naive_utc())
    .fetch_one(&db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(SaleResponse::from(sale))))
}

#[instrument(skip_all, fields(id = id))]
pub async fn delete_sale(
    State(AppState { db_pool }): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM sales WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Sale not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
