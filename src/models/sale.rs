use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Debug, FromRow)]
pub struct Sale {
    pub id: i64,
    pub product: String,
    pub quantity: f64,
    pub price_per_unit: f64,
    /// Stored exactly as the client sent it.
    pub total_amount: f64,
    pub customer_name: String,
    pub sale_date: NaiveDateTime,
}
