use sqlx::FromRow;
use chrono::NaiveDateTime;

pub const DEFAULT_ORDER_STATUS: &str = "Pending";

#[derive(Debug, FromRow)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub product: String,
    pub quantity: f64,
    pub total_price: f64,
    // free text, not an enum
    pub status: String,
    pub order_date: NaiveDateTime,
}
