use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Debug, FromRow)]
pub struct Inventory {
    pub id: i64,
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
    pub date_added: NaiveDateTime,
}
