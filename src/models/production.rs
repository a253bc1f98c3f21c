use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Debug, FromRow)]
pub struct Production {
    pub id: i64,
    pub raw_material: String,
    pub raw_quantity: f64,
    pub finished_product: String,
    pub finished_quantity: f64,
    pub production_date: NaiveDateTime,
}
