use serde::{Deserialize, Serialize};
use crate::dtos::format_timestamp;
use crate::models::production::Production;

#[derive(Deserialize)]
pub struct CreateProductionRequest {
    pub raw_material: String,
    pub raw_quantity: f64,
    pub finished_product: String,
    pub finished_quantity: f64,
}

#[derive(Serialize)]
pub struct ProductionResponse {
    pub id: i64,
    pub raw_material: String,
    pub raw_quantity: f64,
    pub finished_product: String,
    pub finished_quantity: f64,
    pub production_date: String,
}

impl From<Production> for ProductionResponse {
    fn from(record: Production) -> Self {
        Self {
            id: record.id,
            raw_material: record.raw_material,
            raw_quantity: record.raw_quantity,
            finished_product: record.finished_product,
            finished_quantity: record.finished_quantity,
            production_date: format_timestamp(&record.production_date),
        }
    }
}
