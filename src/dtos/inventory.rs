// src/dtos/inventory.rs
use serde::{Deserialize, Serialize};
use crate::dtos::format_timestamp;
use crate::models::inventory::Inventory;

#[derive(Debug, Deserialize)]
pub struct CreateInventoryRequest {
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventoryRequest {
    pub item_name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub id: i64,
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
    pub date_added: String,
}

impl From<Inventory> for InventoryResponse {
    fn from(item: Inventory) -> Self {
        Self {
            id: item.id,
            item_name: item.item_name,
            quantity: item.quantity,
            unit: item.unit,
            date_added: format_timestamp(&item.date_added),
        }
    }
}
