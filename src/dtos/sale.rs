use serde::{Deserialize, Serialize};
use crate::dtos::format_timestamp;
use crate::models::sale::Sale;

#[derive(Deserialize)]
pub struct CreateSaleRequest {
    pub product: String,
    pub quantity: f64,
    pub price_per_unit: f64,
    pub total_amount: f64,
    pub customer_name: String,
}

#[derive(Serialize)]
pub struct SaleResponse {
    pub id: i64,
    pub product: String,
    pub quantity: f64,
    pub price_per_unit: f64,
    pub total_amount: f64,
    pub customer_name: String,
    pub sale_date: String,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            product: sale.product,
            quantity: sale.quantity,
            price_per_unit: sale.price_per_unit,
            total_amount: sale.total_amount,
            customer_name: sale.customer_name,
            sale_date: format_timestamp(&sale.sale_date),
        }
    }
}
