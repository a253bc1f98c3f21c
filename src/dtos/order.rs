// src/dtos/order.rs
use serde::{Deserialize, Serialize};
use crate::dtos::format_timestamp;
use crate::models::order::Order;

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub product: String,
    pub quantity: f64,
    pub total_price: f64,
    pub status: Option<String>, // defaults to "Pending"
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub customer_name: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<f64>,
    pub total_price: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub customer_name: String,
    pub product: String,
    pub quantity: f64,
    pub total_price: f64,
    pub status: String,
    pub order_date: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name,
            product: order.product,
            quantity: order.quantity,
            total_price: order.total_price,
            status: order.status,
            order_date: format_timestamp(&order.order_date),
        }
    }
}
