pub mod inventory;
pub mod order;
pub mod production;
pub mod sale;
