use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl Product {
    // the id is assigned before the first write and never supplied by a client
    pub fn new(name: String, description: String, price: Decimal, stock: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            stock,
        }
    }
}
