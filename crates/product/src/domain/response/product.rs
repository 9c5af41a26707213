use crate::model::product::Product as ProductModel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Full projection, used by the list endpoint and the create response.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
        }
    }
}

/// Single-item projection; deliberately omits the id.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductDetailResponse {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
}

impl From<ProductModel> for ProductDetailResponse {
    fn from(value: ProductModel) -> Self {
        ProductDetailResponse {
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
        }
    }
}
