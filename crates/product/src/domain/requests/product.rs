use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound payload for product creation. The id is never part of the
/// request; it is assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Handcrafted Steel Chair")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "Lorem ipsum dolor sit amet.")]
    pub description: String,

    #[schema(example = 19.99)]
    pub price: Decimal,

    #[schema(example = 5)]
    pub stock: i32,
}
