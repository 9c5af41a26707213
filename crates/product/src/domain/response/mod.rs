mod product;

pub use self::product::{ProductDetailResponse, ProductResponse};
