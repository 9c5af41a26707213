use crate::domain::response::{ProductDetailResponse, ProductResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_by_id(
        &self,
        cancel: &CancellationToken,
        id: Uuid,
    ) -> Result<ProductDetailResponse, ServiceError>;
    async fn find_all(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<ProductResponse>, ServiceError>;
}
