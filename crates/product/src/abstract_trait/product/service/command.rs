use crate::domain::{requests::CreateProductRequest, response::ProductResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create(
        &self,
        cancel: &CancellationToken,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn seed(&self, cancel: &CancellationToken) -> Result<usize, ServiceError>;
}
