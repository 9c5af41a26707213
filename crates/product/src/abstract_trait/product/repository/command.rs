use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn insert(
        &self,
        cancel: &CancellationToken,
        product: &ProductModel,
    ) -> Result<(), RepositoryError>;
    async fn insert_many(
        &self,
        cancel: &CancellationToken,
        products: &[ProductModel],
    ) -> Result<(), RepositoryError>;
}
