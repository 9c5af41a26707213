use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_by_id(
        &self,
        cancel: &CancellationToken,
        id: Uuid,
    ) -> Result<Option<ProductModel>, RepositoryError>;
    async fn find_all(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn any_exist(&self, cancel: &CancellationToken) -> Result<bool, RepositoryError>;
}
