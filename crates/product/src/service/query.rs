use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::{ProductDetailResponse, ProductResponse},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_by_id(
        &self,
        cancel: &CancellationToken,
        id: Uuid,
    ) -> Result<ProductDetailResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        match self.query.find_by_id(cancel, id).await {
            Ok(Some(product)) => {
                info!("✅ Found product: '{}' (ID: {id})", product.name);
                Ok(ProductDetailResponse::from(product))
            }
            Ok(None) => {
                info!("❌ Product not found with ID: {id}");
                Err(ServiceError::NotFound("Product not found.".to_string()))
            }
            Err(RepositoryError::Canceled) => {
                info!("🛑 find_by_id aborted: client closed request (ID: {id})");
                Err(ServiceError::Canceled)
            }
            Err(e) => {
                error!("❌ Database error while finding product ID {id}: {e:?}");
                Err(ServiceError::from(e))
            }
        }
    }

    async fn find_all(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Finding all products");

        let products = match self.query.find_all(cancel).await {
            Ok(products) => products,
            Err(RepositoryError::Canceled) => {
                info!("🛑 find_all aborted: client closed request");
                return Err(ServiceError::Canceled);
            }
            Err(e) => {
                error!("❌ Failed to fetch products: {e:?}");
                return Err(ServiceError::from(e));
            }
        };

        info!("✅ Retrieved {} products", products.len());

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
