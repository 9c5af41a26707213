use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{requests::CreateProductRequest, response::ProductResponse},
    model::product::Product as ProductModel,
    seeder::ProductFaker,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const SEED_PRODUCT_COUNT: usize = 10;

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, query: DynProductQueryRepository) -> Self {
        Self { command, query }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(
        &self,
        cancel: &CancellationToken,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("📦 Creating product '{}'", req.name);

        let product = ProductModel::new(
            req.name.clone(),
            req.description.clone(),
            req.price,
            req.stock,
        );

        match self.command.insert(cancel, &product).await {
            Ok(()) => {
                info!("✅ Created product ID {} ({})", product.id, product.name);
                Ok(ProductResponse::from(product))
            }
            Err(RepositoryError::Canceled) => {
                info!("🛑 create aborted: client closed request");
                Err(ServiceError::Canceled)
            }
            Err(e) => {
                error!("❌ Failed to create product '{}': {e:?}", req.name);
                Err(ServiceError::from(e))
            }
        }
    }

    async fn seed(&self, cancel: &CancellationToken) -> Result<usize, ServiceError> {
        info!("🌱 Seeding fake products");

        let populated = match self.query.any_exist(cancel).await {
            Ok(populated) => populated,
            Err(RepositoryError::Canceled) => {
                info!("🛑 seed aborted: client closed request");
                return Err(ServiceError::Canceled);
            }
            Err(e) => {
                error!("❌ Failed to probe products table: {e:?}");
                return Err(ServiceError::from(e));
            }
        };

        if populated {
            info!("⚠️ Products already exist, skipping seed");
            return Err(ServiceError::AlreadySeeded(
                "Products already exist.".to_string(),
            ));
        }

        let mut faker = ProductFaker::new().map_err(|e| {
            error!("❌ Failed to initialize product faker: {e:?}");
            ServiceError::Internal(e.to_string())
        })?;
        let products = faker.generate(SEED_PRODUCT_COUNT);

        match self.command.insert_many(cancel, &products).await {
            Ok(()) => {
                info!("✅ Seeded {} fake products", products.len());
                Ok(products.len())
            }
            Err(RepositoryError::Canceled) => {
                info!("🛑 seed aborted: client closed request");
                Err(ServiceError::Canceled)
            }
            Err(e) => {
                error!("❌ Failed to insert fake products: {e:?}");
                Err(ServiceError::from(e))
            }
        }
    }
}
