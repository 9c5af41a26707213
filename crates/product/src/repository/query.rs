use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_by_id(
        &self,
        cancel: &CancellationToken,
        id: Uuid,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, stock
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn);

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("🛑 find_by_id abandoned, client went away (ID: {id})");
                return Err(RepositoryError::Canceled);
            }
            res = query => res.map_err(|e| {
                error!("❌ Failed to fetch product {id}: {e:?}");
                RepositoryError::from(e)
            })?,
        };

        Ok(result)
    }

    async fn find_all(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let query = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, description, price, stock
            FROM products
            "#,
        )
        .fetch_all(&mut *conn);

        let products = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("🛑 find_all abandoned, client went away");
                return Err(RepositoryError::Canceled);
            }
            res = query => res.map_err(|e| {
                error!("❌ Failed to fetch products: {e:?}");
                RepositoryError::from(e)
            })?,
        };

        Ok(products)
    }

    async fn any_exist(&self, cancel: &CancellationToken) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS (SELECT 1 FROM products)"#)
            .fetch_one(&mut *conn);

        let exists = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("🛑 any_exist abandoned, client went away");
                return Err(RepositoryError::Canceled);
            }
            res = query => res.map_err(|e| {
                error!("❌ Failed to probe products table: {e:?}");
                RepositoryError::from(e)
            })?,
        };

        Ok(exists)
    }
}
