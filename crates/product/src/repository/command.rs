use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn insert(
        &self,
        cancel: &CancellationToken,
        product: &ProductModel,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        {
            let insert = sqlx::query(
                r#"
                INSERT INTO products (id, name, description, price, stock)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .execute(&mut *tx);

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    // the dropped transaction rolls back, no partial row survives
                    info!("🛑 insert abandoned, client went away (ID: {})", product.id);
                    return Err(RepositoryError::Canceled);
                }
                res = insert => {
                    res.map_err(|err| {
                        error!("❌ Failed to insert product {}: {err:?}", product.name);
                        RepositoryError::from(err)
                    })?;
                }
            }
        }

        let commit = tx.commit();

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("🛑 commit abandoned, client went away (ID: {})", product.id);
                return Err(RepositoryError::Canceled);
            }
            res = commit => {
                res.map_err(|err| {
                    error!("❌ Failed to commit product {}: {err:?}", product.id);
                    RepositoryError::from(err)
                })?;
            }
        }

        info!("✅ Created product ID {} ({})", product.id, product.name);
        Ok(())
    }

    async fn insert_many(
        &self,
        cancel: &CancellationToken,
        products: &[ProductModel],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        for product in products {
            let insert = sqlx::query(
                r#"
                INSERT INTO products (id, name, description, price, stock)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .execute(&mut *tx);

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    // one transaction for the whole batch: dropping it rolls everything back
                    info!("🛑 insert_many abandoned, client went away");
                    return Err(RepositoryError::Canceled);
                }
                res = insert => {
                    res.map_err(|err| {
                        error!("❌ Failed to insert product {}: {err:?}", product.name);
                        RepositoryError::from(err)
                    })?;
                }
            }
        }

        let commit = tx.commit();

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("🛑 insert_many commit abandoned, client went away");
                return Err(RepositoryError::Canceled);
            }
            res = commit => {
                res.map_err(|err| {
                    error!("❌ Failed to commit {} products: {err:?}", products.len());
                    RepositoryError::from(err)
                })?;
            }
        }

        info!("✅ Inserted {} products", products.len());
        Ok(())
    }
}
