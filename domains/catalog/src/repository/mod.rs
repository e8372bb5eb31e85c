//! Repository implementations for Catalog domain

pub mod models;
pub mod transactions;

use spoolwise_common::DbPool;
use sqlx::{Sqlite, Transaction};

pub use models::{ModelRepository, MODEL_COLUMNS};
pub use transactions::{create_model_tx, find_model_tx};

/// Combined repository access for the Catalog domain
#[derive(Clone)]
pub struct CatalogRepositories {
    pool: DbPool,
    pub models: ModelRepository,
}

impl CatalogRepositories {
    pub fn new(pool: DbPool) -> Self {
        Self {
            models: ModelRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }
}
