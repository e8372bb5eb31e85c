//! Repository implementations for Inventory domain

pub mod filaments;
pub mod transactions;

use spoolwise_common::DbPool;
use sqlx::{Sqlite, Transaction};

pub use filaments::{FilamentRepository, FILAMENT_COLUMNS};
pub use transactions::{deduct_weight_tx, find_filament_tx, set_weight_tx};

/// Combined repository access for the Inventory domain
#[derive(Clone)]
pub struct InventoryRepositories {
    pool: DbPool,
    pub filaments: FilamentRepository,
}

impl InventoryRepositories {
    pub fn new(pool: DbPool) -> Self {
        Self {
            filaments: FilamentRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }
}
