//! Inventory ledger: the only writer of filament stock levels

use validator::Validate;

use spoolwise_common::validation::ensure_non_negative;
use spoolwise_common::{DbPool, Error, FilamentId, Outcome, Result};

use crate::domain::entities::{Filament, InventorySummary, MaterialStock, NewFilament, StockAlert};
use crate::repository::{deduct_weight_tx, find_filament_tx, set_weight_tx, InventoryRepositories};

/// Default low-stock threshold, as a percentage of the initial weight
pub const DEFAULT_LOW_STOCK_PERCENT: f64 = 20.0;

#[derive(Clone)]
pub struct InventoryLedger {
    repos: InventoryRepositories,
}

impl InventoryLedger {
    pub fn new(pool: DbPool) -> Self {
        Self {
            repos: InventoryRepositories::new(pool),
        }
    }

    /// Register a new spool
    pub async fn add(&self, input: NewFilament) -> Result<Outcome<FilamentId>> {
        input.validate()?;

        let created = self.repos.filaments.create(&input).await.map(|filament| {
            tracing::info!(
                filament_id = %filament.id,
                brand = %filament.brand,
                material = %filament.material_type,
                weight_g = filament.weight_initial_g,
                "Filament added"
            );
            filament.id
        });

        Outcome::capture(created, "Filament added")
    }

    /// All spools, most recently added first
    pub async fn list_all(&self) -> Result<Vec<Filament>> {
        let filaments = self.repos.filaments.list_all().await?;
        tracing::debug!(count = filaments.len(), "Listed filaments");
        Ok(filaments)
    }

    pub async fn get_by_id(&self, id: FilamentId) -> Result<Option<Filament>> {
        self.repos.filaments.find(id).await
    }

    /// Overwrite the remaining weight of a spool.
    ///
    /// The new weight must lie within `0..=weight_initial_g`.
    pub async fn update_weight(&self, id: FilamentId, new_weight_g: f64) -> Result<Outcome> {
        ensure_non_negative("weight", new_weight_g)?;
        Outcome::capture(
            self.update_weight_in_tx(id, new_weight_g).await,
            "Filament weight updated",
        )
    }

    async fn update_weight_in_tx(&self, id: FilamentId, new_weight_g: f64) -> Result<()> {
        let mut tx = self.repos.begin().await?;

        let filament = find_filament_tx(&mut tx, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Filament {}", id)))?;

        if new_weight_g > filament.weight_initial_g {
            return Err(Error::Validation(format!(
                "weight {} g exceeds the initial spool weight of {} g",
                new_weight_g, filament.weight_initial_g
            )));
        }

        set_weight_tx(&mut tx, id, new_weight_g).await?;
        tx.commit().await?;

        tracing::info!(filament_id = %id, weight_g = new_weight_g, "Filament weight updated");
        Ok(())
    }

    /// Consume `grams` from a spool, flooring the remaining weight at zero.
    ///
    /// The outcome carries the remaining weight.
    pub async fn deduct(&self, id: FilamentId, grams: f64) -> Result<Outcome<f64>> {
        ensure_non_negative("grams", grams)?;
        Outcome::capture(self.deduct_in_tx(id, grams).await, "Filament stock deducted")
    }

    async fn deduct_in_tx(&self, id: FilamentId, grams: f64) -> Result<f64> {
        let mut tx = self.repos.begin().await?;
        let remaining = deduct_weight_tx(&mut tx, id, grams)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Filament {}", id)))?;
        tx.commit().await?;

        tracing::info!(filament_id = %id, grams, remaining_g = remaining, "Filament stock deducted");
        Ok(remaining)
    }

    /// Remove a spool regardless of the projects referencing it
    pub async fn delete(&self, id: FilamentId) -> Result<Outcome> {
        let deleted = match self.repos.filaments.delete(id).await {
            Ok(true) => {
                tracing::info!(filament_id = %id, "Filament deleted");
                Ok(())
            }
            Ok(false) => Err(Error::NotFound(format!("Filament {}", id))),
            Err(e) => Err(e),
        };
        Outcome::capture(deleted, "Filament deleted")
    }

    /// Spools whose remaining share is below `threshold_percent`, most
    /// depleted first
    pub async fn low_stock(&self, threshold_percent: f64) -> Result<Vec<StockAlert>> {
        let mut alerts: Vec<StockAlert> = self
            .repos
            .filaments
            .list_all()
            .await?
            .iter()
            .filter_map(|filament| StockAlert::classify(filament, threshold_percent))
            .collect();

        alerts.sort_by(|a, b| a.remaining_percent.total_cmp(&b.remaining_percent));

        if !alerts.is_empty() {
            tracing::debug!(count = alerts.len(), threshold_percent, "Low stock spools");
        }
        Ok(alerts)
    }

    /// Spool count, remaining grams and value of the remaining material
    pub async fn summary(&self) -> Result<InventorySummary> {
        let filaments = self.repos.filaments.list_all().await?;
        Ok(InventorySummary::from_filaments(&filaments))
    }

    /// Remaining grams grouped by material, heaviest first
    pub async fn stock_by_material(&self) -> Result<Vec<MaterialStock>> {
        let stock = self.repos.filaments.stock_by_material().await?;
        tracing::debug!(materials = stock.len(), "Computed stock by material");
        Ok(stock)
    }
}
