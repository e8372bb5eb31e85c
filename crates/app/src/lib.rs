//! Spoolwise application composition root
//!
//! Wires the domain services onto one database pool and the configured
//! pricing, and builds the per-owner workshop report.

use serde::Serialize;

use spoolwise_catalog::{AssetStore, ModelCatalog};
use spoolwise_common::{db, Config, DbPool, PricingDefaults, Result, UserId};
use spoolwise_costing::{CostCalculator, EnergyRates};
use spoolwise_inventory::{InventoryLedger, InventorySummary, MaterialStock, StockAlert};
use spoolwise_projects::{Project, ProjectDetail, ProjectLifecycle, ProjectStats, StatsAggregator};

/// Every engine component sharing one pool
#[derive(Clone)]
pub struct Workshop {
    pub inventory: InventoryLedger,
    pub catalog: ModelCatalog,
    pub projects: ProjectLifecycle,
    pub stats: StatsAggregator,
    pricing: PricingDefaults,
    low_stock_percent: f64,
}

/// Snapshot of an owner's workshop for report renderers
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopReport {
    pub owner_id: UserId,
    pub inventory: InventorySummary,
    pub stock_by_material: Vec<MaterialStock>,
    pub low_stock: Vec<StockAlert>,
    pub model_count: i64,
    pub stats: ProjectStats,
    pub completion_rate: Option<f64>,
    pub projects: Vec<ProjectDetail>,
}

impl Workshop {
    /// Open the configured database, run migrations and build the services
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = db::connect(config).await?;
        Ok(Self::from_pool(pool, config))
    }

    pub fn from_pool(pool: DbPool, config: &Config) -> Self {
        Self {
            inventory: InventoryLedger::new(pool.clone()),
            catalog: ModelCatalog::new(pool.clone(), AssetStore::new(&config.models_dir)),
            projects: ProjectLifecycle::new(pool.clone()),
            stats: StatsAggregator::new(pool),
            pricing: config.pricing,
            low_stock_percent: config.low_stock_percent,
        }
    }

    pub fn energy_rates(&self) -> EnergyRates {
        EnergyRates::new(self.pricing.power_watts, self.pricing.energy_cost_per_kwh)
    }

    /// Suggested sale price of a project at the configured margin
    pub fn sale_price(&self, project: &Project) -> f64 {
        CostCalculator::sale_price(project.total_cost, self.pricing.margin_multiplier)
    }

    pub async fn low_stock(&self) -> Result<Vec<StockAlert>> {
        self.inventory.low_stock(self.low_stock_percent).await
    }

    pub async fn report(&self, owner_id: UserId) -> Result<WorkshopReport> {
        let stats = self.stats.for_owner(owner_id).await?;
        let report = WorkshopReport {
            owner_id,
            inventory: self.inventory.summary().await?,
            stock_by_material: self.inventory.stock_by_material().await?,
            low_stock: self.low_stock().await?,
            model_count: self.catalog.count().await?,
            completion_rate: stats.completion_rate(),
            stats,
            projects: self.projects.get_all(owner_id).await?,
        };

        tracing::debug!(
            owner_id = %owner_id,
            projects = report.projects.len(),
            low_stock = report.low_stock.len(),
            "Built workshop report"
        );
        Ok(report)
    }
}
