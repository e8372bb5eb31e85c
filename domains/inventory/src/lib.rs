//! Inventory domain: filament spools, stock levels, low-stock alerts

pub mod domain;
pub mod ledger;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use ledger::InventoryLedger;
pub use repository::{
    deduct_weight_tx, find_filament_tx, set_weight_tx, FilamentRepository, InventoryRepositories,
};
