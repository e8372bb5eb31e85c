//! Catalog domain: 3D models and their managed asset files

pub mod catalog;
pub mod domain;
pub mod repository;
pub mod storage;

// Re-export domain types at the crate root for convenience
pub use catalog::ModelCatalog;
pub use domain::entities::*;
pub use repository::{create_model_tx, find_model_tx, CatalogRepositories, ModelRepository};
pub use storage::{AssetStore, StagedAsset};
