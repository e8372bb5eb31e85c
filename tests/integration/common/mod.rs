//! Common test utilities and fixtures for integration tests
//!
//! - In-memory database with migrations applied
//! - Temporary managed asset directory
//! - Filament, model and project fixtures

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tempfile::TempDir;

use spoolwise_app::Workshop;
use spoolwise_common::{db, Config, DbPool, FilamentId, ModelId, ProjectId, UserId};
use spoolwise_inventory::{MaterialType, NewFilament};
use spoolwise_projects::NewProject;

pub const OWNER: UserId = UserId(1);
pub const OTHER_OWNER: UserId = UserId(2);

/// Workshop over a private database and asset directory
pub struct TestWorkshop {
    pub workshop: Workshop,
    pub pool: DbPool,
    pub config: Config,
    dir: TempDir,
}

impl TestWorkshop {
    pub async fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            models_dir: dir.path().join("models"),
            ..Config::default()
        };
        let pool = db::connect_in_memory().await?;
        let workshop = Workshop::from_pool(pool.clone(), &config);

        Ok(Self {
            workshop,
            pool,
            config,
            dir,
        })
    }

    /// Add a PLA spool and return its id
    pub async fn add_filament(&self, weight_initial_g: f64, price_per_kg: f64) -> Result<FilamentId> {
        let outcome = self
            .workshop
            .inventory
            .add(
                NewFilament::new("Esun", MaterialType::Pla, weight_initial_g, price_per_kg)
                    .with_color("Black"),
            )
            .await?;
        outcome
            .into_value()
            .ok_or_else(|| anyhow!("filament was not added"))
    }

    /// Write a source file outside managed storage and import it
    pub async fn add_model(&self, name: &str) -> Result<ModelId> {
        let source = self.source_file(&format!("{name}.stl"), b"solid model")?;
        let outcome = self.workshop.catalog.add(&source, name, "").await?;
        outcome
            .into_value()
            .ok_or_else(|| anyhow!("model was not added"))
    }

    pub async fn create_project(&self, input: NewProject) -> Result<ProjectId> {
        let outcome = self.workshop.projects.create(input).await?;
        if !outcome.success {
            return Err(anyhow!("project was not created: {}", outcome.message));
        }
        outcome
            .into_value()
            .ok_or_else(|| anyhow!("project id missing"))
    }

    pub fn source_file(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let sources = self.dir.path().join("sources");
        std::fs::create_dir_all(&sources)?;
        let path = sources.join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
