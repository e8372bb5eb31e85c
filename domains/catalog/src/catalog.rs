//! Model catalog: model metadata plus the managed copy of each asset file

use std::path::Path;

use validator::Validate;

use spoolwise_common::{DbPool, Error, ModelId, Outcome, Result};

use crate::domain::entities::{Model, NewModel};
use crate::repository::{create_model_tx, CatalogRepositories};
use crate::storage::AssetStore;

#[derive(Clone)]
pub struct ModelCatalog {
    repos: CatalogRepositories,
    store: AssetStore,
}

impl ModelCatalog {
    pub fn new(pool: DbPool, store: AssetStore) -> Self {
        Self {
            repos: CatalogRepositories::new(pool),
            store,
        }
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    /// Import a model file and register it.
    ///
    /// The file is copied under a staging name first and only replaces the
    /// managed file once the row has been committed.
    pub async fn add(
        &self,
        source_file_path: impl AsRef<Path>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Outcome<ModelId>> {
        let input = NewModel::new(name, description);
        input.validate()?;

        Outcome::capture(
            self.import_model(source_file_path.as_ref(), &input).await,
            "Model added",
        )
    }

    async fn import_model(&self, source: &Path, input: &NewModel) -> Result<ModelId> {
        let staged = self.store.stage(source).await?;

        let model = match self.insert_model(input, staged.destination()).await {
            Ok(model) => model,
            Err(e) => {
                staged.discard().await;
                return Err(e);
            }
        };

        if let Err(e) = staged.persist().await {
            // No row may point at a file that never arrived
            if let Err(cleanup) = self.repos.models.delete(model.id).await {
                tracing::warn!(model_id = %model.id, error = %cleanup, "Failed to remove model row");
            }
            return Err(e);
        }

        tracing::info!(
            model_id = %model.id,
            name = %model.name,
            file_path = %model.file_path,
            "Model added"
        );
        Ok(model.id)
    }

    async fn insert_model(&self, input: &NewModel, file_path: &Path) -> Result<Model> {
        let mut tx = self.repos.begin().await?;
        let model = create_model_tx(&mut tx, input, &file_path.to_string_lossy()).await?;
        tx.commit().await?;
        Ok(model)
    }

    /// All models, newest first
    pub async fn list_all(&self) -> Result<Vec<Model>> {
        let models = self.repos.models.list_all().await?;
        tracing::debug!(count = models.len(), "Listed models");
        Ok(models)
    }

    pub async fn get_by_id(&self, id: ModelId) -> Result<Option<Model>> {
        self.repos.models.find(id).await
    }

    pub async fn count(&self) -> Result<i64> {
        self.repos.models.count().await
    }

    /// Remove the model's file (best effort) and then its row
    pub async fn delete(&self, id: ModelId) -> Result<Outcome> {
        Outcome::capture(self.delete_model(id).await, "Model deleted")
    }

    async fn delete_model(&self, id: ModelId) -> Result<()> {
        let model = self
            .repos
            .models
            .find(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Model {}", id)))?;

        let file_removed = self.store.remove(model.file_path()).await;
        self.repos.models.delete(id).await?;

        tracing::info!(model_id = %id, file_removed, "Model deleted");
        Ok(())
    }
}
