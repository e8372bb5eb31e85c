//! Model repository

use crate::domain::entities::Model;
use spoolwise_common::{DbPool, ModelId, Result};

pub const MODEL_COLUMNS: &str = "id, name, description, file_path, thumbnail_path, added_date";

#[derive(Clone)]
pub struct ModelRepository {
    pool: DbPool,
}

impl ModelRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find model by ID
    pub async fn find(&self, id: ModelId) -> Result<Option<Model>> {
        let query = format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = ?");
        let row = sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// All models, newest first
    pub async fn list_all(&self) -> Result<Vec<Model>> {
        let query =
            format!("SELECT {MODEL_COLUMNS} FROM models ORDER BY added_date DESC, id DESC");
        let rows = sqlx::query_as::<_, Model>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Delete a model row by ID
    pub async fn delete(&self, id: ModelId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM models WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM models")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
