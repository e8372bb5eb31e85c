//! Transactional free functions for Catalog domain

use super::models::MODEL_COLUMNS;
use crate::domain::entities::{Model, NewModel};
use chrono::Utc;
use spoolwise_common::ModelId;
use sqlx::{Sqlite, Transaction};

/// Insert a model row within a transaction
pub async fn create_model_tx(
    tx: &mut Transaction<'_, Sqlite>,
    input: &NewModel,
    file_path: &str,
) -> Result<Model, sqlx::Error> {
    let query = format!(
        "INSERT INTO models (name, description, file_path, thumbnail_path, added_date) \
         VALUES (?, ?, ?, NULL, ?) \
         RETURNING {MODEL_COLUMNS}"
    );
    let row = sqlx::query_as::<_, Model>(&query)
        .bind(&input.name)
        .bind(&input.description)
        .bind(file_path)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;
    Ok(row)
}

/// Find a model within a transaction
pub async fn find_model_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: ModelId,
) -> Result<Option<Model>, sqlx::Error> {
    let query = format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = ?");
    let row = sqlx::query_as::<_, Model>(&query)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row)
}
