//! Transactional free functions for Inventory domain
//!
//! Other domains call these inside their own transactions, e.g. to validate a
//! project's filament reference or to consume material.

use super::filaments::FILAMENT_COLUMNS;
use crate::domain::entities::Filament;
use spoolwise_common::FilamentId;
use sqlx::{Sqlite, Transaction};

/// Find a filament within a transaction
pub async fn find_filament_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: FilamentId,
) -> Result<Option<Filament>, sqlx::Error> {
    let query = format!("SELECT {FILAMENT_COLUMNS} FROM filaments WHERE id = ?");
    let row = sqlx::query_as::<_, Filament>(&query)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row)
}

/// Overwrite the remaining weight of a spool within a transaction.
///
/// Returns `false` when no such filament exists.
pub async fn set_weight_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: FilamentId,
    weight_g: f64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE filaments SET weight_current = ? WHERE id = ?")
        .bind(weight_g)
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Subtract `grams` from a spool in a single statement, flooring at zero.
///
/// Returns the new remaining weight, or `None` when no such filament exists.
pub async fn deduct_weight_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: FilamentId,
    grams: f64,
) -> Result<Option<f64>, sqlx::Error> {
    let remaining = sqlx::query_scalar::<_, f64>(
        r#"
        UPDATE filaments
        SET weight_current = MAX(weight_current - ?, 0.0)
        WHERE id = ?
        RETURNING weight_current
        "#,
    )
    .bind(grams)
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(remaining)
}
