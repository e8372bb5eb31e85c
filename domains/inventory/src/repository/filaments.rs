//! Filament repository

use crate::domain::entities::{Filament, MaterialStock, NewFilament};
use spoolwise_common::{DbPool, FilamentId, Result};

/// Column list shared by every filament query, aliased to the entity fields.
pub const FILAMENT_COLUMNS: &str = "id, brand, material_type, color, \
    weight_initial AS weight_initial_g, weight_current AS weight_current_g, \
    price AS price_per_kg, diameter AS diameter_mm, density AS density_g_cm3, \
    purchase_date, user_id AS owner_id";

#[derive(Clone)]
pub struct FilamentRepository {
    pool: DbPool,
}

impl FilamentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find filament by ID
    pub async fn find(&self, id: FilamentId) -> Result<Option<Filament>> {
        let query = format!("SELECT {FILAMENT_COLUMNS} FROM filaments WHERE id = ?");
        let row = sqlx::query_as::<_, Filament>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// All spools, most recently added first
    pub async fn list_all(&self) -> Result<Vec<Filament>> {
        let query = format!("SELECT {FILAMENT_COLUMNS} FROM filaments ORDER BY id DESC");
        let rows = sqlx::query_as::<_, Filament>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Remaining grams per material, heaviest first
    pub async fn stock_by_material(&self) -> Result<Vec<MaterialStock>> {
        let rows = sqlx::query_as::<_, MaterialStock>(
            r#"
            SELECT material_type,
                   COUNT(*) AS spool_count,
                   CAST(COALESCE(SUM(weight_current), 0) AS REAL) AS total_remaining_g
            FROM filaments
            GROUP BY material_type
            ORDER BY total_remaining_g DESC, material_type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a spool; its current weight starts at the initial weight
    pub async fn create(&self, input: &NewFilament) -> Result<Filament> {
        let query = format!(
            "INSERT INTO filaments (brand, material_type, color, weight_initial, weight_current, \
                                    price, diameter, density, purchase_date, user_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {FILAMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Filament>(&query)
            .bind(&input.brand)
            .bind(input.material_type)
            .bind(&input.color)
            .bind(input.weight_initial_g)
            .bind(input.weight_initial_g)
            .bind(input.price_per_kg)
            .bind(input.diameter_mm)
            .bind(input.density_g_cm3)
            .bind(input.purchase_date)
            .bind(input.owner_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Delete a filament by ID. Projects referencing it are left untouched.
    pub async fn delete(&self, id: FilamentId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM filaments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
