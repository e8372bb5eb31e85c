//! Project repository

use crate::domain::entities::ProjectDetail;
use crate::domain::stats::ProjectStats;
use spoolwise_common::{DbPool, ProjectId, Result, UserId};

/// Column list shared by every single-table project query
pub const PROJECT_COLUMNS: &str = "id, user_id AS owner_id, name, description, model_id, \
    filament_id, weight_grams, print_time_hours, status, filament_cost, energy_cost, \
    total_cost, created_at, completed_at";

/// Projects left-joined with their model and filament, so dangling
/// references still produce a row.
const DETAIL_SELECT: &str = r#"
    SELECT p.id AS id, p.user_id AS owner_id, p.name AS name, p.description AS description,
           p.model_id AS model_id, p.filament_id AS filament_id,
           p.weight_grams AS weight_grams, p.print_time_hours AS print_time_hours,
           p.status AS status, p.filament_cost AS filament_cost,
           p.energy_cost AS energy_cost, p.total_cost AS total_cost,
           p.created_at AS created_at, p.completed_at AS completed_at,
           m.name AS model_name, f.brand AS filament_brand, f.material_type AS filament_material
    FROM projects p
    LEFT JOIN models m ON p.model_id = m.id
    LEFT JOIN filaments f ON p.filament_id = f.id
"#;

#[derive(Clone)]
pub struct ProjectRepository {
    pool: DbPool,
}

impl ProjectRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find project by ID along with its joined display fields
    pub async fn find_detail(&self, id: ProjectId) -> Result<Option<ProjectDetail>> {
        let query = format!("{DETAIL_SELECT} WHERE p.id = ?");
        let row = sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// An owner's projects, newest first
    pub async fn list_details_for_owner(&self, owner_id: UserId) -> Result<Vec<ProjectDetail>> {
        let query =
            format!("{DETAIL_SELECT} WHERE p.user_id = ? ORDER BY p.created_at DESC, p.id DESC");
        let rows = sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Counts by status and totals over an owner's projects in one query
    pub async fn stats_for_owner(&self, owner_id: UserId) -> Result<ProjectStats> {
        let stats = sqlx::query_as::<_, ProjectStats>(
            r#"
            SELECT
                CAST(COUNT(*) AS INTEGER) AS total_projects,
                CAST(COALESCE(SUM(CASE WHEN status = 'Completed' THEN 1 ELSE 0 END), 0) AS INTEGER) AS completed,
                CAST(COALESCE(SUM(CASE WHEN status = 'Pending' THEN 1 ELSE 0 END), 0) AS INTEGER) AS pending,
                CAST(COALESCE(SUM(CASE WHEN status = 'InProgress' THEN 1 ELSE 0 END), 0) AS INTEGER) AS in_progress,
                CAST(COALESCE(SUM(total_cost), 0) AS REAL) AS total_spent,
                CAST(COALESCE(SUM(print_time_hours), 0) AS REAL) AS total_hours
            FROM projects
            WHERE user_id = ?
            "#,
        )
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }
}
