//! Transactional free functions for Projects domain

use super::projects::PROJECT_COLUMNS;
use crate::domain::entities::{NewProject, Project, ProjectStatus, ProjectUpdate};
use chrono::{DateTime, Utc};
use spoolwise_common::ProjectId;
use spoolwise_costing::CostBreakdown;
use sqlx::{Sqlite, Transaction};

/// Create a project within a transaction. Costs start at zero.
pub async fn create_project_tx(
    tx: &mut Transaction<'_, Sqlite>,
    input: &NewProject,
) -> Result<Project, sqlx::Error> {
    let query = format!(
        "INSERT INTO projects (user_id, name, description, model_id, filament_id, \
                               weight_grams, print_time_hours, status, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING {PROJECT_COLUMNS}"
    );
    let row = sqlx::query_as::<_, Project>(&query)
        .bind(input.owner_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.model_id)
        .bind(input.filament_id)
        .bind(input.weight_grams)
        .bind(input.print_time_hours)
        .bind(input.status)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await?;
    Ok(row)
}

/// Find a project within a transaction
pub async fn find_project_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: ProjectId,
) -> Result<Option<Project>, sqlx::Error> {
    let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?");
    let row = sqlx::query_as::<_, Project>(&query)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row)
}

/// Apply the fields set in `changes`, leaving the rest untouched.
///
/// Returns `false` when no such project exists.
pub async fn update_project_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: ProjectId,
    changes: &ProjectUpdate,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE projects SET
            name = COALESCE(?, name),
            description = COALESCE(?, description),
            status = COALESCE(?, status),
            weight_grams = COALESCE(?, weight_grams),
            print_time_hours = COALESCE(?, print_time_hours),
            total_cost = COALESCE(?, total_cost),
            filament_cost = COALESCE(?, filament_cost),
            energy_cost = COALESCE(?, energy_cost),
            model_id = CASE WHEN ? THEN ? ELSE model_id END,
            filament_id = CASE WHEN ? THEN ? ELSE filament_id END
        WHERE id = ?
        "#,
    )
    .bind(changes.name.as_deref())
    .bind(changes.description.as_deref())
    .bind(changes.status)
    .bind(changes.weight_grams)
    .bind(changes.print_time_hours)
    .bind(changes.total_cost)
    .bind(changes.filament_cost)
    .bind(changes.energy_cost)
    .bind(changes.model_id.is_some())
    .bind(changes.model_id.flatten())
    .bind(changes.filament_id.is_some())
    .bind(changes.filament_id.flatten())
    .bind(id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Store a cost breakdown on a project within a transaction
pub async fn set_costs_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: ProjectId,
    costs: &CostBreakdown,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE projects SET filament_cost = ?, energy_cost = ?, total_cost = ? WHERE id = ?",
    )
    .bind(costs.filament_cost)
    .bind(costs.energy_cost)
    .bind(costs.total_cost)
    .bind(id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Set the status and, when given, the completion time
pub async fn set_status_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: ProjectId,
    status: ProjectStatus,
    completed_at: Option<DateTime<Utc>>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE projects SET status = ?, completed_at = COALESCE(?, completed_at) WHERE id = ?",
    )
    .bind(status)
    .bind(completed_at)
    .bind(id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a project within a transaction
pub async fn delete_project_tx(
    tx: &mut Transaction<'_, Sqlite>,
    id: ProjectId,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(result.rows_affected() > 0)
}
