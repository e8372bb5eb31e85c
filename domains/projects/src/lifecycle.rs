//! Project lifecycle: creation, edits, costing, completion
//!
//! Each mutation runs in its own transaction. Model and filament references
//! are checked when they are written; references that dangle later are
//! tolerated on read.

use validator::Validate;

use spoolwise_catalog::find_model_tx;
use spoolwise_common::validation::ensure_non_negative;
use spoolwise_common::{DbPool, Error, FilamentId, ModelId, Outcome, ProjectId, Result, UserId};
use spoolwise_costing::{CostBreakdown, EnergyRates};
use spoolwise_inventory::{deduct_weight_tx, find_filament_tx};
use sqlx::{Sqlite, Transaction};

use crate::aggregator::StatsAggregator;
use crate::domain::entities::{NewProject, ProjectDetail, ProjectUpdate};
use crate::domain::state::{ProjectEvent, ProjectStateMachine};
use crate::domain::stats::ProjectStats;
use crate::repository::{
    create_project_tx, delete_project_tx, find_project_tx, set_costs_tx, set_status_tx,
    update_project_tx, ProjectsRepositories,
};

#[derive(Clone)]
pub struct ProjectLifecycle {
    repos: ProjectsRepositories,
    stats: StatsAggregator,
}

impl ProjectLifecycle {
    pub fn new(pool: DbPool) -> Self {
        Self {
            stats: StatsAggregator::new(pool.clone()),
            repos: ProjectsRepositories::new(pool),
        }
    }

    /// Create a project. Costs start at zero until applied.
    pub async fn create(&self, input: NewProject) -> Result<Outcome<ProjectId>> {
        input.validate()?;
        Outcome::capture(self.create_in_tx(&input).await, "Project created")
    }

    async fn create_in_tx(&self, input: &NewProject) -> Result<ProjectId> {
        let mut tx = self.repos.begin().await?;
        ensure_references_tx(&mut tx, input.model_id, input.filament_id).await?;
        let project = create_project_tx(&mut tx, input).await?;
        tx.commit().await?;

        tracing::info!(
            project_id = %project.id,
            owner_id = %project.owner_id,
            status = %project.status,
            "Project created"
        );
        Ok(project.id)
    }

    /// An owner's projects with model and filament display fields, newest first
    pub async fn get_all(&self, owner_id: UserId) -> Result<Vec<ProjectDetail>> {
        let projects = self.repos.projects.list_details_for_owner(owner_id).await?;
        tracing::debug!(owner_id = %owner_id, count = projects.len(), "Listed projects");
        Ok(projects)
    }

    pub async fn get_by_id(&self, id: ProjectId) -> Result<Option<ProjectDetail>> {
        self.repos.projects.find_detail(id).await
    }

    /// Apply a partial update. A status change never touches `completed_at`.
    pub async fn update(&self, id: ProjectId, changes: ProjectUpdate) -> Result<Outcome> {
        changes.validate()?;
        if changes.is_empty() {
            return Ok(Outcome::failed("Nothing to update"));
        }
        Outcome::capture(self.update_in_tx(id, &changes).await, "Project updated")
    }

    async fn update_in_tx(&self, id: ProjectId, changes: &ProjectUpdate) -> Result<()> {
        let mut tx = self.repos.begin().await?;

        let project = find_project_tx(&mut tx, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Project {}", id)))?;

        ensure_references_tx(
            &mut tx,
            changes.model_id.flatten(),
            changes.filament_id.flatten(),
        )
        .await?;

        update_project_tx(&mut tx, id, changes).await?;
        tx.commit().await?;

        if let Some(status) = changes.status {
            let transition =
                ProjectStateMachine::transition(project.status, ProjectEvent::ChangeStatus(status));
            tracing::info!(
                project_id = %id,
                from = %transition.from,
                to = %transition.to,
                "Project status changed"
            );
        }
        tracing::info!(project_id = %id, "Project updated");
        Ok(())
    }

    pub async fn delete(&self, id: ProjectId) -> Result<Outcome> {
        Outcome::capture(self.delete_in_tx(id).await, "Project deleted")
    }

    async fn delete_in_tx(&self, id: ProjectId) -> Result<()> {
        let mut tx = self.repos.begin().await?;
        if !delete_project_tx(&mut tx, id).await? {
            return Err(Error::NotFound(format!("Project {}", id)));
        }
        tx.commit().await?;

        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }

    /// Filament, energy and total cost, each rounded to cents
    pub fn calculate_costs(
        weight_g: f64,
        price_per_kg: f64,
        print_time_h: f64,
        rates: EnergyRates,
    ) -> CostBreakdown {
        CostBreakdown::compute(weight_g, price_per_kg, print_time_h, rates).rounded()
    }

    /// Compute the project's costs from its weight, print time and attached
    /// filament's price, and store them.
    ///
    /// Without an existing filament the filament cost is zero.
    pub async fn apply_costs(
        &self,
        id: ProjectId,
        rates: EnergyRates,
    ) -> Result<Outcome<CostBreakdown>> {
        ensure_non_negative("power_watts", rates.power_watts)?;
        ensure_non_negative("cost_per_kwh", rates.cost_per_kwh)?;
        Outcome::capture(self.apply_costs_in_tx(id, rates).await, "Project costs updated")
    }

    async fn apply_costs_in_tx(&self, id: ProjectId, rates: EnergyRates) -> Result<CostBreakdown> {
        let mut tx = self.repos.begin().await?;

        let project = find_project_tx(&mut tx, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Project {}", id)))?;

        let price_per_kg = match project.filament_id {
            Some(filament_id) => find_filament_tx(&mut tx, filament_id)
                .await?
                .map(|filament| filament.price_per_kg)
                .unwrap_or(0.0),
            None => 0.0,
        };

        let costs = Self::calculate_costs(
            project.weight_grams,
            price_per_kg,
            project.print_time_hours,
            rates,
        );
        set_costs_tx(&mut tx, id, &costs).await?;
        tx.commit().await?;

        tracing::info!(
            project_id = %id,
            filament_cost = costs.filament_cost,
            energy_cost = costs.energy_cost,
            total_cost = costs.total_cost,
            "Project costs updated"
        );
        Ok(costs)
    }

    /// Deduct the project's weight from its filament, flooring the spool at
    /// zero. The outcome carries the spool's remaining weight.
    pub async fn consume_filament(&self, id: ProjectId) -> Result<Outcome<f64>> {
        Outcome::capture(self.consume_in_tx(id).await, "Filament consumed")
    }

    async fn consume_in_tx(&self, id: ProjectId) -> Result<f64> {
        let mut tx = self.repos.begin().await?;

        let project = find_project_tx(&mut tx, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Project {}", id)))?;
        let filament_id = project
            .filament_id
            .ok_or_else(|| Error::NotFound(format!("filament for project {}", id)))?;

        let remaining = deduct_weight_tx(&mut tx, filament_id, project.weight_grams)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Filament {}", filament_id)))?;
        tx.commit().await?;

        tracing::info!(
            project_id = %id,
            filament_id = %filament_id,
            grams = project.weight_grams,
            remaining_g = remaining,
            "Filament consumed"
        );
        Ok(remaining)
    }

    /// Set the status to Completed and stamp `completed_at`, whatever the
    /// current status.
    pub async fn mark_completed(&self, id: ProjectId) -> Result<Outcome> {
        Outcome::capture(
            self.mark_completed_in_tx(id).await,
            "Project marked as completed",
        )
    }

    async fn mark_completed_in_tx(&self, id: ProjectId) -> Result<()> {
        let mut tx = self.repos.begin().await?;

        let project = find_project_tx(&mut tx, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Project {}", id)))?;

        let transition = ProjectStateMachine::transition(project.status, ProjectEvent::MarkCompleted);
        let completed_at = transition.stamps_completed_at.then(chrono::Utc::now);
        set_status_tx(&mut tx, id, transition.to, completed_at).await?;
        tx.commit().await?;

        tracing::info!(
            project_id = %id,
            from = %transition.from,
            to = %transition.to,
            "Project marked as completed"
        );
        Ok(())
    }

    pub async fn get_stats(&self, owner_id: UserId) -> Result<ProjectStats> {
        self.stats.for_owner(owner_id).await
    }
}

/// Reject references to models or filaments that do not exist right now
async fn ensure_references_tx(
    tx: &mut Transaction<'_, Sqlite>,
    model_id: Option<ModelId>,
    filament_id: Option<FilamentId>,
) -> Result<()> {
    if let Some(model_id) = model_id {
        if find_model_tx(tx, model_id).await?.is_none() {
            return Err(Error::NotFound(format!("Model {}", model_id)));
        }
    }
    if let Some(filament_id) = filament_id {
        if find_filament_tx(tx, filament_id).await?.is_none() {
            return Err(Error::NotFound(format!("Filament {}", filament_id)));
        }
    }
    Ok(())
}
