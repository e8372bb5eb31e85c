//! Statistics over an owner's projects

use spoolwise_common::{DbPool, Result, UserId};

use crate::domain::stats::ProjectStats;
use crate::repository::ProjectRepository;

#[derive(Clone)]
pub struct StatsAggregator {
    projects: ProjectRepository,
}

impl StatsAggregator {
    pub fn new(pool: DbPool) -> Self {
        Self {
            projects: ProjectRepository::new(pool),
        }
    }

    /// Counts by status, total spend and total print hours. An owner with
    /// no projects gets all zeros.
    pub async fn for_owner(&self, owner_id: UserId) -> Result<ProjectStats> {
        let stats = self.projects.stats_for_owner(owner_id).await?;
        tracing::debug!(
            owner_id = %owner_id,
            total_projects = stats.total_projects,
            total_spent = stats.total_spent,
            "Computed project stats"
        );
        Ok(stats)
    }
}
