//! Repository implementations for Projects domain

pub mod projects;
pub mod transactions;

use spoolwise_common::DbPool;
use sqlx::{Sqlite, Transaction};

pub use projects::{ProjectRepository, PROJECT_COLUMNS};
pub use transactions::{
    create_project_tx, delete_project_tx, find_project_tx, set_costs_tx, set_status_tx,
    update_project_tx,
};

/// Combined repository access for the Projects domain
#[derive(Clone)]
pub struct ProjectsRepositories {
    pool: DbPool,
    pub projects: ProjectRepository,
}

impl ProjectsRepositories {
    pub fn new(pool: DbPool) -> Self {
        Self {
            projects: ProjectRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }
}
