//! Per-owner project statistics

use serde::Serialize;

/// Counts by status plus spend and print-time totals for one owner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, sqlx::FromRow)]
pub struct ProjectStats {
    pub total_projects: i64,
    pub completed: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub total_spent: f64,
    pub total_hours: f64,
}

impl ProjectStats {
    /// Share of projects completed, in `0.0..=1.0`
    pub fn completion_rate(&self) -> Option<f64> {
        if self.total_projects == 0 {
            return None;
        }
        Some(self.completed as f64 / self.total_projects as f64)
    }

    pub fn average_cost(&self) -> Option<f64> {
        if self.total_projects == 0 {
            return None;
        }
        Some(self.total_spent / self.total_projects as f64)
    }
}
