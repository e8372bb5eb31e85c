//! Projects domain: print projects, status lifecycle, cost application, statistics

pub mod aggregator;
pub mod domain;
pub mod lifecycle;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use aggregator::StatsAggregator;
pub use domain::entities::*;
pub use domain::state::{ProjectEvent, ProjectStateMachine, Transition};
pub use domain::stats::ProjectStats;
pub use lifecycle::ProjectLifecycle;
pub use repository::{ProjectRepository, ProjectsRepositories};
