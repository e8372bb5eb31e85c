//! Project status lifecycle
//!
//! Pending is the initial state and Completed the terminal label. Any status
//! can be set from any other through an explicit status change; only the
//! `MarkCompleted` event stamps the completion time, and it does so without
//! looking at the prior state.

use crate::domain::entities::ProjectStatus;

/// Events that move a project between statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectEvent {
    /// Explicit status change from an update
    ChangeStatus(ProjectStatus),
    /// Finish the project and record when
    MarkCompleted,
}

impl std::fmt::Display for ProjectEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChangeStatus(status) => write!(f, "change_status({})", status),
            Self::MarkCompleted => write!(f, "mark_completed"),
        }
    }
}

/// Result of applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ProjectStatus,
    pub to: ProjectStatus,
    /// Whether `completed_at` must be set to the current time
    pub stamps_completed_at: bool,
}

/// Project state machine
pub struct ProjectStateMachine;

impl ProjectStateMachine {
    /// Apply an event. Every event is accepted from every status.
    pub fn transition(current: ProjectStatus, event: ProjectEvent) -> Transition {
        match event {
            ProjectEvent::ChangeStatus(next) => Transition {
                from: current,
                to: next,
                stamps_completed_at: false,
            },
            ProjectEvent::MarkCompleted => Transition {
                from: current,
                to: ProjectStatus::Completed,
                stamps_completed_at: true,
            },
        }
    }

    /// Statuses reachable from `current` through an explicit change
    pub fn valid_transitions(current: ProjectStatus) -> Vec<ProjectStatus> {
        ProjectStatus::ALL
            .into_iter()
            .filter(|status| *status != current)
            .collect()
    }
}
