//! Aggregated statistics agree with the stored projects

use spoolwise_projects::{NewProject, ProjectStatus, ProjectUpdate};

use crate::common::{TestWorkshop, OTHER_OWNER, OWNER};

#[tokio::test]
async fn test_stats_are_consistent_with_projects() {
    let t = TestWorkshop::new().await.unwrap();
    let plan = [
        (ProjectStatus::Pending, 1.5, 2.0),
        (ProjectStatus::Pending, 0.75, 1.0),
        (ProjectStatus::InProgress, 3.25, 4.5),
        (ProjectStatus::Completed, 10.0, 12.0),
        (ProjectStatus::Completed, 2.5, 0.5),
    ];

    for (index, (status, total_cost, hours)) in plan.iter().enumerate() {
        let id = t
            .create_project(
                NewProject::new(OWNER, format!("Project {}", index))
                    .with_status(*status)
                    .with_print(10.0, *hours),
            )
            .await
            .unwrap();
        t.workshop
            .projects
            .update(id, ProjectUpdate::new().total_cost(*total_cost))
            .await
            .unwrap();
    }
    t.create_project(NewProject::new(OTHER_OWNER, "Not mine").with_print(1.0, 99.0))
        .await
        .unwrap();

    let stats = t.workshop.projects.get_stats(OWNER).await.unwrap();
    assert_eq!(stats.total_projects, 5);
    assert_eq!(stats.pending + stats.in_progress + stats.completed, 5);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completed, 2);

    let projects = t.workshop.projects.get_all(OWNER).await.unwrap();
    let spent: f64 = projects.iter().map(|d| d.project.total_cost).sum();
    let hours: f64 = projects.iter().map(|d| d.project.print_time_hours).sum();
    assert!((stats.total_spent - spent).abs() < 1e-9);
    assert!((stats.total_hours - hours).abs() < 1e-9);
    assert_eq!(stats.completion_rate(), Some(0.4));
}

#[tokio::test]
async fn test_stats_for_owner_without_projects() {
    let t = TestWorkshop::new().await.unwrap();
    t.create_project(NewProject::new(OTHER_OWNER, "Not mine"))
        .await
        .unwrap();

    let stats = t.workshop.stats.for_owner(OWNER).await.unwrap();
    assert_eq!(stats.total_projects, 0);
    assert_eq!(stats.total_spent, 0.0);
    assert_eq!(stats.completion_rate(), None);
}
