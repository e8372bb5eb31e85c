//! Project status changes and filament consumption

use spoolwise_projects::{NewProject, ProjectStatus, ProjectUpdate};

use crate::common::{TestWorkshop, OTHER_OWNER, OWNER};

#[tokio::test]
async fn test_create_then_read_round_trip() {
    let t = TestWorkshop::new().await.unwrap();
    let id = t
        .create_project(
            NewProject::new(OWNER, "Planter")
                .with_description("Self-watering")
                .with_print(120.0, 6.5),
        )
        .await
        .unwrap();

    let detail = t.workshop.projects.get_by_id(id).await.unwrap().unwrap();
    let project = detail.project;
    assert_eq!(project.owner_id, OWNER);
    assert_eq!(project.name, "Planter");
    assert_eq!(project.description, "Self-watering");
    assert_eq!(project.weight_grams, 120.0);
    assert_eq!(project.print_time_hours, 6.5);
    assert_eq!(project.status, ProjectStatus::Pending);
    assert_eq!(project.total_cost, 0.0);
    assert!(project.completed_at.is_none());
}

#[tokio::test]
async fn test_status_update_does_not_stamp_completion() {
    let t = TestWorkshop::new().await.unwrap();
    let id = t.create_project(NewProject::new(OWNER, "Lamp")).await.unwrap();

    let outcome = t
        .workshop
        .projects
        .update(id, ProjectUpdate::new().status(ProjectStatus::Completed))
        .await
        .unwrap();
    assert!(outcome.is_success());

    let project = t.workshop.projects.get_by_id(id).await.unwrap().unwrap().project;
    assert_eq!(project.status, ProjectStatus::Completed);
    assert!(project.completed_at.is_none());
}

#[tokio::test]
async fn test_mark_completed_stamps_completion() {
    let t = TestWorkshop::new().await.unwrap();
    let id = t
        .create_project(NewProject::new(OWNER, "Lamp").with_status(ProjectStatus::InProgress))
        .await
        .unwrap();

    let outcome = t.workshop.projects.mark_completed(id).await.unwrap();
    assert!(outcome.is_success());

    let project = t.workshop.projects.get_by_id(id).await.unwrap().unwrap().project;
    assert!(project.is_completed());
    let completed_at = project.completed_at.unwrap();
    assert!(completed_at >= project.created_at);
}

#[tokio::test]
async fn test_mark_completed_on_missing_project_fails() {
    let t = TestWorkshop::new().await.unwrap();
    let outcome = t
        .workshop
        .projects
        .mark_completed(spoolwise_common::ProjectId(404))
        .await
        .unwrap();
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_consumption_floors_spool_at_zero() {
    let t = TestWorkshop::new().await.unwrap();
    let filament = t.add_filament(100.0, 20.0).await.unwrap();
    let project = t
        .create_project(
            NewProject::new(OWNER, "Big print")
                .with_filament(filament)
                .with_print(60.0, 2.0),
        )
        .await
        .unwrap();

    let first = t.workshop.projects.consume_filament(project).await.unwrap();
    assert_eq!(first.into_value(), Some(40.0));

    let second = t.workshop.projects.consume_filament(project).await.unwrap();
    assert_eq!(second.into_value(), Some(0.0));

    let spool = t.workshop.inventory.get_by_id(filament).await.unwrap().unwrap();
    assert_eq!(spool.weight_current_g, 0.0);
    assert!(spool.is_empty());
}

#[tokio::test]
async fn test_projects_are_listed_per_owner_newest_first() {
    let t = TestWorkshop::new().await.unwrap();
    let first = t.create_project(NewProject::new(OWNER, "First")).await.unwrap();
    let second = t.create_project(NewProject::new(OWNER, "Second")).await.unwrap();
    t.create_project(NewProject::new(OTHER_OWNER, "Elsewhere"))
        .await
        .unwrap();

    let listed = t.workshop.projects.get_all(OWNER).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|detail| detail.project.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
async fn test_deleted_project_is_gone() {
    let t = TestWorkshop::new().await.unwrap();
    let id = t.create_project(NewProject::new(OWNER, "Scrap")).await.unwrap();

    assert!(t.workshop.projects.delete(id).await.unwrap().is_success());
    assert!(t.workshop.projects.get_by_id(id).await.unwrap().is_none());
    assert!(!t.workshop.projects.delete(id).await.unwrap().is_success());
}
