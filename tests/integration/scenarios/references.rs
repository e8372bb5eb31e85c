//! Projects keep dangling references after their model or filament goes

use spoolwise_costing::EnergyRates;
use spoolwise_projects::{NewProject, ProjectUpdate};

use crate::common::{TestWorkshop, OWNER};

#[tokio::test]
async fn test_deleting_filament_leaves_project_readable() {
    let t = TestWorkshop::new().await.unwrap();
    let filament = t.add_filament(1000.0, 20.0).await.unwrap();
    let project = t
        .create_project(
            NewProject::new(OWNER, "Bracket")
                .with_filament(filament)
                .with_print(50.0, 1.0),
        )
        .await
        .unwrap();

    let before = t.workshop.projects.get_by_id(project).await.unwrap().unwrap();
    assert_eq!(before.filament_brand.as_deref(), Some("Esun"));

    let deleted = t.workshop.inventory.delete(filament).await.unwrap();
    assert!(deleted.is_success());

    let after = t.workshop.projects.get_by_id(project).await.unwrap().unwrap();
    assert_eq!(after.project.filament_id, Some(filament));
    assert_eq!(after.filament_brand, None);
    assert_eq!(after.filament_material, None);

    let listed = t.workshop.projects.get_all(OWNER).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_deleting_model_leaves_project_readable() {
    let t = TestWorkshop::new().await.unwrap();
    let model = t.add_model("gear").await.unwrap();
    let project = t
        .create_project(NewProject::new(OWNER, "Gearbox").with_model(model))
        .await
        .unwrap();

    let stored = t.workshop.catalog.get_by_id(model).await.unwrap().unwrap();
    assert!(stored.file_path().exists());

    assert!(t.workshop.catalog.delete(model).await.unwrap().is_success());
    assert!(!stored.file_path().exists());

    let detail = t.workshop.projects.get_by_id(project).await.unwrap().unwrap();
    assert_eq!(detail.project.model_id, Some(model));
    assert_eq!(detail.model_name, None);
}

#[tokio::test]
async fn test_dangling_filament_costs_nothing_and_cannot_be_consumed() {
    let t = TestWorkshop::new().await.unwrap();
    let filament = t.add_filament(1000.0, 20.0).await.unwrap();
    let project = t
        .create_project(
            NewProject::new(OWNER, "Hook")
                .with_filament(filament)
                .with_print(100.0, 0.0),
        )
        .await
        .unwrap();
    t.workshop.inventory.delete(filament).await.unwrap();

    let costs = t
        .workshop
        .projects
        .apply_costs(project, EnergyRates::default())
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(costs.total_cost, 0.0);

    let consumed = t.workshop.projects.consume_filament(project).await.unwrap();
    assert!(!consumed.is_success());
}

#[tokio::test]
async fn test_new_references_must_exist() {
    let t = TestWorkshop::new().await.unwrap();
    let project = t
        .create_project(NewProject::new(OWNER, "Stand"))
        .await
        .unwrap();
    let filament = t.add_filament(500.0, 18.0).await.unwrap();
    t.workshop.inventory.delete(filament).await.unwrap();

    let outcome = t
        .workshop
        .projects
        .update(project, ProjectUpdate::new().filament(Some(filament)))
        .await
        .unwrap();
    assert!(!outcome.is_success());

    let detail = t.workshop.projects.get_by_id(project).await.unwrap().unwrap();
    assert_eq!(detail.project.filament_id, None);
}

#[tokio::test]
async fn test_references_can_be_cleared() {
    let t = TestWorkshop::new().await.unwrap();
    let model = t.add_model("frame").await.unwrap();
    let filament = t.add_filament(1000.0, 20.0).await.unwrap();
    let project = t
        .create_project(
            NewProject::new(OWNER, "Frame")
                .with_model(model)
                .with_filament(filament),
        )
        .await
        .unwrap();

    let outcome = t
        .workshop
        .projects
        .update(project, ProjectUpdate::new().model(None).filament(None))
        .await
        .unwrap();
    assert!(outcome.is_success());

    let detail = t.workshop.projects.get_by_id(project).await.unwrap().unwrap();
    assert_eq!(detail.project.model_id, None);
    assert_eq!(detail.project.filament_id, None);
    assert_eq!(detail.project.name, "Frame");
}
