//! Cost computation against stored spools and projects

use spoolwise_costing::EnergyRates;
use spoolwise_projects::{NewProject, ProjectLifecycle};

use crate::common::{TestWorkshop, OWNER};

#[tokio::test]
async fn test_reference_project_costs() {
    let t = TestWorkshop::new().await.unwrap();
    let filament = t.add_filament(1000.0, 20.0).await.unwrap();
    let project = t
        .create_project(
            NewProject::new(OWNER, "Benchy")
                .with_filament(filament)
                .with_print(200.0, 5.0),
        )
        .await
        .unwrap();

    let costs = t
        .workshop
        .projects
        .apply_costs(project, t.workshop.energy_rates())
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(costs.filament_cost, 4.0);
    assert_eq!(costs.energy_cost, 0.26);
    assert_eq!(costs.total_cost, 4.26);

    let stored = t.workshop.projects.get_by_id(project).await.unwrap().unwrap();
    assert_eq!(stored.project.costs(), costs);
    assert!((t.workshop.sale_price(&stored.project) - 17.04).abs() < 1e-9);
}

#[tokio::test]
async fn test_costs_without_filament_are_energy_only() {
    let t = TestWorkshop::new().await.unwrap();
    let project = t
        .create_project(NewProject::new(OWNER, "Loose part").with_print(200.0, 5.0))
        .await
        .unwrap();

    let costs = t
        .workshop
        .projects
        .apply_costs(project, EnergyRates::default())
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(costs.filament_cost, 0.0);
    assert_eq!(costs.total_cost, costs.energy_cost);
}

#[tokio::test]
async fn test_calculate_costs_matches_stored_costs() {
    let t = TestWorkshop::new().await.unwrap();
    let filament = t.add_filament(750.0, 27.5).await.unwrap();
    let project = t
        .create_project(
            NewProject::new(OWNER, "Vase")
                .with_filament(filament)
                .with_print(83.0, 3.25),
        )
        .await
        .unwrap();

    let rates = t.workshop.energy_rates();
    let expected = ProjectLifecycle::calculate_costs(83.0, 27.5, 3.25, rates);
    let applied = t
        .workshop
        .projects
        .apply_costs(project, rates)
        .await
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(applied, expected);
}

#[tokio::test]
async fn test_negative_rates_are_rejected() {
    let t = TestWorkshop::new().await.unwrap();
    let project = t
        .create_project(NewProject::new(OWNER, "Clip"))
        .await
        .unwrap();

    let result = t
        .workshop
        .projects
        .apply_costs(project, EnergyRates::new(-1.0, 0.15))
        .await;
    assert!(result.is_err());
}
