//! Workshop report rendering

use spoolwise_inventory::MaterialType;
use spoolwise_projects::NewProject;

use crate::common::{TestWorkshop, OWNER};

#[tokio::test]
async fn test_report_serializes_to_json() {
    let t = TestWorkshop::new().await.unwrap();
    let filament = t.add_filament(1000.0, 20.0).await.unwrap();
    let model = t.add_model("benchy").await.unwrap();
    let project = t
        .create_project(
            NewProject::new(OWNER, "Benchy")
                .with_model(model)
                .with_filament(filament)
                .with_print(200.0, 5.0),
        )
        .await
        .unwrap();
    t.workshop
        .projects
        .apply_costs(project, t.workshop.energy_rates())
        .await
        .unwrap();

    let report = t.workshop.report(OWNER).await.unwrap();
    assert_eq!(report.model_count, 1);
    assert_eq!(report.inventory.spool_count, 1);
    assert_eq!(report.stock_by_material.len(), 1);
    assert_eq!(report.stock_by_material[0].material_type, MaterialType::Pla);
    assert_eq!(report.stock_by_material[0].total_remaining_g, 1000.0);
    assert_eq!(report.stats.total_projects, 1);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["projects"][0]["name"], "Benchy");
    assert_eq!(json["projects"][0]["model_name"], "benchy");
    assert_eq!(json["projects"][0]["filament_material"], "PLA");
    assert_eq!(json["projects"][0]["status"], "Pending");
    assert_eq!(json["stats"]["total_spent"], 4.26);
    assert_eq!(json["stock_by_material"][0]["material_type"], "PLA");
}
