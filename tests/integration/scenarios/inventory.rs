//! Spool weight bookkeeping

use spoolwise_inventory::{AlertSeverity, MaterialType, NewFilament};

use crate::common::TestWorkshop;

#[tokio::test]
async fn test_update_weight_is_idempotent() {
    let t = TestWorkshop::new().await.unwrap();
    let id = t.add_filament(1000.0, 20.0).await.unwrap();

    for _ in 0..2 {
        let outcome = t.workshop.inventory.update_weight(id, 420.0).await.unwrap();
        assert!(outcome.is_success());
    }

    let spool = t.workshop.inventory.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(spool.weight_current_g, 420.0);
    assert_eq!(spool.weight_initial_g, 1000.0);
}

#[tokio::test]
async fn test_update_weight_bounds() {
    let t = TestWorkshop::new().await.unwrap();
    let id = t.add_filament(1000.0, 20.0).await.unwrap();

    assert!(t.workshop.inventory.update_weight(id, -1.0).await.is_err());
    assert!(t.workshop.inventory.update_weight(id, 1000.5).await.is_err());

    let spool = t.workshop.inventory.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(spool.weight_current_g, 1000.0);
}

#[tokio::test]
async fn test_deduct_never_goes_negative() {
    let t = TestWorkshop::new().await.unwrap();
    let id = t.add_filament(250.0, 20.0).await.unwrap();

    let remaining = t.workshop.inventory.deduct(id, 300.0).await.unwrap();
    assert_eq!(remaining.into_value(), Some(0.0));
}

#[tokio::test]
async fn test_low_stock_alerts_rank_emptiest_first() {
    let t = TestWorkshop::new().await.unwrap();
    let healthy = t.add_filament(1000.0, 20.0).await.unwrap();
    let low = t.add_filament(1000.0, 20.0).await.unwrap();
    let critical = t
        .workshop
        .inventory
        .add(NewFilament::new("Sunlu", MaterialType::Petg, 1000.0, 22.0))
        .await
        .unwrap()
        .into_value()
        .unwrap();

    t.workshop.inventory.update_weight(healthy, 800.0).await.unwrap();
    t.workshop.inventory.update_weight(low, 150.0).await.unwrap();
    t.workshop.inventory.update_weight(critical, 50.0).await.unwrap();

    let alerts = t.workshop.low_stock().await.unwrap();
    let ids: Vec<_> = alerts.iter().map(|alert| alert.filament.id).collect();
    assert_eq!(ids, vec![critical, low]);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[1].severity, AlertSeverity::Warning);
}
