//! Demo Scenario Tests
//!
//! Runs the lost-update scenarios against stores built by `test_utils` and
//! checks the reported tallies against the stored state.

use std::time::Duration;

use catalog_app::{build_service, demo};
use core_kernel::ProductId;
use domain_catalog::ProductService;
use rust_decimal_macros::dec;
use test_utils::{IdFixtures, TestStoreBuilder};

fn fixture_service() -> ProductService {
    let (store, _clock) = TestStoreBuilder::new().build();
    ProductService::new(store)
}

#[tokio::test]
async fn test_delayed_writer_without_interference_commits() {
    let service = fixture_service();

    let delay = Duration::from_millis(10);
    let report = demo::delayed_writer(&service, IdFixtures::first(), delay, false)
        .await
        .unwrap();

    assert_eq!(report.scenario, "not-modified-during-delay");
    assert_eq!(report.committed, 1);
    assert_eq!(report.conflicts, 0);
    assert_eq!(report.final_name, "Updated Product");
    assert_eq!(report.final_price, dec!(29.99));
}

#[tokio::test]
async fn test_delayed_writer_with_interference_conflicts() {
    let service = fixture_service();

    let delay = Duration::from_millis(50);
    let report = demo::delayed_writer(&service, IdFixtures::first(), delay, true)
        .await
        .unwrap();

    assert_eq!(report.scenario, "modified-during-delay");
    assert_eq!(report.committed, 1);
    assert_eq!(report.conflicts, 1);
    assert_eq!(report.final_name, "Modified Product");
    assert_eq!(report.final_price, dec!(9.99));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_interference_wins_even_without_think_time() {
    for _ in 0..200 {
        let service = build_service();

        let report = demo::delayed_writer(&service, ProductId::new(1), Duration::ZERO, true)
            .await
            .unwrap();

        assert_eq!(report.committed, 1);
        assert_eq!(report.conflicts, 1);
        assert_eq!(report.final_name, "Modified Product");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_contention_has_a_single_winner() {
    let service = build_service();

    let report = demo::contention(&service, ProductId::new(2), 12).await.unwrap();

    assert_eq!(report.committed, 1);
    assert_eq!(report.conflicts, 11);
    assert!(report.final_name.starts_with("Writer "));
    assert_eq!(report.final_price, dec!(19.99));
}

#[tokio::test]
async fn test_missing_product_is_reported_as_error() {
    let service = fixture_service();

    let result = demo::contention(&service, IdFixtures::missing(), 2).await;
    let message = result.unwrap_err().to_string();
    assert!(message.contains("PRD-404"));
}

#[tokio::test]
async fn test_report_serializes_price_exactly() {
    let service = fixture_service();
    let report = demo::contention(&service, IdFixtures::first(), 1).await.unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["scenario"], "contention");
    assert_eq!(json["product_id"], 1);
    assert_eq!(json["final_price"], "9.99");
}
