//! Lost-update scenarios
//!
//! Each scenario drives a `ProductService` the way concurrent users would
//! and reports how many writes committed and how many were rejected as
//! stale. Simulated think-time always happens in the caller, between the
//! read and the update; the store re-checks freshness when the update runs.

use std::time::Duration;

use anyhow::{anyhow, Context};
use core_kernel::ProductId;
use domain_catalog::{CatalogError, Product, ProductService};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{info, instrument};

/// Outcome of one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub scenario: &'static str,
    /// Product the writers competed for
    pub product_id: ProductId,
    /// Updates that committed
    pub committed: usize,
    /// Updates rejected as stale
    pub conflicts: usize,
    /// Name stored once the scenario finished
    pub final_name: String,
    /// Price stored once the scenario finished
    pub final_price: Decimal,
}

#[derive(Default)]
struct Tally {
    committed: usize,
    conflicts: usize,
}

impl Tally {
    fn record(&mut self, outcome: Result<bool, CatalogError>) -> anyhow::Result<()> {
        match outcome {
            Ok(true) => self.committed += 1,
            Ok(false) => return Err(anyhow!("product disappeared mid-scenario")),
            Err(e) if e.is_conflict() => self.conflicts += 1,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}

/// A writer reads, thinks for `delay`, then writes; if `interfere` is set,
/// another user commits a change after the writer's read and before its write.
#[instrument(skip(service))]
pub async fn delayed_writer(
    service: &ProductService,
    id: ProductId,
    delay: Duration,
    interfere: bool,
) -> anyhow::Result<ScenarioReport> {
    let read = read_product(service, id).await?;

    let mut tally = Tally::default();
    if interfere {
        let mut other = read_product(service, id).await?;
        other.name = "Modified Product".to_string();
        tally.record(service.update_product(&other).await)?;
    }

    let writer_service = service.clone();
    let writer = tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let mut candidate = read;
        candidate.name = "Updated Product".to_string();
        candidate.price = dec!(29.99);
        writer_service.update_product(&candidate).await
    });

    tally.record(writer.await.context("writer task panicked")?)?;

    let scenario = if interfere {
        "modified-during-delay"
    } else {
        "not-modified-during-delay"
    };
    report(service, scenario, id, tally).await
}

/// `writers` users read the same version, then all try to commit at once
#[instrument(skip(service))]
pub async fn contention(
    service: &ProductService,
    id: ProductId,
    writers: usize,
) -> anyhow::Result<ScenarioReport> {
    let read = read_product(service, id).await?;

    let handles: Vec<_> = (0..writers)
        .map(|writer| {
            let service = service.clone();
            let mut candidate = read.clone();
            candidate.name = format!("Writer {}", writer);
            tokio::spawn(async move { service.update_product(&candidate).await })
        })
        .collect();

    let mut tally = Tally::default();
    for handle in handles {
        tally.record(handle.await.context("writer task panicked")?)?;
    }

    report(service, "contention", id, tally).await
}

async fn read_product(service: &ProductService, id: ProductId) -> anyhow::Result<Product> {
    service
        .get_product_by_id(id)
        .await?
        .ok_or_else(|| anyhow!("product {} does not exist", id))
}

async fn report(
    service: &ProductService,
    scenario: &'static str,
    id: ProductId,
    tally: Tally,
) -> anyhow::Result<ScenarioReport> {
    let stored = read_product(service, id).await?;
    info!(
        scenario,
        committed = tally.committed,
        conflicts = tally.conflicts,
        final_name = %stored.name,
        "Scenario finished"
    );

    Ok(ScenarioReport {
        scenario,
        product_id: id,
        committed: tally.committed,
        conflicts: tally.conflicts,
        final_name: stored.name,
        final_price: stored.price,
    })
}
