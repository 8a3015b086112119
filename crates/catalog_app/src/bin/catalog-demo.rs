//! Catalog Store - Lost-Update Demo
//!
//! Replays the optimistic-concurrency scenarios against a seeded in-memory
//! store and logs what each writer experienced.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin catalog-demo
//!
//! CATALOG_LOG_FORMAT=json CATALOG_CONCURRENT_WRITERS=32 cargo run --bin catalog-demo
//! ```
//!
//! # Environment Variables
//!
//! * `CATALOG_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `CATALOG_LOG_FORMAT` - pretty or json (default: pretty)
//! * `CATALOG_CALLER_DELAY_MS` - writer think-time in milliseconds (default: 200)
//! * `CATALOG_CONCURRENT_WRITERS` - writers in the contention scenario (default: 8)

use catalog_app::config::AppConfig;
use catalog_app::{build_service, demo, telemetry};
use core_kernel::ProductId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid CATALOG_* configuration ({}), using defaults", e);
        AppConfig::default()
    });
    config.validate()?;

    telemetry::init_tracing(&config);
    tracing::info!(
        caller_delay_ms = config.caller_delay_ms,
        concurrent_writers = config.concurrent_writers,
        "Starting catalog demo"
    );

    let reports = vec![
        demo::delayed_writer(&build_service(), ProductId::new(1), config.caller_delay(), false)
            .await?,
        demo::delayed_writer(&build_service(), ProductId::new(1), config.caller_delay(), true)
            .await?,
        demo::contention(&build_service(), ProductId::new(2), config.concurrent_writers).await?,
    ];

    for report in &reports {
        tracing::info!(report = %serde_json::to_string(report)?, "Scenario report");
    }

    let health = build_service().health_check().await;
    tracing::info!(
        status = ?health.status,
        records = ?health.record_count,
        message = ?health.message,
        "Store health"
    );

    Ok(())
}
