//! Runs the pipeline against seeded in-memory orders
//!
//! Type A orders are exported to `/tmp/orderflow_demo/exports`. Type B
//! orders call the verification service at `ORDERFLOW_DEMO_VERIFICATION_URL`
//! (default `http://localhost:8081`); with nothing listening they end up as
//! `api_failure`.
//!
//! Run with:
//! ```bash
//! cargo run --example local_run
//! ```

use orderflow::adapters::export::CsvExporter;
use orderflow::adapters::store::MemoryOrderStore;
use orderflow::adapters::verification::HttpVerificationClient;
use orderflow::config::{LoggingConfig, VerificationConfig};
use orderflow::core::OrderPipeline;
use orderflow::domain::{Order, OrderId, OrderType, OwnerId};
use orderflow::logging::init_logging;
use std::sync::Arc;

const DEMO_DIR: &str = "/tmp/orderflow_demo";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging = LoggingConfig {
        local_enabled: true,
        local_path: format!("{DEMO_DIR}/logs"),
        local_rotation: "daily".to_string(),
    };
    let _guard = init_logging("debug", &logging)?;

    let owner = OwnerId::new(1);
    let store = MemoryOrderStore::with_orders([
        (owner, Order::new(OrderId::new(1), OrderType::A, 120.0, false)?),
        (owner, Order::new(OrderId::new(2), OrderType::A, 480.0, true)?),
        (owner, Order::new(OrderId::new(3), OrderType::B, 75.0, false)?),
        (owner, Order::new(OrderId::new(4), OrderType::C, 30.0, true)?),
        (owner, Order::new(OrderId::new(5), OrderType::C, 260.0, false)?),
        (owner, Order::new(OrderId::new(6), OrderType::from("X"), 10.0, false)?),
    ]);

    let verification = VerificationConfig {
        base_url: std::env::var("ORDERFLOW_DEMO_VERIFICATION_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string()),
        timeout_seconds: 2,
        ..Default::default()
    };

    let pipeline = OrderPipeline::new(
        Arc::new(store.clone()),
        Arc::new(CsvExporter::new(format!("{DEMO_DIR}/exports"))),
        Arc::new(HttpVerificationClient::new(verification)?),
    );

    let outcome = pipeline.run_for_owner(owner).await;
    outcome.log_summary();

    println!("Owner {owner}: succeeded = {}", outcome.succeeded);
    for order in &outcome.orders {
        println!(
            "  order {:>2}  type {:<2} amount {:>7.2}  {:<12} {}",
            order.id().value(),
            order.order_type().as_str(),
            order.amount(),
            order.status().as_str(),
            order.priority()
        );
    }
    println!("Exports written to {DEMO_DIR}/exports, logs to {DEMO_DIR}/logs");

    Ok(())
}
