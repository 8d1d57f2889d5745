// OrderFlow - Order Classification Pipeline
// Copyright (c) 2025 OrderFlow Contributors
// Licensed under the MIT License

//! # OrderFlow - Order Classification Pipeline
//!
//! OrderFlow fetches the orders of an owner, runs a type-specific rule on each
//! one, assigns a priority and writes the result back to the order store.
//!
//! ## Overview
//!
//! - **Type A** orders are exported to a CSV sink
//! - **Type B** orders are checked against a remote verification service
//! - **Type C** orders are completed locally from their special flag
//! - Orders of any other type are marked `unknown_type`
//!
//! Orders with an amount above 200 become high priority. A failed write-back
//! downgrades the order to `db_error`.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The pipeline, type rules and batch reporting
//! - [`adapters`] - Order stores, CSV export and the HTTP verification client
//! - [`domain`] - Order model, identifiers and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orderflow::config::load_config;
//! use orderflow::core::OrderPipeline;
//! use orderflow::domain::OwnerId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("orderflow.toml")?;
//!     let pipeline = OrderPipeline::from_config(&config).await?;
//!
//!     let all_processed = pipeline.process_for_owner(OwnerId::new(1)).await;
//!     println!("Batch completed: {all_processed}");
//!     Ok(())
//! }
//! ```
//!
//! ## Embedding
//!
//! The pipeline only depends on three traits, so any backend can be plugged
//! in:
//!
//! ```rust
//! use orderflow::adapters::export::CsvExporter;
//! use orderflow::adapters::store::MemoryOrderStore;
//! use orderflow::adapters::verification::HttpVerificationClient;
//! use orderflow::config::VerificationConfig;
//! use orderflow::core::OrderPipeline;
//! use orderflow::domain::{Order, OrderId, OrderStatus, OrderType, OwnerId};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> orderflow::domain::Result<()> {
//! let owner = OwnerId::new(1);
//! let store = MemoryOrderStore::with_orders([
//!     (owner, Order::new(OrderId::new(1), OrderType::C, 250.0, true)?),
//! ]);
//!
//! let pipeline = OrderPipeline::new(
//!     Arc::new(store.clone()),
//!     Arc::new(CsvExporter::new(std::env::temp_dir())),
//!     Arc::new(HttpVerificationClient::new(VerificationConfig::default())?),
//! );
//!
//! assert!(pipeline.process_for_owner(owner).await);
//! let order = store.get(OrderId::new(1)).await.unwrap();
//! assert_eq!(order.status(), OrderStatus::Completed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Store, export and verification faults are recorded on the affected order
//! as a status. Any other error aborts the batch, which then reports `false`.
//! See [`domain::OrderFlowError`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
