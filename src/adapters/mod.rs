//! External system integrations for OrderFlow.
//!
//! The pipeline depends on three collaborator traits. Each has one or more
//! shipped implementations:
//!
//! - [`store`] - [`OrderStore`](store::OrderStore): memory, JSON file, PostgreSQL
//! - [`export`] - [`TabularExporter`](export::TabularExporter): CSV files
//! - [`verification`] - [`VerificationClient`](verification::VerificationClient): HTTP
//! - [`postgresql`] - connection pooling and the PostgreSQL order store
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind `async_trait` traits so the
//! pipeline can be driven by test doubles.
//!
//! ```rust,no_run
//! use orderflow::adapters::export::CsvExporter;
//! use orderflow::adapters::store::FileOrderStore;
//! use orderflow::adapters::verification::HttpVerificationClient;
//! use orderflow::config::VerificationConfig;
//!
//! # fn example() -> orderflow::domain::Result<()> {
//! let store = FileOrderStore::new("orders.json");
//! let exporter = CsvExporter::new("exports");
//! let verifier = HttpVerificationClient::new(VerificationConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod postgresql;
pub mod store;
pub mod verification;
