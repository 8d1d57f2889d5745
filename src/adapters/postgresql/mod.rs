//! PostgreSQL integration
//!
//! Orders are kept in one table keyed by order id, with an index on the
//! owner id used for batch fetches.

pub mod client;
pub mod store;

pub use client::PostgreSQLClient;
pub use store::PostgreSQLOrderStore;
