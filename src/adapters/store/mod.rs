//! Order persistence
//!
//! - [`OrderStore`] - the trait the pipeline depends on
//! - [`MemoryOrderStore`] - in-process map
//! - [`FileOrderStore`] - JSON document on disk
//! - [`PostgreSQLOrderStore`](crate::adapters::postgresql::PostgreSQLOrderStore) - PostgreSQL table

pub mod factory;
pub mod file;
pub mod memory;
pub mod models;
pub mod traits;

pub use factory::create_order_store;
pub use file::FileOrderStore;
pub use memory::MemoryOrderStore;
pub use models::OrderRecord;
pub use traits::OrderStore;
