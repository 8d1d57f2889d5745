//! Tabular export abstraction

use crate::domain::Result;
use async_trait::async_trait;

/// Destination for tabular order exports
#[async_trait]
pub trait TabularExporter: Send + Sync {
    /// Write a header row followed by data rows to a named sink
    ///
    /// Each sink name is written once. Rows may be shorter or longer than
    /// `columns`; the exporter writes them as given.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`](crate::domain::ExportError) if the sink cannot
    /// be written.
    async fn write(&self, sink_name: &str, columns: &[&str], rows: &[Vec<String>]) -> Result<()>;
}
