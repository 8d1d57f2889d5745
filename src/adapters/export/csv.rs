//! CSV file exporter

use super::traits::TabularExporter;
use crate::domain::{ExportError, OrderFlowError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes each sink as `<output_dir>/<sink_name>`
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path a sink name resolves to
    pub fn sink_path(&self, sink_name: &str) -> PathBuf {
        self.output_dir.join(sink_name)
    }
}

/// Encodes a header and rows as CSV bytes
///
/// # Errors
///
/// Returns [`ExportError::WriteFailed`] if a record cannot be encoded.
pub fn encode_csv(sink_name: &str, columns: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>> {
    let write_failed = |e: csv::Error| {
        OrderFlowError::Export(ExportError::WriteFailed {
            sink: sink_name.to_string(),
            message: e.to_string(),
        })
    };

    // Annotation rows do not have to match the header width
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(columns).map_err(write_failed)?;
    for row in rows {
        writer.write_record(row).map_err(write_failed)?;
    }

    writer.into_inner().map_err(|e| {
        OrderFlowError::Export(ExportError::WriteFailed {
            sink: sink_name.to_string(),
            message: e.to_string(),
        })
    })
}

#[async_trait]
impl TabularExporter for CsvExporter {
    async fn write(&self, sink_name: &str, columns: &[&str], rows: &[Vec<String>]) -> Result<()> {
        if sink_name.is_empty() || sink_name.contains(['/', '\\']) || sink_name.contains("..") {
            return Err(ExportError::SinkUnavailable(format!(
                "Invalid sink name '{sink_name}'"
            ))
            .into());
        }

        let bytes = encode_csv(sink_name, columns, rows)?;

        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            ExportError::SinkUnavailable(format!(
                "Failed to create export directory {}: {e}",
                self.output_dir.display()
            ))
        })?;

        let path = self.sink_path(sink_name);
        fs::write(&path, bytes)
            .await
            .map_err(|e| ExportError::WriteFailed {
                sink: sink_name.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            rows = rows.len(),
            "CSV sink written"
        );
        Ok(())
    }
}
