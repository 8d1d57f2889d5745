//! Tabular export of orders
//!
//! Type A orders are written to a named sink through [`TabularExporter`].
//! [`CsvExporter`] writes one CSV file per sink.

pub mod csv;
pub mod traits;

pub use self::csv::{encode_csv, CsvExporter};
pub use traits::TabularExporter;
