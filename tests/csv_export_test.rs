//! CSV exporter tests against a real directory

use orderflow::adapters::export::{CsvExporter, TabularExporter};
use orderflow::core::processors::export_rows;
use orderflow::domain::constants::EXPORT_COLUMNS;
use orderflow::domain::{ExportError, Order, OrderFlowError, OrderId, OrderType};
use tempfile::TempDir;

fn type_a(id: i64, amount: f64) -> Order {
    Order::new(OrderId::new(id), OrderType::A, amount, false).unwrap()
}

#[tokio::test]
async fn test_writes_header_once_and_data_row() {
    let dir = TempDir::new().unwrap();
    let exporter = CsvExporter::new(dir.path());

    let rows = export_rows(&type_a(7, 99.5));
    exporter
        .write("orders_type_A_1.csv", &EXPORT_COLUMNS, &rows)
        .await
        .unwrap();

    let text = std::fs::read_to_string(dir.path().join("orders_type_A_1.csv")).unwrap();
    assert_eq!(
        text,
        "ID,Type,Amount,IsSpecial,Status,Priority\n7,A,99.50,false,new,low\n"
    );
}

#[tokio::test]
async fn test_high_value_order_gets_note_row() {
    let dir = TempDir::new().unwrap();
    let exporter = CsvExporter::new(dir.path());

    let rows = export_rows(&type_a(8, 151.0));
    exporter
        .write("high.csv", &EXPORT_COLUMNS, &rows)
        .await
        .unwrap();

    let text = std::fs::read_to_string(dir.path().join("high.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].matches("ID").count(), 1);
    assert_eq!(lines[2], ",,,,Note,High value order");
}

#[tokio::test]
async fn test_creates_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("exports").join("2025");
    let exporter = CsvExporter::new(&nested);

    exporter
        .write("nested.csv", &EXPORT_COLUMNS, &export_rows(&type_a(1, 10.0)))
        .await
        .unwrap();

    assert!(nested.join("nested.csv").is_file());
}

#[tokio::test]
async fn test_output_dir_that_is_a_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();
    let exporter = CsvExporter::new(&blocker);

    let err = exporter
        .write("blocked.csv", &EXPORT_COLUMNS, &export_rows(&type_a(1, 10.0)))
        .await
        .unwrap_err();

    assert!(err.is_collaborator_fault());
    assert!(matches!(err, OrderFlowError::Export(_)));
}

#[tokio::test]
async fn test_rejects_sink_names_outside_output_dir() {
    let dir = TempDir::new().unwrap();
    let exporter = CsvExporter::new(dir.path());

    for name in ["../escape.csv", "sub/dir.csv", ""] {
        let err = exporter
            .write(name, &EXPORT_COLUMNS, &[])
            .await
            .unwrap_err();
        assert!(
            matches!(err, OrderFlowError::Export(ExportError::SinkUnavailable(_))),
            "{name}"
        );
    }
}

#[tokio::test]
async fn test_each_sink_is_a_separate_file() {
    let dir = TempDir::new().unwrap();
    let exporter = CsvExporter::new(dir.path());

    for id in 1..=3 {
        exporter
            .write(
                &format!("order_{id}.csv"),
                &EXPORT_COLUMNS,
                &export_rows(&type_a(id, 5.0)),
            )
            .await
            .unwrap();
    }

    let count = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(count, 3);
}
