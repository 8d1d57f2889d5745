//! JSON file order store tests

use orderflow::adapters::store::{FileOrderStore, OrderStore};
use orderflow::domain::{
    Order, OrderFlowError, OrderId, OrderPriority, OrderStatus, OrderType, OwnerId, StorageError,
};
use tempfile::TempDir;

fn order(id: i64, order_type: OrderType, amount: f64) -> Order {
    Order::new(OrderId::new(id), order_type, amount, false).unwrap()
}

#[tokio::test]
async fn test_seed_then_fetch_by_owner() {
    let dir = TempDir::new().unwrap();
    let store = FileOrderStore::new(dir.path().join("orders.json"));

    store
        .seed([
            (OwnerId::new(1), order(2, OrderType::B, 20.0)),
            (OwnerId::new(1), order(1, OrderType::A, 10.0)),
            (OwnerId::new(2), order(3, OrderType::from("Q"), 30.0)),
        ])
        .await
        .unwrap();

    let orders = store.fetch_by_owner(OwnerId::new(1)).await.unwrap();
    let ids: Vec<i64> = orders.iter().map(|o| o.id().value()).collect();
    assert_eq!(ids, vec![1, 2]);

    let other = store.fetch_by_owner(OwnerId::new(2)).await.unwrap();
    assert_eq!(other[0].order_type(), &OrderType::Unknown("Q".to_string()));
}

#[tokio::test]
async fn test_update_writes_status_and_priority() {
    let dir = TempDir::new().unwrap();
    let store = FileOrderStore::new(dir.path().join("orders.json"));
    store
        .seed([(OwnerId::new(5), order(10, OrderType::C, 300.0))])
        .await
        .unwrap();

    let updated = Order::restore(
        OrderId::new(10),
        OrderType::C,
        300.0,
        false,
        OrderStatus::InProgress,
        OrderPriority::High,
    )
    .unwrap();
    store.update(&updated).await.unwrap();

    let reopened = FileOrderStore::new(store.path());
    let orders = reopened.fetch_by_owner(OwnerId::new(5)).await.unwrap();
    assert_eq!(orders, vec![updated]);

    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("\"in_progress\""));
    assert!(text.contains("\"high\""));
}

#[tokio::test]
async fn test_update_unknown_order_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = FileOrderStore::new(dir.path().join("orders.json"));
    store.seed(Vec::new()).await.unwrap();

    let err = store
        .update(&order(77, OrderType::A, 1.0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderFlowError::Storage(StorageError::NotFound(77))
    ));
}

#[tokio::test]
async fn test_missing_file_is_a_storage_fault() {
    let dir = TempDir::new().unwrap();
    let store = FileOrderStore::new(dir.path().join("absent.json"));

    let err = store.fetch_by_owner(OwnerId::new(1)).await.unwrap_err();
    assert!(matches!(
        err,
        OrderFlowError::Storage(StorageError::ConnectionFailed(_))
    ));
    assert!(store.test_connection().await.is_err());
}

#[tokio::test]
async fn test_malformed_file_is_invalid_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = FileOrderStore::new(&path);

    let err = store.fetch_by_owner(OwnerId::new(1)).await.unwrap_err();
    assert!(matches!(
        err,
        OrderFlowError::Storage(StorageError::InvalidRecord(_))
    ));
}

#[tokio::test]
async fn test_negative_amount_in_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.json");
    std::fs::write(
        &path,
        r#"{"orders":[{"id":1,"owner_id":1,"order_type":"A","amount":-5.0,"is_special":false}]}"#,
    )
    .unwrap();
    let store = FileOrderStore::new(&path);

    let err = store.fetch_by_owner(OwnerId::new(1)).await.unwrap_err();
    assert!(err.is_collaborator_fault());
}

#[tokio::test]
async fn test_pipeline_from_config_with_file_backend() {
    use orderflow::config::parse_config;
    use orderflow::core::OrderPipeline;

    let dir = TempDir::new().unwrap();
    let orders_path = dir.path().join("orders.json");
    let export_dir = dir.path().join("exports");

    FileOrderStore::new(&orders_path)
        .seed([
            (OwnerId::new(3), order(1, OrderType::A, 175.0)),
            (OwnerId::new(3), order(2, OrderType::C, 250.0)),
        ])
        .await
        .unwrap();

    let config = parse_config(&format!(
        r#"
store_backend = "file"

[file_store]
path = '{}'

[export]
output_dir = '{}'
file_prefix = "batch"

[verification]
base_url = "http://localhost:8081"
"#,
        orders_path.display(),
        export_dir.display()
    ))
    .unwrap();
    config.validate().unwrap();

    let pipeline = OrderPipeline::from_config(&config).await.unwrap();
    let outcome = pipeline.run_for_owner(OwnerId::new(3)).await;
    assert!(outcome.succeeded);

    let stored = FileOrderStore::new(&orders_path)
        .fetch_by_owner(OwnerId::new(3))
        .await
        .unwrap();
    assert_eq!(stored[0].status(), OrderStatus::Exported);
    assert_eq!(stored[1].status(), OrderStatus::InProgress);
    assert_eq!(stored[1].priority(), OrderPriority::High);

    let exported: Vec<String> = std::fs::read_dir(&export_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(exported.len(), 1);
    assert!(exported[0].starts_with("batch_3_"));
}

#[tokio::test]
async fn test_pipeline_from_config_missing_file_fails() {
    use orderflow::config::parse_config;
    use orderflow::core::OrderPipeline;

    let dir = TempDir::new().unwrap();
    let config = parse_config(&format!(
        "store_backend = \"file\"\n\n[file_store]\npath = '{}'\n\n[verification]\nbase_url = \"http://localhost:8081\"\n",
        dir.path().join("missing.json").display()
    ))
    .unwrap();

    let err = OrderPipeline::from_config(&config).await.err().unwrap();
    assert!(err.is_collaborator_fault());
}
