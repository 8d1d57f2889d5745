//! In-memory order store
//!
//! Holds orders in a map behind an async lock. Used by tests and for dry
//! runs against seeded data.

use super::traits::OrderStore;
use crate::domain::{Order, OrderFlowError, OrderId, OwnerId, Result, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredOrder {
    owner_id: OwnerId,
    order: Order,
}

/// Order store kept entirely in memory
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, StoredOrder>>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with orders for their owners
    pub fn with_orders(orders: impl IntoIterator<Item = (OwnerId, Order)>) -> Self {
        let map = orders
            .into_iter()
            .map(|(owner_id, order)| (order.id(), StoredOrder { owner_id, order }))
            .collect();
        Self {
            orders: Arc::new(RwLock::new(map)),
        }
    }

    /// Inserts or replaces an order
    pub async fn insert(&self, owner_id: OwnerId, order: Order) {
        self.orders
            .write()
            .await
            .insert(order.id(), StoredOrder { owner_id, order });
    }

    /// Returns the stored copy of an order
    pub async fn get(&self, order_id: OrderId) -> Option<Order> {
        self.orders
            .read()
            .await
            .get(&order_id)
            .map(|stored| stored.order.clone())
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn fetch_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut owned: Vec<Order> = orders
            .values()
            .filter(|stored| stored.owner_id == owner_id)
            .map(|stored| stored.order.clone())
            .collect();
        owned.sort_by_key(Order::id);
        Ok(owned)
    }

    async fn update(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(&order.id()) {
            Some(stored) => {
                stored.order = order.clone();
                Ok(())
            }
            None => Err(OrderFlowError::Storage(StorageError::NotFound(
                order.id().value(),
            ))),
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
