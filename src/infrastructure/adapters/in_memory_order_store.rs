use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::{FiatAmount, LineItem, Order};
use crate::ports::order_store_port::OrderStorePort;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// In-memory stand-in for the host commerce platform: orders, product
/// stock and the shopper's cart. Production deployments replace this
/// with an adapter onto the real store behind the same port.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<u64, Order>>,
    stock: RwLock<HashMap<u64, i64>>,
    cart: RwLock<Vec<LineItem>>,
    next_id: AtomicU64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    fn generate_order_key() -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("wc_order_{}", &uuid[..13])
    }

    /// Seed available stock for a product
    pub async fn set_stock(&self, product_id: u64, quantity: i64) {
        self.stock.write().await.insert(product_id, quantity);
    }

    /// Remaining stock for a product
    pub async fn stock_of(&self, product_id: u64) -> Option<i64> {
        self.stock.read().await.get(&product_id).copied()
    }

    /// Put items in the shopper's cart
    pub async fn fill_cart(&self, items: Vec<LineItem>) {
        *self.cart.write().await = items;
    }

    /// Number of items currently in the cart
    pub async fn cart_len(&self) -> usize {
        self.cart.read().await.len()
    }
}

#[async_trait]
impl OrderStorePort for InMemoryOrderStore {
    async fn create_order(
        &self,
        total: FiatAmount,
        items: Vec<LineItem>,
    ) -> GatewayResult<Order> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let order = Order::new(id, Self::generate_order_key(), total, items)?;

        self.orders.write().await.insert(id, order.clone());
        debug!("Order created: {}", id);
        Ok(order)
    }

    async fn find_by_id(&self, id: u64) -> GatewayResult<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn attach_api_response(&self, id: u64, pretty_json: &str) -> GatewayResult<()> {
        let mut orders = self.orders.write().await;
        let order = orders.get_mut(&id).ok_or(GatewayError::OrderNotFound(id))?;

        order.attach_api_response(pretty_json.to_string());
        debug!("api_response metadata attached to order {}", id);
        Ok(())
    }

    async fn payment_complete(&self, id: u64, note: &str) -> GatewayResult<Order> {
        let mut orders = self.orders.write().await;
        let order = orders.get_mut(&id).ok_or(GatewayError::OrderNotFound(id))?;

        order.mark_completed(note)?;

        // Stock decrement, as the host platform does on payment_complete
        let mut stock = self.stock.write().await;
        for item in &order.items {
            if let Some(remaining) = stock.get_mut(&item.product_id) {
                *remaining -= i64::from(item.quantity);
            }
        }

        info!("Order {} completed: {}", id, note);
        Ok(order.clone())
    }

    async fn clear_cart(&self) -> GatewayResult<()> {
        self.cart.write().await.clear();
        debug!("Cart cleared");
        Ok(())
    }
}
