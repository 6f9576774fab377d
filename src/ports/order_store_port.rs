use crate::domain::errors::GatewayResult;
use crate::domain::{FiatAmount, LineItem, Order};
use async_trait::async_trait;

/// Port to the host commerce platform: order store plus the cart the
/// shopper is checking out with. The gateway never owns this data; it
/// reads orders, attaches one metadata field, and triggers one status
/// transition.
#[async_trait]
pub trait OrderStorePort: Send + Sync {
    /// Create a pending order with a fresh secret order key
    async fn create_order(
        &self,
        total: FiatAmount,
        items: Vec<LineItem>,
    ) -> GatewayResult<Order>;

    /// Look up an order by id
    async fn find_by_id(&self, id: u64) -> GatewayResult<Option<Order>>;

    /// Persist the raw processor response as the order's
    /// `api_response` metadata
    async fn attach_api_response(&self, id: u64, pretty_json: &str) -> GatewayResult<()>;

    /// Mark the order completed with the given note and run the host's
    /// payment-completion side effects (stock decrement included).
    /// Returns the updated order.
    async fn payment_complete(&self, id: u64, note: &str) -> GatewayResult<Order>;

    /// Empty the shopper's active cart
    async fn clear_cart(&self) -> GatewayResult<()>;
}
