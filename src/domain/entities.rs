use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::value_objects::{FiatAmount, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One purchasable line of an order. Carried so payment completion can
/// decrement stock the way the host platform does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: u64,
    pub quantity: u32,
}

/// An order as the host commerce platform holds it. The gateway reads
/// total/currency/id/key, attaches one metadata field at initiation,
/// and drives one status transition at completion. It never deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Host-assigned order id
    pub id: u64,

    /// Secret order key. Embedded in the success URL at initiation and
    /// the sole authorization check on the completion callback.
    pub order_key: String,

    /// Order total with currency
    pub total: FiatAmount,

    /// Lifecycle status
    pub status: OrderStatus,

    /// Purchased items
    pub items: Vec<LineItem>,

    /// Note recorded with the completing status transition
    pub order_note: Option<String>,

    /// Raw processor response from the last payment initiation,
    /// pretty-printed JSON, kept for audit/debugging
    pub api_response: Option<String>,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Last update time
    pub updated_at: DateTime<Utc>,

    /// Payment completion time
    pub paid_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Create a new pending order
    pub fn new(
        id: u64,
        order_key: String,
        total: FiatAmount,
        items: Vec<LineItem>,
    ) -> GatewayResult<Self> {
        if total.amount.is_sign_negative() || total.amount.is_zero() {
            return Err(GatewayError::ValidationError(
                "Order total must be greater than 0".to_string(),
            ));
        }

        if total.currency.is_empty() {
            return Err(GatewayError::ValidationError(
                "Order currency must not be empty".to_string(),
            ));
        }

        if order_key.is_empty() {
            return Err(GatewayError::ValidationError(
                "Order key must not be empty".to_string(),
            ));
        }

        let now = Utc::now();

        Ok(Self {
            id,
            order_key,
            total,
            status: OrderStatus::Pending,
            items,
            order_note: None,
            api_response: None,
            created_at: now,
            updated_at: now,
            paid_at: None,
        })
    }

    /// Exact-equality check of a callback-supplied key against the
    /// stored one. This is the only access control on the completion
    /// endpoint.
    pub fn key_matches(&self, supplied: &str) -> bool {
        self.order_key == supplied
    }

    /// Attach the raw processor response as order metadata
    pub fn attach_api_response(&mut self, pretty_json: String) {
        self.api_response = Some(pretty_json);
        self.updated_at = Utc::now();
    }

    /// Transition to completed, recording the given note
    pub fn mark_completed(&mut self, note: &str) -> GatewayResult<()> {
        if self.status != OrderStatus::Pending {
            return Err(GatewayError::InvalidState {
                expected: OrderStatus::Pending.to_string(),
                actual: self.status.to_string(),
            });
        }

        self.status = OrderStatus::Completed;
        self.order_note = Some(note.to_string());
        self.paid_at = Some(Utc::now());
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether payment has gone through
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}
