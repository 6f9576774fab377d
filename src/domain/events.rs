use crate::domain::entities::Order;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain event trait
pub trait DomainEvent {
    fn event_type(&self) -> &'static str;
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// A payment request was sent to the remote processor and a hosted
/// payment page came back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInitiated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub order_id: u64,
    pub amount: String,
    pub currency: String,
    pub payment_page: String,
}

impl DomainEvent for PaymentInitiated {
    fn event_type(&self) -> &'static str {
        "PaymentInitiated"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl PaymentInitiated {
    pub fn new(order: &Order, payment_page: &str) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            order_id: order.id,
            amount: order.total.amount.to_string(),
            currency: order.total.currency.clone(),
            payment_page: payment_page.to_string(),
        }
    }
}

/// The completion callback verified the order key and the order was
/// marked paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub order_id: u64,
    pub amount: String,
    pub currency: String,
}

impl DomainEvent for PaymentCompleted {
    fn event_type(&self) -> &'static str {
        "PaymentCompleted"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl PaymentCompleted {
    pub fn new(order: &Order) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            order_id: order.id,
            amount: order.total.amount.to_string(),
            currency: order.total.currency.clone(),
        }
    }
}
