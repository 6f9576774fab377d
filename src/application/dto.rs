use crate::domain::{LineItem, Order};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order intake request (the host-platform seam)
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Order total
    pub total: Decimal,

    /// ISO-4217-style currency code
    pub currency: String,

    /// Purchased items
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Order as returned to the host side
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: u64,
    pub order_key: String,
    pub total: Decimal,
    pub currency: String,
    pub status: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_key: order.order_key,
            total: order.total.amount,
            currency: order.total.currency,
            status: order.status.to_string(),
        }
    }
}

/// Successful checkout initiation: redirect the shopper to the hosted
/// payment page
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub result: String,
    pub redirect: String,
}

impl CheckoutResponse {
    pub fn success(redirect: String) -> Self {
        Self {
            result: "success".to_string(),
            redirect,
        }
    }
}

/// Failed checkout initiation: the shopper stays on the checkout page
/// and sees this notice
#[derive(Debug, Serialize)]
pub struct CheckoutNotice {
    pub result: String,
    pub notice: String,
}

impl CheckoutNotice {
    pub fn error(raw_body: &str) -> Self {
        Self {
            result: "failure".to_string(),
            notice: format!("Payment error: {}", raw_body),
        }
    }
}

/// Completion callback query parameters. Attacker-controlled input;
/// the order key is the only authorization check.
#[derive(Debug, Deserialize)]
pub struct CompletionParams {
    pub order_id: u64,
    pub order_key: String,
}

/// One entry of a payment-method listing
#[derive(Debug, Serialize)]
pub struct MethodDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: String, message: String) -> Self {
        Self { error, message }
    }
}
