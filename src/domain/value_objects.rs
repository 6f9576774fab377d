use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status, mirroring the host platform's lifecycle. The gateway
/// only ever drives the pending -> completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Awaiting payment
    Pending,
    /// Payment received, order fulfilled
    Completed,
    /// Cancelled by shopper or merchant
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Where a payment-method listing is being rendered. Storefront
/// listings are gated on configuration completeness; admin listings
/// always include the gateway so merchants can configure it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingContext {
    Storefront,
    Admin,
}

/// A fiat amount with its ISO-4217-style currency code. Totals stay
/// exact decimals end to end; the processor receives them as decimal
/// strings, never floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatAmount {
    pub amount: Decimal,
    pub currency: String,
}

impl FiatAmount {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
