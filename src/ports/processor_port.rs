use crate::domain::errors::GatewayResult;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment block of the outbound request, as the remote processor
/// expects it. `fiat_amount` serializes as a decimal string and
/// `expires_at` as a unix timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub description: String,
    pub fiat_amount: Decimal,
    pub fiat_amount_currency: String,
    pub expires_at: i64,
}

/// Full payload of the hosted-payment-page request. `success_url`
/// carries the order id and order key back to the completion callback;
/// `cancel_url` returns the shopper to the storefront checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedPaymentRequest {
    pub payment: PaymentDetails,
    pub success_url: String,
    pub cancel_url: String,
}

/// The processor response: parsed JSON plus the raw body text. The raw
/// text is kept because failures surface it verbatim to the shopper.
#[derive(Debug, Clone)]
pub struct ProcessorResponse {
    pub raw: String,
    pub json: serde_json::Value,
}

impl ProcessorResponse {
    /// The hosted payment page URL, when the processor granted one.
    /// `urls.payment_page` is the only field the gateway consumes.
    pub fn payment_page_url(&self) -> Option<&str> {
        self.json.get("urls")?.get("payment_page")?.as_str()
    }
}

/// Outbound port to the remote payment processor
#[async_trait]
pub trait PaymentProcessorPort: Send + Sync {
    /// Request a hosted payment page. One attempt, no retry; the
    /// shopper re-submitting checkout is the retry mechanism.
    async fn create_hosted_payment(
        &self,
        request: &HostedPaymentRequest,
    ) -> GatewayResult<ProcessorResponse>;
}
