use crate::domain::ListingContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Resolved merchant settings for the MobileCoin Payments gateway,
/// plus the shop's own base URL. Loaded once at startup and immutable
/// for the gateway's lifetime; the declarative schema behind these
/// values lives in `domain::config_schema`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Merchant enabled the gateway
    pub enabled: bool,

    /// Public store API key, sent as `Authorization: Api-Key ...`
    pub public_api_key: String,

    /// Secret store API key. Reserved for sensitive operations such as
    /// listing payment intents; unused by the checkout flow.
    pub secret_api_key: String,

    /// Remote processor endpoint receiving the payment request
    pub endpoint_url: String,

    /// Payment method title shown in checkout
    pub title: String,

    /// Payment method description shown in checkout
    pub description: String,

    /// Free text rendered on the thank-you page when non-empty
    pub instructions: String,

    /// Base URL of the shop, used for success/cancel/return URLs
    pub site_url: String,
}

impl GatewayConfig {
    pub fn from_env() -> Arc<Self> {
        Arc::new(Self {
            enabled: std::env::var("MOBILECOIN_ENABLED")
                .map(|v| v == "yes" || v == "true" || v == "1")
                .unwrap_or(false),
            public_api_key: std::env::var("MOBILECOIN_PUBLIC_API_KEY").unwrap_or_default(),
            secret_api_key: std::env::var("MOBILECOIN_SECRET_API_KEY").unwrap_or_default(),
            endpoint_url: std::env::var("MOBILECOIN_ENDPOINT_URL").unwrap_or_else(|_| {
                "https://payments.mobilecoin.com/api/hosted-payments-page/".to_string()
            }),
            title: std::env::var("MOBILECOIN_TITLE")
                .unwrap_or_else(|_| "MobileCoin Payments Gateway".to_string()),
            description: std::env::var("MOBILECOIN_DESCRIPTION").unwrap_or_else(|_| {
                "Please remit your payment to the shop to allow for the delivery to be made"
                    .to_string()
            }),
            instructions: std::env::var("MOBILECOIN_INSTRUCTIONS").unwrap_or_default(),
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }

    /// Whether the gateway shows up in a payment-method listing.
    /// Storefront listings require a public API key, an endpoint URL
    /// and a title; admin listings always include the gateway so it
    /// can be configured before it is usable.
    pub fn available_in(&self, context: ListingContext) -> bool {
        match context {
            ListingContext::Admin => true,
            ListingContext::Storefront => {
                !self.public_api_key.is_empty()
                    && !self.endpoint_url.is_empty()
                    && !self.title.is_empty()
            }
        }
    }

    /// Callback URL the processor redirects to after payment, carrying
    /// the order id and key that re-identify and authorize the order
    pub fn success_url(&self, order_id: u64, order_key: &str) -> String {
        format!(
            "{}/wc-api/mobilecoin-payment-complete?order_id={}&order_key={}",
            self.site_url, order_id, order_key
        )
    }

    /// Storefront checkout page, used as the cancel target
    pub fn cancel_url(&self) -> String {
        format!("{}/checkout/", self.site_url)
    }

    /// Order-received (thank-you) page for a completed order
    pub fn order_received_url(&self, order_id: u64, order_key: &str) -> String {
        format!(
            "{}/checkout/order-received/{}/?key={}",
            self.site_url, order_id, order_key
        )
    }
}
