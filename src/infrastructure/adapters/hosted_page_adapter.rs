use crate::domain::errors::{GatewayError, GatewayResult};
use crate::infrastructure::config::gateway_config::GatewayConfig;
use crate::ports::processor_port::{HostedPaymentRequest, PaymentProcessorPort, ProcessorResponse};
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error};

/// Remote processor adapter: one HTTP/1.1 POST per checkout attempt.
/// Redirects are followed up to 10 hops and no client-side timeout is
/// set, matching the upstream contract (the processor may be slow).
#[derive(Clone)]
pub struct HostedPageAdapter {
    config: Arc<GatewayConfig>,
    client: Client,
}

impl HostedPageAdapter {
    pub fn new(config: Arc<GatewayConfig>) -> GatewayResult<Self> {
        let client = Client::builder()
            .http1_only()
            .redirect(Policy::limited(10))
            .build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl PaymentProcessorPort for HostedPageAdapter {
    async fn create_hosted_payment(
        &self,
        request: &HostedPaymentRequest,
    ) -> GatewayResult<ProcessorResponse> {
        let body_str = serde_json::to_string(request)?;
        debug!("Hosted payment request body: {}", body_str);

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .header(
                "Authorization",
                format!("Api-Key {}", self.config.public_api_key),
            )
            .header("Content-Type", "application/json")
            .body(body_str)
            .send()
            .await?;

        // The HTTP status is deliberately ignored; only the presence
        // of `urls.payment_page` in the body decides success.
        let raw = response.text().await?;
        debug!("Hosted payment response body: {}", raw);

        let json: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(json) => json,
            Err(e) => {
                error!("Processor returned non-JSON body: {}", e);
                return Err(GatewayError::ProcessorRejected { body: raw });
            }
        };

        Ok(ProcessorResponse { raw, json })
    }
}
