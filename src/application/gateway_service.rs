use crate::application::dto::{CompletionParams, MethodDescriptor};
use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::events::{DomainEvent, PaymentCompleted, PaymentInitiated};
use crate::domain::{mobilecoin_config_schema, ConfigSchema, ListingContext, Order};
use crate::infrastructure::config::GatewayConfig;
use crate::ports::processor_port::{HostedPaymentRequest, PaymentDetails};
use crate::ports::{OrderStorePort, PaymentProcessorPort};
use std::sync::Arc;
use tracing::{debug, info};

/// Payment requests expire 10 minutes after initiation
const PAYMENT_WINDOW_SECS: i64 = 10 * 60;

/// Note recorded on the order when the completion callback succeeds
const COMPLETION_NOTE: &str = "MobileCoin Payment Completed";

/// The payment gateway adapter: builds the outbound payment request,
/// interprets the processor response, and finalizes orders on the
/// completion callback.
pub struct GatewayService<P: PaymentProcessorPort, S: OrderStorePort> {
    processor: Arc<P>,
    store: Arc<S>,
    config: Arc<GatewayConfig>,
}

impl<P: PaymentProcessorPort, S: OrderStorePort> GatewayService<P, S> {
    pub fn new(processor: Arc<P>, store: Arc<S>, config: Arc<GatewayConfig>) -> Self {
        Self {
            processor,
            store,
            config,
        }
    }

    /// Declarative settings schema for the host admin UI
    pub fn describe(&self) -> ConfigSchema {
        mobilecoin_config_schema()
    }

    /// Payment methods visible in the given context. Storefront
    /// listings apply the configuration-completeness gate.
    pub fn payment_methods(&self, context: ListingContext) -> Vec<MethodDescriptor> {
        if self.config.available_in(context) {
            vec![MethodDescriptor {
                id: "mobilecoin_payments".to_string(),
                title: self.config.title.clone(),
                description: self.config.description.clone(),
            }]
        } else {
            vec![]
        }
    }

    async fn resolve_order(&self, order_id: u64) -> GatewayResult<Order> {
        self.store
            .find_by_id(order_id)
            .await?
            .ok_or(GatewayError::OrderNotFound(order_id))
    }

    /// Initiate payment for an order: one POST to the processor, and
    /// on success the hosted payment page URL to redirect to. The full
    /// response is persisted as `api_response` order metadata.
    pub async fn initiate(&self, order_id: u64) -> GatewayResult<String> {
        info!("Initiating payment for order: {}", order_id);

        let order = self.resolve_order(order_id).await?;

        // 1. Build the payment request
        let request = HostedPaymentRequest {
            payment: PaymentDetails {
                description: format!("{} Order #{}", self.config.site_url, order.id),
                fiat_amount: order.total.amount,
                fiat_amount_currency: order.total.currency.clone(),
                expires_at: chrono::Utc::now().timestamp() + PAYMENT_WINDOW_SECS,
            },
            success_url: self.config.success_url(order.id, &order.order_key),
            cancel_url: self.config.cancel_url(),
        };

        // 2. Call the remote processor, single attempt
        let response = self.processor.create_hosted_payment(&request).await?;

        // 3. Only `urls.payment_page` decides success
        let Some(payment_page) = response.payment_page_url() else {
            debug!("Processor response has no payment page for order {}", order_id);
            return Err(GatewayError::ProcessorRejected { body: response.raw });
        };
        let payment_page = payment_page.to_string();

        // 4. Keep the full response for audit/debugging
        let pretty = serde_json::to_string_pretty(&response.json)?;
        self.store.attach_api_response(order.id, &pretty).await?;

        let event = PaymentInitiated::new(&order, &payment_page);
        info!(
            "{} for order {}: redirecting to {} (event {})",
            event.event_type(),
            order.id,
            payment_page,
            event.event_id
        );

        Ok(payment_page)
    }

    /// Completion callback: verify the supplied order key, finalize
    /// the order, clear the cart, and return the order-received URL to
    /// redirect to. Key mismatches come back as errors the route layer
    /// turns into a silent no-op.
    pub async fn complete(&self, params: CompletionParams) -> GatewayResult<String> {
        let order = self.resolve_order(params.order_id).await?;

        if !order.key_matches(&params.order_key) {
            return Err(GatewayError::OrderKeyMismatch(params.order_id));
        }

        // A correct-key hit on an already-completed order still gets
        // the redirect; the side effects ran on the first hit.
        if order.is_paid() {
            return Ok(self.config.order_received_url(order.id, &order.order_key));
        }

        let completed = self
            .store
            .payment_complete(order.id, COMPLETION_NOTE)
            .await?;
        self.store.clear_cart().await?;

        let event = PaymentCompleted::new(&completed);
        info!(
            "{} for order {} (event {})",
            event.event_type(),
            completed.id,
            event.event_id
        );

        Ok(self
            .config
            .order_received_url(completed.id, &completed.order_key))
    }

    /// Merchant instructions for the thank-you page, when configured
    pub fn thank_you_instructions(&self) -> Option<&str> {
        if self.config.instructions.is_empty() {
            None
        } else {
            Some(&self.config.instructions)
        }
    }

    /// Stored `api_response` metadata for the admin order screen
    pub async fn api_response_meta(&self, order_id: u64) -> GatewayResult<Option<String>> {
        let order = self.resolve_order(order_id).await?;
        Ok(order.api_response)
    }
}
