use super::handlers::*;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn create_router<P, S>(state: AppState<P, S>) -> Router
where
    P: crate::ports::PaymentProcessorPort + 'static,
    S: crate::ports::OrderStorePort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/orders", post(create_order))
        .route("/api/payment-methods", get(list_payment_methods))
        .route("/api/payment-methods/mobilecoin/fields", get(gateway_fields))
        .route("/api/checkout/:order_id", post(create_checkout))
        .route(
            "/wc-api/mobilecoin-payment-complete",
            get(payment_complete),
        )
        .route("/checkout/order-received/:order_id", get(thank_you_page))
        .route(
            "/admin/orders/:order_id/api-response",
            get(admin_api_response),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
