use crate::application::{
    CheckoutNotice, CheckoutResponse, CompletionParams, CreateOrderRequest, ErrorResponse,
    GatewayService, OrderResponse,
};
use crate::domain::errors::GatewayError;
use crate::domain::{FiatAmount, ListingContext};
use crate::ports::{OrderStorePort, PaymentProcessorPort};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Application state
pub struct AppState<P: PaymentProcessorPort, S: OrderStorePort> {
    pub gateway: Arc<GatewayService<P, S>>,
    pub store: Arc<S>,
}

impl<P: PaymentProcessorPort, S: OrderStorePort> Clone for AppState<P, S> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            store: self.store.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub context: Option<ListingContext>,
}

/// Create an order (host-platform seam): allocates an id and a secret
/// order key, stores the order pending
pub async fn create_order<P: PaymentProcessorPort, S: OrderStorePort>(
    State(state): State<AppState<P, S>>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let total = FiatAmount::new(request.total, request.currency);

    state
        .store
        .create_order(total, request.items)
        .await
        .map(|order| (StatusCode::CREATED, Json(OrderResponse::from(order))))
        .map_err(|e| {
            error!("Order creation error: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ORDER_ERROR".to_string(), e.to_string())),
            )
        })
}

/// Payment methods available in a listing context. Defaults to the
/// storefront view, which applies the configuration gate.
pub async fn list_payment_methods<P: PaymentProcessorPort, S: OrderStorePort>(
    State(state): State<AppState<P, S>>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let context = query.context.unwrap_or(ListingContext::Storefront);
    Json(state.gateway.payment_methods(context))
}

/// Declarative settings schema for the admin UI
pub async fn gateway_fields<P: PaymentProcessorPort, S: OrderStorePort>(
    State(state): State<AppState<P, S>>,
) -> impl IntoResponse {
    Json(state.gateway.describe())
}

/// Initiate payment for an order. On success the shopper is redirected
/// to the hosted payment page; on failure a notice with the raw
/// processor response is surfaced and the shopper stays on checkout.
pub async fn create_checkout<P: PaymentProcessorPort, S: OrderStorePort>(
    State(state): State<AppState<P, S>>,
    Path(order_id): Path<u64>,
) -> axum::response::Response {
    info!("Received checkout request for order: {}", order_id);

    match state.gateway.initiate(order_id).await {
        Ok(redirect) => {
            (StatusCode::OK, Json(CheckoutResponse::success(redirect))).into_response()
        }
        Err(GatewayError::OrderNotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "ORDER_NOT_FOUND".to_string(),
                format!("Order not found: {}", id),
            )),
        )
            .into_response(),
        Err(GatewayError::ProcessorRejected { body }) => {
            error!("Payment initiation rejected for order {}", order_id);
            (StatusCode::BAD_GATEWAY, Json(CheckoutNotice::error(&body))).into_response()
        }
        Err(e) => {
            error!("Payment initiation error for order {}: {}", order_id, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(CheckoutNotice::error(&e.to_string())),
            )
                .into_response()
        }
    }
}

/// Completion callback the processor redirects the shopper to after
/// payment. A matching order key finalizes the order and redirects to
/// the order-received page; anything else is a silent no-op.
pub async fn payment_complete<P: PaymentProcessorPort, S: OrderStorePort>(
    State(state): State<AppState<P, S>>,
    Query(params): Query<CompletionParams>,
) -> axum::response::Response {
    match state.gateway.complete(params).await {
        Ok(return_url) => Redirect::temporary(&return_url).into_response(),
        Err(GatewayError::OrderKeyMismatch(_)) | Err(GatewayError::OrderNotFound(_)) => {
            // The only access control on this endpoint: drop silently
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!("Completion callback error: {}", e);
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

/// Thank-you (order-received) page with the merchant's instructions
/// when configured
pub async fn thank_you_page<P: PaymentProcessorPort, S: OrderStorePort>(
    State(state): State<AppState<P, S>>,
    Path(order_id): Path<u64>,
) -> Result<Html<String>, StatusCode> {
    let order = state
        .store
        .find_by_id(order_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut page = format!(
        "<h2>Thank you. Your order #{} has been received.</h2>\n",
        order.id
    );
    if let Some(instructions) = state.gateway.thank_you_instructions() {
        page.push_str(&autop(instructions));
    }

    Ok(Html(page))
}

/// Admin order screen addition: the stored `api_response` metadata as
/// preformatted text. Read-only.
pub async fn admin_api_response<P: PaymentProcessorPort, S: OrderStorePort>(
    State(state): State<AppState<P, S>>,
    Path(order_id): Path<u64>,
) -> Result<Html<String>, StatusCode> {
    let meta = state
        .gateway
        .api_response_meta(order_id)
        .await
        .map_err(|e| match e {
            GatewayError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        })?;

    let mut page = "<h3><strong>Meta: API JSON Response:</strong></h3>\n".to_string();
    if let Some(meta) = meta {
        page.push_str(&format!("<pre>{}</pre>", escape_html(&meta)));
    }

    Ok(Html(page))
}

/// Health check
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// Paragraph-format free text: blank-line-separated blocks become
/// `<p>` elements, remaining single newlines become `<br/>`
pub fn autop(text: &str) -> String {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| format!("<p>{}</p>\n", block.trim().replace('\n', "<br/>\n")))
        .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
