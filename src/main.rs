use mobilecoin_payments::api::{self, AppState};
use mobilecoin_payments::application::GatewayService;
use mobilecoin_payments::domain::ListingContext;
use mobilecoin_payments::infrastructure::{GatewayConfig, HostedPageAdapter, InMemoryOrderStore};
use std::sync::Arc;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    info!("Starting MobileCoin Payments gateway...");

    let config = GatewayConfig::from_env();
    info!("Gateway configuration loaded for shop: {}", config.site_url);
    if !config.available_in(ListingContext::Storefront) {
        warn!("Gateway is not fully configured; it will be hidden from storefront checkouts");
    }

    let processor = Arc::new(HostedPageAdapter::new(config.clone())?);
    let store = Arc::new(InMemoryOrderStore::new());

    let gateway = Arc::new(GatewayService::new(
        processor,
        store.clone(),
        config.clone(),
    ));

    let app_state = AppState { gateway, store };

    let app = api::create_router(app_state);

    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    info!("Server listening on {}", addr);
    info!("Available endpoints:");
    info!("  GET  /health - Health check");
    info!("  POST /api/orders - Create order (host seam)");
    info!("  GET  /api/payment-methods - List payment methods");
    info!("  GET  /api/payment-methods/mobilecoin/fields - Settings schema");
    info!("  POST /api/checkout/:order_id - Initiate payment");
    info!("  GET  /wc-api/mobilecoin-payment-complete - Completion callback");
    info!("  GET  /checkout/order-received/:order_id - Thank-you page");
    info!("  GET  /admin/orders/:order_id/api-response - Order metadata (admin)");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
