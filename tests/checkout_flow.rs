use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use mobilecoin_payments::api::{create_router, AppState};
use mobilecoin_payments::application::GatewayService;
use mobilecoin_payments::domain::{LineItem, OrderStatus};
use mobilecoin_payments::infrastructure::{
    GatewayConfig, HostedPageAdapter, InMemoryOrderStore,
};
use mobilecoin_payments::ports::OrderStorePort;
use std::sync::Arc;
use tower::ServiceExt;

const GRANTED: &str = r#"{"urls":{"payment_page":"https://pay.example/p/123"}}"#;

/// Throwaway remote processor answering every POST with a fixed body
async fn spawn_processor(body: &'static str) -> String {
    let app = Router::new().route("/", post(move || async move { body }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

async fn test_app(processor_body: &'static str) -> (Router, Arc<InMemoryOrderStore>) {
    let config = Arc::new(GatewayConfig {
        enabled: true,
        public_api_key: "pk_test".to_string(),
        secret_api_key: String::new(),
        endpoint_url: spawn_processor(processor_body).await,
        title: "MobileCoin Payments Gateway".to_string(),
        description: "Pay with MobileCoin".to_string(),
        instructions: "Pay promptly.\n\nKeep your receipt.".to_string(),
        site_url: "https://shop.example".to_string(),
    });

    let processor = Arc::new(HostedPageAdapter::new(config.clone()).unwrap());
    let store = Arc::new(InMemoryOrderStore::new());
    let gateway = Arc::new(GatewayService::new(
        processor,
        store.clone(),
        config,
    ));

    (create_router(AppState { gateway, store: store.clone() }), store)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_order(app: &Router) -> (u64, String) {
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"total":"42.50","currency":"USD","items":[{"product_id":7,"quantity":2}]}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["id"].as_u64().unwrap(),
        json["order_key"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn checkout_happy_path() {
    let (app, store) = test_app(GRANTED).await;
    store.set_stock(7, 5).await;
    store
        .fill_cart(vec![LineItem {
            product_id: 7,
            quantity: 2,
        }])
        .await;

    let (order_id, order_key) = create_order(&app).await;
    assert!(order_key.starts_with("wc_order_"));

    // initiation redirects to the hosted payment page
    let response = app
        .clone()
        .oneshot(
            Request::post(format!("/api/checkout/{}", order_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"], "success");
    assert_eq!(json["redirect"], "https://pay.example/p/123");

    // completion callback with the right key finalizes the order
    let response = app
        .clone()
        .oneshot(
            Request::get(format!(
                "/wc-api/mobilecoin-payment-complete?order_id={}&order_key={}",
                order_id, order_key
            ))
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!(
            "https://shop.example/checkout/order-received/{}/?key={}",
            order_id, order_key
        )
    );

    let order = store.find_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(store.stock_of(7).await, Some(3));
    assert_eq!(store.cart_len().await, 0);

    // thank-you page renders the merchant instructions
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/checkout/order-received/{}", order_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("<p>Pay promptly.</p>"));
    assert!(page.contains("<p>Keep your receipt.</p>"));

    // admin screen shows the persisted processor response
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/admin/orders/{}/api-response", order_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("<pre>"));
    assert!(page.contains("https://pay.example/p/123"));
}

#[tokio::test]
async fn reloading_the_completion_url_redirects_again() {
    let (app, store) = test_app(GRANTED).await;
    store.set_stock(7, 5).await;
    let (order_id, order_key) = create_order(&app).await;

    let callback = format!(
        "/wc-api/mobilecoin-payment-complete?order_id={}&order_key={}",
        order_id, order_key
    );
    let expected_location = format!(
        "https://shop.example/checkout/order-received/{}/?key={}",
        order_id, order_key
    );

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(Request::get(&*callback).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], expected_location);
    }

    // the completing side effects ran exactly once
    let order = store.find_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(store.stock_of(7).await, Some(3));
}

#[tokio::test]
async fn completion_with_wrong_key_is_silent() {
    let (app, store) = test_app(GRANTED).await;
    let (order_id, _order_key) = create_order(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::get(format!(
                "/wc-api/mobilecoin-payment-complete?order_id={}&order_key=wc_order_guessed",
                order_id
            ))
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.headers().get(header::LOCATION).is_none());

    let order = store.find_by_id(order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn rejected_initiation_surfaces_raw_body() {
    let (app, store) = test_app(r#"{"error":"invalid_key"}"#).await;
    let (order_id, _) = create_order(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::post(format!("/api/checkout/{}", order_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["result"], "failure");
    let notice = json["notice"].as_str().unwrap();
    assert!(notice.starts_with("Payment error:"));
    assert!(notice.contains(r#"{"error":"invalid_key"}"#));

    let order = store.find_by_id(order_id).await.unwrap().unwrap();
    assert!(order.api_response.is_none());
}

#[tokio::test]
async fn checkout_for_unknown_order_is_404() {
    let (app, _store) = test_app(GRANTED).await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/checkout/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn storefront_listing_applies_configuration_gate() {
    // fully configured: visible in both contexts
    let (app, _store) = test_app(GRANTED).await;
    let response = app
        .clone()
        .oneshot(
            Request::get("/api/payment-methods")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], "mobilecoin_payments");

    // missing public key: hidden from the storefront, kept in admin
    let config = Arc::new(GatewayConfig {
        enabled: true,
        public_api_key: String::new(),
        secret_api_key: String::new(),
        endpoint_url: "https://payments.mobilecoin.com/api/hosted-payments-page/".to_string(),
        title: "MobileCoin Payments Gateway".to_string(),
        description: String::new(),
        instructions: String::new(),
        site_url: "https://shop.example".to_string(),
    });
    let processor = Arc::new(HostedPageAdapter::new(config.clone()).unwrap());
    let store = Arc::new(InMemoryOrderStore::new());
    let gateway = Arc::new(GatewayService::new(processor, store.clone(), config));
    let app = create_router(AppState { gateway, store });

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/payment-methods?context=storefront")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/payment-methods?context=admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn settings_schema_lists_all_fields() {
    let (app, _store) = test_app(GRANTED).await;

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/payment-methods/mobilecoin/fields")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["gateway_id"], "mobilecoin_payments");
    let keys: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        [
            "enabled",
            "public_api_key",
            "secret_api_key",
            "endpoint_url",
            "title",
            "description",
            "instructions"
        ]
    );
}
