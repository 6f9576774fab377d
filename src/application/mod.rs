pub mod dto;
pub mod gateway_service;

pub use dto::{
    CheckoutNotice, CheckoutResponse, CompletionParams, CreateOrderRequest, ErrorResponse,
    MethodDescriptor, OrderResponse,
};
pub use gateway_service::GatewayService;
