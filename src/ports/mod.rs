pub mod order_store_port;
pub mod processor_port;

pub use order_store_port::OrderStorePort;
pub use processor_port::PaymentProcessorPort;
