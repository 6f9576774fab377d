pub mod adapters;
pub mod config;

pub use adapters::{HostedPageAdapter, InMemoryOrderStore};
pub use config::GatewayConfig;
