pub mod hosted_page_adapter;
pub mod in_memory_order_store;

pub use hosted_page_adapter::HostedPageAdapter;
pub use in_memory_order_store::InMemoryOrderStore;
