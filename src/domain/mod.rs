pub mod config_schema;
pub mod entities;
pub mod errors;
pub mod events;
pub mod value_objects;

pub use config_schema::{mobilecoin_config_schema, ConfigField, ConfigSchema, FieldType};
pub use entities::{LineItem, Order};
pub use errors::{GatewayError, GatewayResult};
pub use events::*;
pub use value_objects::{FiatAmount, ListingContext, OrderStatus};
