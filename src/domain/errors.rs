use thiserror::Error;

/// Gateway error taxonomy
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Input failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Order not found in the host store
    #[error("Order not found: {0}")]
    OrderNotFound(u64),

    /// Order is not in the state the operation requires
    #[error("Invalid order state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// The remote processor answered, but not with a payment page.
    /// Carries the raw response body so the checkout notice can show
    /// it to the shopper verbatim.
    #[error("Payment error: {body}")]
    ProcessorRejected { body: String },

    /// Completion callback supplied a key that does not match the
    /// order's stored key. Handled as a silent no-op, never surfaced.
    #[error("Order key mismatch for order {0}")]
    OrderKeyMismatch(u64),

    /// HTTP transport failure talking to the processor
    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Gateway configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Gateway result type
pub type GatewayResult<T> = Result<T, GatewayError>;
