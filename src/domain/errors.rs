use thiserror::Error;

/// Errors surfaced to the UI layer by the cart manager. No retries happen
/// internally; a failed checkout leaves the cart exactly as it was.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Sign in to place an order")]
    AuthenticationRequired,

    #[error("Delivery profile incomplete, missing: {}", fields.join(", "))]
    IncompleteProfile { fields: Vec<&'static str> },

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error("Order submission failed: {0}")]
    OrderSubmissionFailed(#[from] GatewayError),
}

/// Errors from the durable cart snapshot store. Mutations treat these as
/// best-effort: the in-memory state change still stands.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt cart snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors from the order-creation endpoint.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Order endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Unreadable response from order endpoint: {0}")]
    InvalidResponse(String),
}
