//! Bridge error types.

/// Errors that can occur during a synchronous bridge exchange.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A request value cannot be represented in the wire format.
    #[error("marshal error: {detail}")]
    Marshal { detail: String },

    /// The reply text is malformed or missing the expected payload.
    #[error("protocol error: {detail}")]
    Protocol { detail: String },
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
