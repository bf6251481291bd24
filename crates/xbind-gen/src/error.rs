//! Generation error types.

/// Errors that can occur during binding generation.
///
/// All of these are generation-time failures: they abort before any output
/// is produced and are never surfaced to users of the generated module.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Two declared functions share a name.
    #[error("duplicate function name: {name}")]
    DuplicateFunction { name: String },

    /// A function flagged custom has no custom binding entry.
    #[error("missing custom binding for function: {name}")]
    MissingCustomBinding { name: String },

    /// A function name cannot be exported as a JavaScript identifier.
    #[error("function name is not a valid JavaScript identifier: {name}")]
    InvalidIdentifier { name: String },

    /// Failed to parse a descriptor or custom bindings file.
    #[error("invalid module descriptor: {detail}")]
    InvalidDescriptor { detail: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
