//! Synchronous bridge runtime for extension modules.
//!
//! Generated stubs proxy every call to the host runtime over a serialized
//! message channel: one JSON request out, one JSON reply back, blocking the
//! caller for the duration of the exchange. This crate is the Rust model of
//! that protocol — the wire types and the runtime that drives the host's
//! blocking send primitive.
//!
//! ## Modules
//!
//! - [`protocol`] — `Request`/`Response` wire types
//! - [`runtime`] — `SyncBridge` over an injected host primitive
//! - [`error`] — `BridgeError` taxonomy

pub mod error;
pub mod protocol;
pub mod runtime;

pub use error::BridgeError;
pub use protocol::{Request, Response};
pub use runtime::SyncBridge;
