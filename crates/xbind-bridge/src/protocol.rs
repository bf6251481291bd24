//! Wire protocol types for the synchronous bridge.
//!
//! A request is a JSON object with exactly two top-level fields: `cmd` (the
//! function name) and `args` (the call's arguments, captured positionally).
//! A reply is a JSON object with at least a `data` field; any additional
//! reply fields are accepted on the wire but never surfaced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BridgeError, Result};

/// A single synchronous request: a command name and positional arguments.
///
/// Arity is unconstrained — zero, one, or many arguments are all valid, and
/// no argument types are declared or checked here. Enforcement belongs to
/// the host-side dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Wire command name (the declared function name).
    pub cmd: String,
    /// Positional arguments, in call order.
    pub args: Vec<Value>,
}

impl Request {
    /// A request with no arguments.
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            args: Vec::new(),
        }
    }

    /// Append one positional argument, converting it to a wire value.
    ///
    /// Fails with [`BridgeError::Marshal`] when the value has no wire
    /// representation (e.g., a map with non-string keys).
    pub fn arg<T: Serialize>(mut self, value: T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| BridgeError::Marshal {
            detail: e.to_string(),
        })?;
        self.args.push(value);
        Ok(self)
    }
}

/// A reply from the host dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// The sole extracted payload, passed through uninterpreted.
    pub data: Value,
    // Extra reply fields are tolerated but not part of the surfaced contract.
    #[serde(flatten, default)]
    extra: serde_json::Map<String, Value>,
}

impl Response {
    /// A reply carrying `data` and nothing else.
    pub fn new(data: Value) -> Self {
        Self {
            data,
            extra: serde_json::Map::new(),
        }
    }
}
