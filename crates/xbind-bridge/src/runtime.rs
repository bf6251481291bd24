//! Synchronous bridge runtime.
//!
//! Performs exactly one request/response exchange per call over an injected
//! blocking host primitive. The runtime is stateless across calls: no
//! connection, session, or sequence numbers — each invocation serializes one
//! request, blocks on the host, and parses one reply.

use serde_json::Value;

use crate::error::{BridgeError, Result};
use crate::protocol::{Request, Response};

/// Request/response marshaling over a host's blocking send primitive.
///
/// The host primitive is a single function value taking the serialized
/// request text and returning the reply text. It is assumed synchronous and
/// always-returning; timeout and retry behavior, if any, live on the host
/// side.
pub struct SyncBridge<H>
where
    H: Fn(&str) -> String,
{
    host: H,
}

impl<H> SyncBridge<H>
where
    H: Fn(&str) -> String,
{
    /// Wrap a host send primitive.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Perform one synchronous exchange: serialize, send, parse.
    ///
    /// Fails with [`BridgeError::Marshal`] when the request cannot be
    /// serialized and [`BridgeError::Protocol`] when the reply is not a JSON
    /// object carrying `data`. Neither failure is retried.
    pub fn send_sync_message(&self, req: &Request) -> Result<Response> {
        let text = serde_json::to_string(req).map_err(|e| BridgeError::Marshal {
            detail: e.to_string(),
        })?;
        let reply = (self.host)(&text);
        serde_json::from_str(&reply).map_err(|e| BridgeError::Protocol {
            detail: e.to_string(),
        })
    }

    /// Stub-shaped call: send `{cmd, args}` and return the reply's `data`.
    pub fn call(&self, cmd: &str, args: Vec<Value>) -> Result<Value> {
        let req = Request {
            cmd: cmd.to_string(),
            args,
        };
        let resp = self.send_sync_message(&req)?;
        Ok(resp.data)
    }
}
