//! Ledger access for the Tormentor AMM.
//!
//! This crate talks to an IOTA full node and turns raw objects into domain
//! records:
//! - JSON-RPC object reads
//! - Registry decoding and pool state hydration
//! - Unsigned Move call payloads for the AMM package

/// Environment-driven configuration.
pub mod config;
/// Decoders for on-chain field shapes.
pub mod decode;
/// Error types.
pub mod error;
/// Pool state hydration.
pub mod hydrator;
/// Registry, hydration and token derivation in one pass.
pub mod market;
/// Prelude module for convenient imports.
pub mod prelude;
/// Pool registry decoding.
pub mod registry;
/// Fallback combinator for best-effort reads.
pub mod resilient;
/// JSON-RPC transport.
pub mod rpc;
/// Move call payload builders.
pub mod transaction;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use error::ProtocolError;
use serde_json::{Map, Value};

/// Read access to ledger objects.
#[async_trait]
pub trait ObjectReader: Send + Sync {
    /// Fetches an object with its content, as returned by the node.
    async fn get_object(&self, object_id: &str) -> Result<Value, ProtocolError>;
}

/// Returns the Move struct fields of an object response.
///
/// Accepts both `{ data: { content: { fields } } }` and `{ content: { fields } }`.
pub fn content_fields(object: &Value) -> Option<&Map<String, Value>> {
    object
        .pointer("/data/content/fields")
        .or_else(|| object.pointer("/content/fields"))
        .and_then(Value::as_object)
}
