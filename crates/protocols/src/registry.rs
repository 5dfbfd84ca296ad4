//! Pool registry reader.
//!
//! The registry object lists every pool as `{ token0, token1, pool_id }`,
//! with the coin types stored as byte vectors.

use crate::decode::decode_bytes_field;
use crate::error::ProtocolError;
use crate::resilient::resilient;
use crate::{ObjectReader, content_fields};
use serde_json::Value;
use std::sync::Arc;
use tormentor_domain::{Pool, fallback_pools, resolve_coin};
use tracing::{debug, warn};

/// Reads pool descriptors from the registry object.
pub struct PoolRegistryReader<R: ?Sized> {
    reader: Option<Arc<R>>,
    registry_id: Option<String>,
}

impl<R: ObjectReader + ?Sized> PoolRegistryReader<R> {
    /// Creates a reader. Either argument may be absent, in which case
    /// [`get_pools`](Self::get_pools) serves the fallback list.
    pub fn new(reader: Option<Arc<R>>, registry_id: Option<String>) -> Self {
        Self {
            reader,
            registry_id: registry_id.filter(|id| !id.is_empty()),
        }
    }

    /// Returns the registered pools without live state.
    ///
    /// Never fails: missing configuration, RPC errors and an empty or
    /// malformed registry all yield the fallback list.
    pub async fn get_pools(&self) -> Vec<Pool> {
        let (Some(reader), Some(registry_id)) = (&self.reader, self.registry_id.as_deref()) else {
            debug!("No ledger reader or registry configured, using fallback pools");
            return fallback_pools();
        };

        resilient(
            fetch_registry(reader.as_ref(), registry_id),
            fallback_pools,
            |e: &ProtocolError| {
                warn!(
                    registry_id,
                    error = %e,
                    "Failed to fetch pools from registry, using fallback list"
                )
            },
        )
        .await
    }
}

async fn fetch_registry<R: ObjectReader + ?Sized>(
    reader: &R,
    registry_id: &str,
) -> Result<Vec<Pool>, ProtocolError> {
    let object = reader.get_object(registry_id).await?;
    let entries = content_fields(&object)
        .and_then(|fields| fields.get("pools"))
        .and_then(Value::as_array)
        .ok_or_else(|| ProtocolError::MalformedRegistry("missing pools array".to_string()))?;

    let pools: Vec<Pool> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let pool = parse_pool_entry(entry);
            if pool.is_none() {
                debug!(registry_id, index, "Dropping undecodable registry entry");
            }
            pool
        })
        .collect();

    if pools.is_empty() {
        debug!(registry_id, entries = entries.len(), "Registry has no usable pools");
        return Ok(fallback_pools());
    }

    debug!(registry_id, count = pools.len(), "Decoded registry pools");
    Ok(pools)
}

/// Decodes one registry entry, bare or wrapped in `{ fields: .. }`.
pub fn parse_pool_entry(entry: &Value) -> Option<Pool> {
    let record = match entry.get("fields") {
        Some(inner) if inner.is_object() => inner,
        _ => entry,
    };

    let token0 = record.get("token0").and_then(decode_bytes_field)?;
    let token1 = record.get("token1").and_then(decode_bytes_field)?;
    let pool_id = record
        .get("pool_id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())?;

    Some(Pool::new(pool_id, resolve_coin(&token0), resolve_coin(&token1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockObjectReader;
    use serde_json::json;

    const REGISTRY: &str = "0xregistry";
    const USDC: &str =
        "0x32ea8a99aac91ceb95fee0f0d9f10fe138fe8c6d8641f44da47bdc37bca7ef6e::mock_usdc::MOCK_USDC";

    fn hex_field(s: &str) -> Value {
        json!(format!("0x{}", hex::encode(s)))
    }

    fn registry_object(pools: Value) -> Value {
        json!({ "data": { "content": { "fields": { "pools": pools } } } })
    }

    fn reader_for(object: Value) -> PoolRegistryReader<MockObjectReader> {
        let mock = MockObjectReader::new().with_object(REGISTRY, object);
        PoolRegistryReader::new(Some(Arc::new(mock)), Some(REGISTRY.to_string()))
    }

    #[tokio::test]
    async fn test_no_client_returns_fallback() {
        let reader: PoolRegistryReader<MockObjectReader> =
            PoolRegistryReader::new(None, Some(REGISTRY.to_string()));
        assert_eq!(reader.get_pools().await, fallback_pools());
    }

    #[tokio::test]
    async fn test_no_registry_id_returns_fallback() {
        let mock = Arc::new(MockObjectReader::new());
        let reader = PoolRegistryReader::new(Some(mock.clone()), Some(String::new()));
        assert_eq!(reader.get_pools().await, fallback_pools());
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_rpc_failure_returns_fallback() {
        let mock = MockObjectReader::new();
        let reader = PoolRegistryReader::new(Some(Arc::new(mock)), Some(REGISTRY.to_string()));
        assert_eq!(reader.get_pools().await, fallback_pools());
    }

    #[tokio::test]
    async fn test_missing_pools_field_returns_fallback() {
        let reader = reader_for(json!({ "data": { "content": { "fields": {} } } }));
        assert_eq!(reader.get_pools().await, fallback_pools());
    }

    #[tokio::test]
    async fn test_empty_registry_returns_fallback() {
        let reader = reader_for(registry_object(json!([])));
        assert_eq!(reader.get_pools().await, fallback_pools());
    }

    #[tokio::test]
    async fn test_decodes_wrapped_and_bare_entries() {
        let reader = reader_for(registry_object(json!([
            { "fields": { "token0": hex_field(USDC), "token1": hex_field("0xabc::mod::FOO"), "pool_id": "0xp1" } },
            { "token0": "0xdef::m::BAR", "token1": { "bytes": "" }, "pool_id": "0xbad" },
            { "token0": [0x61, 0x3a, 0x3a, 0x42], "token1": hex_field(USDC), "pool_id": "0xp2" },
            { "token0": hex_field(USDC), "token1": hex_field(USDC) },
        ])));

        let pools = reader.get_pools().await;
        assert_eq!(pools.len(), 2);

        assert_eq!(pools[0].pool_id, "0xp1");
        assert_eq!(pools[0].token_a.symbol, "USDC");
        assert!(!pools[0].token_a.is_synthesized());
        assert_eq!(pools[0].token_b.symbol, "FOO");
        assert_eq!(pools[0].token_b.decimals, 6);

        assert_eq!(pools[1].pool_id, "0xp2");
        assert_eq!(pools[1].token_a.token_id, "a::B");
        assert!(pools.iter().all(|p| !p.is_hydrated()));
    }

    #[tokio::test]
    async fn test_all_entries_malformed_returns_fallback() {
        let reader = reader_for(registry_object(json!([
            { "token0": 5, "token1": "x", "pool_id": "0xp" },
            "garbage",
        ])));
        assert_eq!(reader.get_pools().await, fallback_pools());
    }
}
