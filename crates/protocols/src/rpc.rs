//! JSON-RPC client for an IOTA full node.

use crate::ObjectReader;
use crate::error::ProtocolError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Public testnet full node.
pub const TESTNET_URL: &str = "https://api.testnet.iota.cafe";

/// Public devnet full node.
pub const DEVNET_URL: &str = "https://api.devnet.iota.cafe";

/// Configuration for the RPC provider.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Full node JSON-RPC endpoint.
    pub url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: TESTNET_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// HTTP JSON-RPC provider.
pub struct RpcProvider {
    client: reqwest::Client,
    config: RpcConfig,
    next_id: AtomicU64,
}

impl RpcProvider {
    /// Creates a new provider.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: RpcConfig) -> Result<Self, ProtocolError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            config,
            next_id: AtomicU64::new(1),
        })
    }

    /// Endpoint URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Issues a JSON-RPC call and returns its `result`.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success HTTP status, or a
    /// JSON-RPC error object.
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, ProtocolError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        debug!(method, id, url = %self.config.url, "Sending RPC request");

        let response: RpcResponse = self
            .client
            .post(&self.config.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(ProtocolError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or(ProtocolError::EmptyResponse)
    }
}

#[async_trait]
impl ObjectReader for RpcProvider {
    async fn get_object(&self, object_id: &str) -> Result<Value, ProtocolError> {
        self.call("iota_getObject", json!([object_id, { "showContent": true }]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 3,
            method: "iota_getObject",
            params: json!(["0x1", { "showContent": true }]),
        };
        let v = serde_json::to_value(&request).unwrap();
        assert_eq!(v["jsonrpc"], "2.0");
        assert_eq!(v["id"], 3);
        assert_eq!(v["params"][1]["showContent"], true);
    }

    #[test]
    fn test_response_with_error_body() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"bad id"}}"#;
        let response: RpcResponse = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "bad id");
    }

    #[test]
    fn test_provider_uses_configured_url() {
        let provider = RpcProvider::new(RpcConfig {
            url: DEVNET_URL.to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(provider.url(), DEVNET_URL);
    }
}
