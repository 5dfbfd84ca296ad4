use thiserror::Error;
use tormentor_domain::DomainError;

/// Failures while reading from the ledger.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Transport-level failure.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The node answered with a JSON-RPC error.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    /// The node answered with neither result nor error.
    #[error("rpc response carried no result")]
    EmptyResponse,
    /// The object exists but exposes no Move fields.
    #[error("object {0} has no content fields")]
    MissingContent(String),
    /// The registry object does not have the expected layout.
    #[error("malformed registry: {0}")]
    MalformedRegistry(String),
    /// A value could not be converted for display.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
