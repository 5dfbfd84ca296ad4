//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use tormentor_protocols::prelude::*;
//! ```

pub use crate::config::{AppConfig, ConfigError, Network};
pub use crate::error::ProtocolError;
pub use crate::hydrator::PoolStateHydrator;
pub use crate::market::{MarketLoader, MarketSnapshot};
pub use crate::registry::PoolRegistryReader;
pub use crate::resilient::resilient;
pub use crate::rpc::{RpcConfig, RpcProvider};
pub use crate::transaction::{AmmCallBuilder, CallArg, CallError, MoveCall};
pub use crate::{ObjectReader, content_fields};
