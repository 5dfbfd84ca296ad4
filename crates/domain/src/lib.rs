//! Core domain types for the Tormentor AMM.
//!
//! This crate holds everything that does not touch the network:
//! - Coin and pool entities
//! - The bundled token list and metadata resolution
//! - Display amount scaling and base-unit conversion
//! - Constant product quote math

/// Domain entities.
pub mod entities;
/// Error types.
pub mod error;
/// Pool math.
pub mod math;
/// Bundled token table and metadata resolver.
pub mod token_list;
/// Value objects.
pub mod value_objects;

pub use entities::{Coin, CoinOrigin, Pool, PoolState, derive_tokens, find_pool_for_pair};
pub use error::DomainError;
pub use token_list::{fallback_pools, resolve_coin, static_coins};
