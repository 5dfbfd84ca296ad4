//! One-shot market load: registry, hydration, token list.

use crate::ObjectReader;
use crate::hydrator::PoolStateHydrator;
use crate::registry::PoolRegistryReader;
use std::sync::Arc;
use tormentor_domain::{Coin, Pool, derive_tokens, find_pool_for_pair};
use tracing::info;

/// Pools and coins as shown to a user at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketSnapshot {
    pub pools: Vec<Pool>,
    pub tokens: Vec<Coin>,
}

impl MarketSnapshot {
    /// Builds a snapshot, deriving the token list from `pools`.
    pub fn from_pools(pools: Vec<Pool>) -> Self {
        let tokens = derive_tokens(&pools);
        Self { pools, tokens }
    }

    /// Looks up a pool by address.
    pub fn pool(&self, pool_id: &str) -> Option<&Pool> {
        self.pools
            .iter()
            .find(|p| p.pool_id.eq_ignore_ascii_case(pool_id))
    }

    /// Looks up a coin by symbol or full type, case-insensitively.
    pub fn coin(&self, query: &str) -> Option<&Coin> {
        self.tokens
            .iter()
            .find(|c| c.matches_id(query))
            .or_else(|| self.tokens.iter().find(|c| c.symbol.eq_ignore_ascii_case(query)))
    }

    /// Finds the pool for a pair; see [`find_pool_for_pair`].
    pub fn pool_for_pair(&self, from: &Coin, to: &Coin) -> Option<(&Pool, bool)> {
        find_pool_for_pair(&self.pools, &from.token_id, &to.token_id)
    }
}

/// Loads a [`MarketSnapshot`] from the ledger.
pub struct MarketLoader<R: ?Sized> {
    registry: PoolRegistryReader<R>,
    hydrator: PoolStateHydrator<R>,
}

impl<R: ObjectReader + ?Sized> MarketLoader<R> {
    pub fn new(reader: Option<Arc<R>>, registry_id: Option<String>) -> Self {
        Self {
            registry: PoolRegistryReader::new(reader.clone(), registry_id),
            hydrator: PoolStateHydrator::new(reader),
        }
    }

    /// Reads the registry, hydrates each pool and derives the token list.
    pub async fn load(&self) -> MarketSnapshot {
        let pools = self.registry.get_pools().await;
        let pools = self.hydrator.hydrate(pools).await;
        let snapshot = MarketSnapshot::from_pools(pools);

        info!(
            pools = snapshot.pools.len(),
            tokens = snapshot.tokens.len(),
            "Market snapshot loaded"
        );
        snapshot
    }
}
