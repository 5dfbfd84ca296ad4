use crate::entities::coin::Coin;
use crate::token_list::static_coins;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Live numeric state read from a pool object.
///
/// Reserve-like amounts are already scaled by the matching coin's decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub reserve_a: Decimal,
    pub reserve_b: Decimal,
    pub fee_reserve_a: Decimal,
    pub fee_reserve_b: Decimal,
    pub protocol_reserve_a: Decimal,
    pub protocol_reserve_b: Decimal,
    /// Outstanding LP shares, unscaled.
    pub lp_supply: u128,
    pub fee_recipient: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// On-chain pool object address.
    pub pool_id: String,
    pub token_a: Coin,
    pub token_b: Coin,
    /// `None` until hydration succeeds. Absence means unknown, not zero.
    pub state: Option<PoolState>,
}

impl Pool {
    pub fn new(pool_id: impl Into<String>, token_a: Coin, token_b: Coin) -> Self {
        Self {
            pool_id: pool_id.into(),
            token_a,
            token_b,
            state: None,
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: PoolState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn is_hydrated(&self) -> bool {
        self.state.is_some()
    }

    /// `TOKA / TOKB` label.
    pub fn pair_label(&self) -> String {
        format!("{} / {}", self.token_a.symbol, self.token_b.symbol)
    }
}

/// Returns the coins referenced by `pools`, deduplicated in first-seen order.
///
/// Falls back to the bundled token list so callers never get an empty set.
pub fn derive_tokens(pools: &[Pool]) -> Vec<Coin> {
    let mut out: Vec<Coin> = Vec::new();

    for coin in pools.iter().flat_map(|p| [&p.token_a, &p.token_b]) {
        if !out.iter().any(|seen| seen.matches_id(&coin.token_id)) {
            out.push(coin.clone());
        }
    }

    if out.is_empty() {
        return static_coins().to_vec();
    }
    out
}

/// Finds the pool trading `from` against `to`.
///
/// The flag is `true` when the pool stores the pair as `(to, from)`.
pub fn find_pool_for_pair<'a>(pools: &'a [Pool], from: &str, to: &str) -> Option<(&'a Pool, bool)> {
    if let Some(pool) = pools
        .iter()
        .find(|p| p.token_a.matches_id(from) && p.token_b.matches_id(to))
    {
        return Some((pool, false));
    }
    pools
        .iter()
        .find(|p| p.token_a.matches_id(to) && p.token_b.matches_id(from))
        .map(|pool| (pool, true))
}
