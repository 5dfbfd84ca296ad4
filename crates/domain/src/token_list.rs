//! Bundled token table and metadata resolution.

use crate::entities::{Coin, CoinOrigin, Pool};
use std::sync::LazyLock;
use tracing::debug;

/// Icon used for coins that are not in the bundled table.
pub const PLACEHOLDER_ICON: &str = "/tormentor-icon.png";

/// Decimals assumed for unlisted coins.
///
/// This is a guess, not a chain lookup. Coins resolved with it are marked
/// [`CoinOrigin::Synthesized`] so callers can refuse to do money math on them.
pub const ASSUMED_DECIMALS: u8 = 6;

/// Pool address used for the offline fallback pool.
pub const FALLBACK_POOL_ID: &str = "0x0";

static COINS: LazyLock<Vec<Coin>> = LazyLock::new(|| {
    vec![
        Coin::new(
            "0x32ea8a99aac91ceb95fee0f0d9f10fe138fe8c6d8641f44da47bdc37bca7ef6e::mock_usdc::MOCK_USDC",
            "USDC",
            "https://cryptologos.cc/logos/usd-coin-usdc-logo.png",
            6,
        ),
        Coin::new(
            "0x32ea8a99aac91ceb95fee0f0d9f10fe138fe8c6d8641f44da47bdc37bca7ef6e::mock_idr::MOCK_IDR",
            "IDR",
            "https://cdn-icons-png.flaticon.com/512/2413/2413088.png",
            6,
        ),
    ]
});

/// The bundled token table.
pub fn static_coins() -> &'static [Coin] {
    &COINS
}

/// Resolves display metadata for a raw coin type.
pub fn resolve_coin(token_id: &str) -> Coin {
    resolve_coin_in(static_coins(), token_id)
}

pub(crate) fn resolve_coin_in(table: &[Coin], token_id: &str) -> Coin {
    if let Some(found) = table.iter().find(|c| c.matches_id(token_id)) {
        return found.clone();
    }

    let symbol = token_id.rsplit("::").next().unwrap_or(token_id);
    debug!(token_id, symbol, "Unlisted coin, synthesizing metadata");

    Coin {
        token_id: token_id.to_string(),
        symbol: symbol.to_string(),
        icon: PLACEHOLDER_ICON.to_string(),
        decimals: ASSUMED_DECIMALS,
        origin: CoinOrigin::Synthesized,
    }
}

/// Pools to show when the registry cannot be read.
pub fn fallback_pools() -> Vec<Pool> {
    fallback_pools_from(static_coins())
}

pub(crate) fn fallback_pools_from(coins: &[Coin]) -> Vec<Pool> {
    match coins {
        [] => Vec::new(),
        [only] => vec![Pool::new(FALLBACK_POOL_ID, only.clone(), only.clone())],
        [first, second, ..] => vec![Pool::new(FALLBACK_POOL_ID, first.clone(), second.clone())],
    }
}
