use serde::{Deserialize, Serialize};

/// Where a coin's metadata came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinOrigin {
    /// Found in the bundled token list.
    Listed,
    /// Built from the type string alone; decimals are assumed, not read from chain.
    Synthesized,
}

/// Display metadata for a coin type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Chain-qualified type, e.g. `0x32ea...::mock_usdc::MOCK_USDC`.
    pub token_id: String,
    pub symbol: String,
    pub icon: String,
    pub decimals: u8,
    pub origin: CoinOrigin,
}

impl Coin {
    pub fn new(
        token_id: impl Into<String>,
        symbol: impl Into<String>,
        icon: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            token_id: token_id.into(),
            symbol: symbol.into(),
            icon: icon.into(),
            decimals,
            origin: CoinOrigin::Listed,
        }
    }

    /// Case-insensitive identifier match.
    pub fn matches_id(&self, token_id: &str) -> bool {
        self.token_id.eq_ignore_ascii_case(token_id)
    }

    /// True when the decimals are a placeholder guess.
    pub fn is_synthesized(&self) -> bool {
        self.origin == CoinOrigin::Synthesized
    }
}
