//! Move call payloads for the AMM package.
//!
//! Builders here produce unsigned call descriptions; signing and submission
//! belong to the wallet. Unlike the read path, invalid input is an error.

use serde::Serialize;
use thiserror::Error;
use tormentor_domain::{Coin, Pool};
use tracing::debug;

/// Move module exposing the AMM entry functions.
pub const AMM_MODULE: &str = "simple_amm_sandbox_fee";

/// Errors raised while building a call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// The registry object address is not configured.
    #[error("registry address is not configured")]
    MissingRegistry,
    /// Both sides of a new pool are the same coin.
    #[error("token A and token B must differ, got {0} twice")]
    IdenticalTokens(String),
    /// A required amount is zero.
    #[error("{0} must be greater than zero")]
    ZeroAmount(&'static str),
}

/// One argument of a Move call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallArg {
    /// A shared or owned object by address.
    Object { id: String },
    /// A pure `u64`.
    U64 { value: u64 },
    /// A pure `vector<u8>`.
    Bytes { value: Vec<u8> },
    /// A coin of `coin_type` split to exactly `balance`, gathered by the wallet.
    CoinWithBalance { coin_type: String, balance: u64 },
}

/// An unsigned Move call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveCall {
    /// `package::module::function`.
    pub target: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<CallArg>,
}

/// Builds calls against one deployment of the AMM package.
#[derive(Debug, Clone)]
pub struct AmmCallBuilder {
    package_id: String,
    registry_id: Option<String>,
}

impl AmmCallBuilder {
    pub fn new(package_id: impl Into<String>, registry_id: Option<String>) -> Self {
        Self {
            package_id: package_id.into(),
            registry_id: registry_id.filter(|id| !id.is_empty()),
        }
    }

    /// Swaps `amount_in` base units through `pool`.
    ///
    /// `reversed` selects `swap_b_to_a`, paying in token B.
    pub fn swap(
        &self,
        pool: &Pool,
        reversed: bool,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<MoveCall, CallError> {
        if amount_in == 0 {
            return Err(CallError::ZeroAmount("swap amount"));
        }
        let (function, coin_in) = if reversed {
            ("swap_b_to_a", &pool.token_b)
        } else {
            ("swap_a_to_b", &pool.token_a)
        };

        self.pool_call(
            function,
            pool,
            vec![
                coin_with_balance(coin_in, amount_in),
                CallArg::U64 { value: min_amount_out },
            ],
        )
    }

    /// Deposits both coins in pool order.
    pub fn add_liquidity(&self, pool: &Pool, amount_a: u64, amount_b: u64) -> Result<MoveCall, CallError> {
        if amount_a == 0 || amount_b == 0 {
            return Err(CallError::ZeroAmount("deposit amount"));
        }
        self.pool_call(
            "add_liquidity",
            pool,
            vec![
                coin_with_balance(&pool.token_a, amount_a),
                CallArg::U64 { value: amount_a },
                coin_with_balance(&pool.token_b, amount_b),
                CallArg::U64 { value: amount_b },
            ],
        )
    }

    /// Burns `shares` from an LP position object.
    pub fn remove_liquidity_partial(
        &self,
        pool: &Pool,
        position_id: &str,
        shares: u64,
        min_a: u64,
        min_b: u64,
    ) -> Result<MoveCall, CallError> {
        if shares == 0 {
            return Err(CallError::ZeroAmount("shares"));
        }
        self.pool_call(
            "remove_liquidity_partial",
            pool,
            vec![
                CallArg::Object {
                    id: position_id.to_string(),
                },
                CallArg::U64 { value: shares },
                CallArg::U64 { value: min_a },
                CallArg::U64 { value: min_b },
            ],
        )
    }

    /// Withdraws accrued protocol fees to the fee recipient.
    pub fn claim_protocol_fees(&self, pool: &Pool, min_a: u64, min_b: u64) -> Result<MoveCall, CallError> {
        self.pool_call(
            "claim_protocol_fees",
            pool,
            vec![CallArg::U64 { value: min_a }, CallArg::U64 { value: min_b }],
        )
    }

    /// Registers a new pool for the pair.
    pub fn create_pool(&self, token_a: &Coin, token_b: &Coin) -> Result<MoveCall, CallError> {
        if token_a.matches_id(&token_b.token_id) {
            return Err(CallError::IdenticalTokens(token_a.symbol.clone()));
        }
        let registry = self.registry()?;

        Ok(self.call(
            "create_pool",
            vec![token_a.token_id.clone(), token_b.token_id.clone()],
            vec![
                registry,
                CallArg::Bytes {
                    value: token_a.token_id.as_bytes().to_vec(),
                },
                CallArg::Bytes {
                    value: token_b.token_id.as_bytes().to_vec(),
                },
            ],
        ))
    }

    fn pool_call(&self, function: &str, pool: &Pool, tail: Vec<CallArg>) -> Result<MoveCall, CallError> {
        let mut arguments = vec![
            self.registry()?,
            CallArg::Object {
                id: pool.pool_id.clone(),
            },
        ];
        arguments.extend(tail);

        Ok(self.call(
            function,
            vec![pool.token_a.token_id.clone(), pool.token_b.token_id.clone()],
            arguments,
        ))
    }

    fn call(&self, function: &str, type_arguments: Vec<String>, arguments: Vec<CallArg>) -> MoveCall {
        let target = format!("{}::{}::{}", self.package_id, AMM_MODULE, function);
        debug!(target = %target, args = arguments.len(), "Built move call");
        MoveCall {
            target,
            type_arguments,
            arguments,
        }
    }

    fn registry(&self) -> Result<CallArg, CallError> {
        self.registry_id
            .as_ref()
            .map(|id| CallArg::Object { id: id.clone() })
            .ok_or(CallError::MissingRegistry)
    }
}

fn coin_with_balance(coin: &Coin, balance: u64) -> CallArg {
    CallArg::CoinWithBalance {
        coin_type: coin.token_id.clone(),
        balance,
    }
}
