pub mod coin;
pub mod pool;

// Re-export for easier access
pub use coin::{Coin, CoinOrigin};
pub use pool::{Pool, PoolState, derive_tokens, find_pool_for_pair};
