//! Command Line Interface for the Tormentor AMM.
use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use prettytable::{Table, row};
use rust_decimal::Decimal;
use std::sync::Arc;
use tormentor_domain::math::constant_product::{
    DEFAULT_FEE_BPS, min_amount_out, quote_out, spot_price,
};
use tormentor_domain::value_objects::to_base_units;
use tormentor_domain::{Coin, Pool};
use tormentor_protocols::prelude::*;
use tracing::warn;

#[derive(Parser)]
#[command(name = "tormentor")]
#[command(about = "Tormentor AMM pool reader and call builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered pools with their live reserves
    Pools,
    /// List coins traded in registered pools
    Tokens,
    /// Quote a swap without building a call
    Quote {
        /// Coin to pay (symbol or full type)
        #[arg(long)]
        from: String,
        /// Coin to receive (symbol or full type)
        #[arg(long)]
        to: String,
        /// Amount to pay, in display units
        #[arg(long)]
        amount: Decimal,
    },
    /// Build a swap call
    Swap {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: Decimal,
        /// Slippage tolerance in percent
        #[arg(long, default_value = "0.5")]
        slippage: Decimal,
    },
    /// Build an add_liquidity call
    AddLiquidity {
        /// Pool address
        #[arg(long)]
        pool: String,
        /// Token A amount, in display units
        #[arg(long)]
        amount_a: Decimal,
        /// Token B amount, in display units
        #[arg(long)]
        amount_b: Decimal,
    },
    /// Build a remove_liquidity_partial call
    RemoveLiquidity {
        #[arg(long)]
        pool: String,
        /// LP position object address
        #[arg(long)]
        position: String,
        /// LP shares to burn
        #[arg(long)]
        shares: u64,
        #[arg(long, default_value = "0")]
        min_a: Decimal,
        #[arg(long, default_value = "0")]
        min_b: Decimal,
    },
    /// Build a claim_protocol_fees call
    ClaimFees {
        #[arg(long)]
        pool: String,
        #[arg(long, default_value = "0")]
        min_a: Decimal,
        #[arg(long, default_value = "0")]
        min_b: Decimal,
    },
    /// Build a create_pool call
    CreatePool {
        #[arg(long)]
        token_a: String,
        #[arg(long)]
        token_b: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    let provider = Arc::new(RpcProvider::new(config.rpc_config())?);
    let loader = MarketLoader::new(Some(provider), config.registry_id.clone());
    let calls = AmmCallBuilder::new(config.package_id.clone(), config.registry_id.clone());

    match &cli.command {
        Commands::Pools => {
            let market = loader.load().await;
            print_pools(&market.pools);
        }
        Commands::Tokens => {
            let market = loader.load().await;
            let mut table = Table::new();
            table.add_row(row!["Symbol", "Decimals", "Type"]);
            for coin in &market.tokens {
                let decimals = if coin.is_synthesized() {
                    format!("{} (assumed)", coin.decimals)
                } else {
                    coin.decimals.to_string()
                };
                table.add_row(row![coin.symbol, decimals, coin.token_id]);
            }
            table.printstd();
        }
        Commands::Quote { from, to, amount } => {
            let market = loader.load().await;
            let (from, to) = (find_coin(&market, from)?, find_coin(&market, to)?);
            let (pool, reversed) = market
                .pool_for_pair(from, to)
                .ok_or_else(|| anyhow!("no pool for {}/{}", from.symbol, to.symbol))?;
            let (out, price) = quote(pool, reversed, *amount)?;

            println!("Pool:   {} ({})", pool.pair_label(), pool.pool_id);
            println!("Pay:    {} {}", amount, from.symbol);
            println!("Get:    {:.6} {}", out, to.symbol);
            println!("Price:  1 {} = {:.6} {}", from.symbol, price, to.symbol);
        }
        Commands::Swap {
            from,
            to,
            amount,
            slippage,
        } => {
            let market = loader.load().await;
            let (from, to) = (find_coin(&market, from)?, find_coin(&market, to)?);
            let (pool, reversed) = market
                .pool_for_pair(from, to)
                .ok_or_else(|| anyhow!("no pool for {}/{}", from.symbol, to.symbol))?;
            let (out, _) = quote(pool, reversed, *amount)?;

            let amount_in = to_base_units(*amount, from.decimals)?;
            let min_out = min_amount_out(to_base_units(out, to.decimals)?, *slippage)?;
            print_call(&calls.swap(pool, reversed, amount_in, min_out)?)?;
        }
        Commands::AddLiquidity {
            pool,
            amount_a,
            amount_b,
        } => {
            let market = loader.load().await;
            let pool = find_pool(&market, pool)?;
            let a = to_base_units(*amount_a, pool.token_a.decimals)?;
            let b = to_base_units(*amount_b, pool.token_b.decimals)?;
            print_call(&calls.add_liquidity(pool, a, b)?)?;
        }
        Commands::RemoveLiquidity {
            pool,
            position,
            shares,
            min_a,
            min_b,
        } => {
            let market = loader.load().await;
            let pool = find_pool(&market, pool)?;
            let min_a = to_base_units(*min_a, pool.token_a.decimals)?;
            let min_b = to_base_units(*min_b, pool.token_b.decimals)?;
            print_call(&calls.remove_liquidity_partial(pool, position, *shares, min_a, min_b)?)?;
        }
        Commands::ClaimFees { pool, min_a, min_b } => {
            let market = loader.load().await;
            let pool = find_pool(&market, pool)?;
            let min_a = to_base_units(*min_a, pool.token_a.decimals)?;
            let min_b = to_base_units(*min_b, pool.token_b.decimals)?;
            print_call(&calls.claim_protocol_fees(pool, min_a, min_b)?)?;
        }
        Commands::CreatePool { token_a, token_b } => {
            let market = loader.load().await;
            let token_a = resolve(&market, token_a);
            let token_b = resolve(&market, token_b);
            print_call(&calls.create_pool(&token_a, &token_b)?)?;
        }
    }

    Ok(())
}

fn quote(pool: &Pool, reversed: bool, amount: Decimal) -> Result<(Decimal, Decimal)> {
    let state = pool
        .state
        .as_ref()
        .with_context(|| format!("live state for pool {} is unavailable", pool.pool_id))?;
    if pool.token_a.is_synthesized() || pool.token_b.is_synthesized() {
        warn!(pool_id = %pool.pool_id, "Quote uses assumed decimals for an unlisted coin");
    }

    let (reserve_in, reserve_out) = if reversed {
        (state.reserve_b, state.reserve_a)
    } else {
        (state.reserve_a, state.reserve_b)
    };
    let out = quote_out(amount, reserve_in, reserve_out, DEFAULT_FEE_BPS)?;
    let price = spot_price(reserve_in, reserve_out)?;
    Ok((out, price))
}

fn find_coin<'a>(market: &'a MarketSnapshot, query: &str) -> Result<&'a Coin> {
    market
        .coin(query)
        .ok_or_else(|| anyhow!("unknown coin '{query}'"))
}

fn find_pool<'a>(market: &'a MarketSnapshot, pool_id: &str) -> Result<&'a Pool> {
    let pool = market
        .pool(pool_id)
        .ok_or_else(|| anyhow!("unknown pool '{pool_id}'"))?;
    if pool.pool_id == tormentor_domain::token_list::FALLBACK_POOL_ID {
        bail!("pool {pool_id} is the offline placeholder, configure AMM_REGISTRY_ID");
    }
    Ok(pool)
}

/// Coins for a new pool need not be traded yet, so unknown types are resolved directly.
fn resolve(market: &MarketSnapshot, query: &str) -> Coin {
    market
        .coin(query)
        .cloned()
        .unwrap_or_else(|| tormentor_domain::resolve_coin(query))
}

fn print_pools(pools: &[Pool]) {
    let mut table = Table::new();
    table.add_row(row![
        "Pool", "Pair", "Reserve A", "Reserve B", "Fees A", "Fees B", "LP Supply"
    ]);
    for pool in pools {
        match &pool.state {
            Some(s) => table.add_row(row![
                pool.pool_id,
                pool.pair_label(),
                format!("{:.6}", s.reserve_a),
                format!("{:.6}", s.reserve_b),
                format!("{:.6}", s.fee_reserve_a),
                format!("{:.6}", s.fee_reserve_b),
                s.lp_supply
            ]),
            None => table.add_row(row![pool.pool_id, pool.pair_label(), "-", "-", "-", "-", "-"]),
        };
    }
    table.printstd();
}

fn print_call(call: &MoveCall) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(call)?);
    Ok(())
}
