use crate::error::DomainError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Swap fee charged by the pool contract, in basis points (0.30%).
pub const DEFAULT_FEE_BPS: u32 = 30;

const BPS_DENOMINATOR: u32 = 10_000;

/// Calculates the output amount for a given input in a constant product pool (x * y = k).
///
/// All amounts are display amounts (already scaled by decimals).
///
/// formula: dy = y * dx' / (x + dx'), where dx' = dx * (1 - fee)
pub fn quote_out(
    amount_in: Decimal,
    reserve_in: Decimal,
    reserve_out: Decimal,
    fee_bps: u32,
) -> Result<Decimal, DomainError> {
    if fee_bps >= BPS_DENOMINATOR {
        return Err(DomainError::InvalidFee(fee_bps));
    }
    if amount_in.is_sign_negative() && !amount_in.is_zero() {
        return Err(DomainError::NegativeAmount);
    }
    if amount_in.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if reserve_in <= Decimal::ZERO || reserve_out <= Decimal::ZERO {
        return Err(DomainError::EmptyReserves);
    }

    let fee_factor = Decimal::from(BPS_DENOMINATOR - fee_bps) / Decimal::from(BPS_DENOMINATOR);
    let amount_in_with_fee = amount_in
        .checked_mul(fee_factor)
        .ok_or(DomainError::BaseUnitOverflow)?;
    let numerator = reserve_out
        .checked_mul(amount_in_with_fee)
        .ok_or(DomainError::BaseUnitOverflow)?;
    let denominator = reserve_in
        .checked_add(amount_in_with_fee)
        .ok_or(DomainError::BaseUnitOverflow)?;

    numerator
        .checked_div(denominator)
        .ok_or(DomainError::EmptyReserves)
}

/// Calculates the spot price of token_in in terms of token_out.
/// Price = reserve_out / reserve_in
pub fn spot_price(reserve_in: Decimal, reserve_out: Decimal) -> Result<Decimal, DomainError> {
    if reserve_in.is_zero() {
        return Err(DomainError::EmptyReserves);
    }
    reserve_out
        .checked_div(reserve_in)
        .ok_or(DomainError::EmptyReserves)
}

/// Minimum acceptable output after applying a slippage tolerance in percent.
pub fn min_amount_out(amount_out: u64, slippage_pct: Decimal) -> Result<u64, DomainError> {
    if slippage_pct < Decimal::ZERO || slippage_pct > Decimal::ONE_HUNDRED {
        return Err(DomainError::InvalidSlippage(slippage_pct));
    }
    let keep = Decimal::ONE - slippage_pct / Decimal::ONE_HUNDRED;
    (Decimal::from(amount_out) * keep)
        .floor()
        .to_u64()
        .ok_or(DomainError::BaseUnitOverflow)
}
