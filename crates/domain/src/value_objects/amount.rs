use crate::error::DomainError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u8 = 28;

/// Converts a raw on-chain integer into a display amount.
///
/// `decimals == 0` leaves the value unscaled.
pub fn scale_raw(raw: u128, decimals: u8) -> Result<Decimal, DomainError> {
    if decimals > MAX_SCALE {
        return Err(DomainError::UnsupportedDecimals(decimals));
    }
    let mantissa = i128::try_from(raw).map_err(|_| DomainError::AmountTooLarge(raw))?;
    Decimal::try_from_i128_with_scale(mantissa, u32::from(decimals))
        .map(|d| d.normalize())
        .map_err(|_| DomainError::AmountTooLarge(raw))
}

/// Converts a display amount into integer base units, rounding down.
pub fn to_base_units(value: Decimal, decimals: u8) -> Result<u64, DomainError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::NegativeAmount);
    }
    let multiplier = 10u64
        .checked_pow(u32::from(decimals))
        .ok_or(DomainError::UnsupportedDecimals(decimals))?;

    value
        .checked_mul(Decimal::from(multiplier))
        .ok_or(DomainError::BaseUnitOverflow)?
        .floor()
        .to_u64()
        .ok_or(DomainError::BaseUnitOverflow)
}
