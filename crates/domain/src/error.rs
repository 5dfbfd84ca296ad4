use thiserror::Error;

/// Errors raised by domain math and conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Decimal precision outside what a display amount can represent.
    #[error("unsupported decimal precision {0}")]
    UnsupportedDecimals(u8),
    /// Raw on-chain amount does not fit a display amount.
    #[error("amount {0} is too large to scale")]
    AmountTooLarge(u128),
    /// Amount is negative where only non-negative values are allowed.
    #[error("amount must not be negative")]
    NegativeAmount,
    /// Base-unit conversion overflowed u64.
    #[error("amount overflows base units")]
    BaseUnitOverflow,
    /// Pool reserves are empty.
    #[error("reserves must be non-zero")]
    EmptyReserves,
    /// Fee outside 0..10000 basis points.
    #[error("fee of {0} bps is out of range")]
    InvalidFee(u32),
    /// Slippage outside 0..=100 percent.
    #[error("slippage of {0}% is out of range")]
    InvalidSlippage(rust_decimal::Decimal),
}
