//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Conversion rounds to 4 decimal places
//! - Use banker's rounding (round half to even)
//! - Money lines round to 2 decimal places at display time

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Decimal places kept through a conversion. Coarser rounding here breaks
/// the one-cent round-trip tolerance for small rates like USD at 0.0115.
pub const CONVERSION_DECIMALS: u32 = 4;

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal, decimal_places: u32) -> Decimal {
    let converted = amount * rate;
    converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a money amount to a display scale using banker's rounding.
#[must_use]
pub fn round_money(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
