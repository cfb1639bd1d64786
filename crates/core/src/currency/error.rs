//! Currency error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from currency table lookups and construction.
#[derive(Debug, Clone, Error)]
pub enum CurrencyError {
    /// Currency code is absent from the static table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Exchange rate must be strictly positive.
    #[error("Invalid exchange rate {rate} for currency {code}")]
    InvalidRate {
        /// Offending currency code.
        code: String,
        /// The configured rate.
        rate: Decimal,
    },
}
