//! Pricing error and warning types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Input-validation failures that abort a pricing call before the engine
/// runs.
#[derive(Debug, Clone, Error)]
pub enum PricingError {
    /// Margin percentage outside the allowed [0, 100] range.
    #[error("Margin '{name}' out of range: {percent}% (must be between 0 and 100)")]
    MarginOutOfRange {
        /// Margin name as configured.
        name: String,
        /// Offending percentage.
        percent: Decimal,
    },
}

/// Recoverable per-line problems.
///
/// The offending line is skipped and the warning surfaced to the caller;
/// pricing continues over the valid remainder. Exactly one warning is
/// emitted per skipped line, and none is ever silently swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineWarning {
    /// Quantity outside the valid range; the line was dropped.
    #[error("Skipped '{service}': quantity {quantity} is outside 1..={max}")]
    InvalidQuantity {
        /// Service named by the selection.
        service: String,
        /// The rejected quantity.
        quantity: u32,
        /// Upper bound that was enforced.
        max: u32,
    },

    /// Selection referenced a service the catalog does not know.
    #[error("Skipped '{service}': not in the catalog")]
    UnknownService {
        /// The unknown service name.
        service: String,
    },
}
