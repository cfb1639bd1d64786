//! Margin schedules, line pricing, and tax totals.

pub mod error;
pub mod service;
pub mod types;


#[cfg(test)]
mod props;

pub use error::{LineWarning, PricingError};
pub use service::PricingService;
pub use types::{
    LineSelection, MAX_QUANTITY, MarginSchedule, NamedMargin, PricedItem, PricedSelection,
    TaxLine, TotalsBreakdown,
};
