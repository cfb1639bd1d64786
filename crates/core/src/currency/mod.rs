//! Static currency table, conversion, and money formatting.
//!
//! Rates are fixed constants loaded at startup; there is no live rate
//! fetching. The base currency always carries a rate of 1.

pub mod conversion;
pub mod error;
pub mod format;
pub mod table;

#[cfg(test)]
mod props;

pub use conversion::convert_amount;
pub use error::CurrencyError;
pub use format::format_amount;
pub use table::{CurrencySpec, CurrencyTable};
