//! The static currency table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion::{CONVERSION_DECIMALS, convert_amount, round_money};
use super::error::CurrencyError;

/// One currency as declared in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencySpec {
    /// ISO 4217-style code, e.g. "USD".
    pub code: String,
    /// Symbol prefixed to formatted amounts, e.g. "$".
    pub symbol: String,
    /// Fixed rate from the base currency (base currency itself uses 1).
    pub rate: Decimal,
}

#[derive(Debug, Clone)]
struct CurrencyInfo {
    symbol: String,
    rate: Decimal,
}

/// Static mapping from currency code to symbol and fixed conversion rate.
///
/// Built once at startup and passed by reference into pricing and rendering.
/// Every lookup of a code outside the table is an `UnknownCurrency` error;
/// nothing is ever converted with a guessed rate.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    base: String,
    currencies: BTreeMap<String, CurrencyInfo>,
}

impl CurrencyTable {
    /// Builds the table from configuration entries.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidRate` for a non-positive rate and
    /// `CurrencyError::UnknownCurrency` if the base code is not among the
    /// entries.
    pub fn new(
        base: impl Into<String>,
        specs: impl IntoIterator<Item = CurrencySpec>,
    ) -> Result<Self, CurrencyError> {
        let base = base.into();
        let mut currencies = BTreeMap::new();
        for spec in specs {
            if spec.rate <= Decimal::ZERO {
                return Err(CurrencyError::InvalidRate {
                    code: spec.code,
                    rate: spec.rate,
                });
            }
            currencies.insert(
                spec.code,
                CurrencyInfo {
                    symbol: spec.symbol,
                    rate: spec.rate,
                },
            );
        }
        if !currencies.contains_key(&base) {
            return Err(CurrencyError::UnknownCurrency(base));
        }
        Ok(Self { base, currencies })
    }

    /// The base currency code (rate 1).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns true if the table knows this code.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    /// The display symbol for a currency.
    pub fn symbol(&self, code: &str) -> Result<&str, CurrencyError> {
        self.info(code).map(|info| info.symbol.as_str())
    }

    /// The fixed rate from the base currency.
    pub fn rate(&self, code: &str) -> Result<Decimal, CurrencyError> {
        self.info(code).map(|info| info.rate)
    }

    /// Converts an amount denominated in the base currency.
    ///
    /// Rounds to 4 decimal places with banker's rounding; display rounding
    /// to 2 places happens at formatting time.
    pub fn convert_from_base(&self, amount: Decimal, code: &str) -> Result<Decimal, CurrencyError> {
        let info = self.info(code)?;
        Ok(convert_amount(amount, info.rate, CONVERSION_DECIMALS))
    }

    /// Converts an amount in `code` back to the base currency.
    ///
    /// Rates are fixed, not perfectly invertible; round-tripping an amount
    /// lands within one cent of the original.
    pub fn to_base(&self, amount: Decimal, code: &str) -> Result<Decimal, CurrencyError> {
        let info = self.info(code)?;
        Ok(round_money(amount / info.rate, CONVERSION_DECIMALS))
    }

    fn info(&self, code: &str) -> Result<&CurrencyInfo, CurrencyError> {
        self.currencies
            .get(code)
            .ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))
    }
}
