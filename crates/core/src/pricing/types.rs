//! Pricing engine data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{LineWarning, PricingError};

/// Upper bound on a line quantity; selections above it are skipped with a
/// warning rather than clamped.
pub const MAX_QUANTITY: u32 = 1000;

/// A user-selected (service, quantity) pair, not yet priced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSelection {
    /// Catalog service name.
    pub service: String,
    /// Requested quantity; the valid range is `1..=MAX_QUANTITY`.
    pub quantity: u32,
}

/// A named percentage markup in the range [0, 100].
///
/// Construction is the validation boundary: a margin outside the range never
/// reaches the engine.
#[derive(Debug, Clone)]
pub struct NamedMargin {
    name: String,
    percent: Decimal,
}

impl NamedMargin {
    /// Creates a margin, rejecting percentages outside [0, 100].
    ///
    /// # Errors
    ///
    /// Returns `PricingError::MarginOutOfRange` for a negative percentage or
    /// one above 100.
    pub fn new(name: impl Into<String>, percent: Decimal) -> Result<Self, PricingError> {
        let name = name.into();
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(PricingError::MarginOutOfRange { name, percent });
        }
        Ok(Self { name, percent })
    }

    /// The margin's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The markup percentage.
    #[must_use]
    pub fn percent(&self) -> Decimal {
        self.percent
    }
}

/// How margins turn a base cost into a selling price.
///
/// The two pipelines are distinct business workflows and are never merged:
/// a direct sale sums its margins before multiplying, a resale applies the
/// reseller margin on top of the already-margined catalog price.
#[derive(Debug, Clone)]
pub enum MarginSchedule {
    /// Margins sum, then multiply once: `base * (1 + sum(percents)/100)`.
    /// Cumulative-additive, not compounding.
    Direct(Vec<NamedMargin>),
    /// Sequential markup: catalog margin first, then the reseller margin on
    /// the margined price.
    Resale {
        /// Markup applied to the catalog base cost.
        catalog: NamedMargin,
        /// Markup applied to the already-margined price.
        reseller: NamedMargin,
    },
}

impl MarginSchedule {
    /// Applies the schedule to a base cost, producing the margin-inclusive
    /// unit price in the base currency.
    #[must_use]
    pub fn apply(&self, base_cost: Decimal) -> Decimal {
        match self {
            Self::Direct(margins) => {
                let summed: Decimal = margins.iter().map(NamedMargin::percent).sum();
                base_cost * (Decimal::ONE + summed / Decimal::ONE_HUNDRED)
            }
            Self::Resale { catalog, reseller } => {
                let margined = base_cost * (Decimal::ONE + catalog.percent() / Decimal::ONE_HUNDRED);
                margined * (Decimal::ONE + reseller.percent() / Decimal::ONE_HUNDRED)
            }
        }
    }
}

/// A priced invoice line.
///
/// The unit price is margin-inclusive and already converted to the invoice
/// currency; downstream stages only format it. Regenerated on every pricing
/// pass, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedItem {
    /// Service description as it appears on the invoice.
    pub description: String,
    /// Quantity sold.
    pub quantity: u32,
    /// Margin-inclusive unit price in the invoice currency.
    pub unit_price: Decimal,
}

impl PricedItem {
    /// The line amount: quantity times unit price, unrounded.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Result of pricing a selection: the valid lines plus any per-line
/// warnings for the lines that were skipped.
#[derive(Debug, Clone)]
pub struct PricedSelection {
    /// Successfully priced lines, in selection order.
    pub items: Vec<PricedItem>,
    /// One warning per skipped line.
    pub warnings: Vec<LineWarning>,
}

/// One tax line of a totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Percentage of the subtotal this line charges.
    pub rate: Decimal,
    /// Charged amount, rounded to two decimal places.
    pub amount: Decimal,
}

/// Subtotal, tax lines, and grand total for a set of priced items.
///
/// `tax` being `None` means the summary carries no tax line at all, which is
/// deliberately distinct from `Some` with a zero rate (an explicit "0.00"
/// line).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsBreakdown {
    /// Sum of all line amounts before tax.
    pub subtotal: Decimal,
    /// Primary (GST) tax line, if one was requested.
    pub tax: Option<TaxLine>,
    /// Independent second tax line on the same subtotal; present only for a
    /// positive rate.
    pub additional_tax: Option<TaxLine>,
    /// Subtotal plus every present tax line.
    pub total: Decimal,
}
