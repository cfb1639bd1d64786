//! The pricing engine.
//!
//! Pure functions over explicit inputs: the same catalog, selection, and
//! schedule always price to the same result. Line-level problems skip the
//! line and surface a warning; only an unknown currency aborts the call.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::currency::conversion::{CONVERSION_DECIMALS, convert_amount, round_money};
use crate::currency::{CurrencyError, CurrencyTable};

use super::error::LineWarning;
use super::types::{
    LineSelection, MAX_QUANTITY, MarginSchedule, NamedMargin, PricedItem, PricedSelection,
    TaxLine, TotalsBreakdown,
};

/// Pricing engine for quotations.
pub struct PricingService;

impl PricingService {
    /// Cumulative-additive line total.
    ///
    /// `base_cost * (1 + sum(margins)/100) * quantity` - the margins sum
    /// before multiplying. Summing rather than compounding is a business
    /// rule and must match the direct-sale pipeline exactly.
    #[must_use]
    pub fn compute_line_total(
        base_cost: Decimal,
        quantity: u32,
        margins: &[NamedMargin],
    ) -> Decimal {
        let summed: Decimal = margins.iter().map(NamedMargin::percent).sum();
        base_cost * (Decimal::ONE + summed / Decimal::ONE_HUNDRED) * Decimal::from(quantity)
    }

    /// Prices a selection against the catalog.
    ///
    /// Resolves the target currency first so an unknown code fails the whole
    /// call before any line work. Each valid line gets a margin-inclusive
    /// unit price converted into the target currency; invalid lines (bad
    /// quantity, unknown service) are skipped with exactly one warning each.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if `currency` is not in the
    /// table.
    pub fn price_selection(
        catalog: &Catalog,
        selections: &[LineSelection],
        schedule: &MarginSchedule,
        currencies: &CurrencyTable,
        currency: &str,
    ) -> Result<PricedSelection, CurrencyError> {
        let rate = currencies.rate(currency)?;

        let mut items = Vec::with_capacity(selections.len());
        let mut warnings = Vec::new();

        for selection in selections {
            if selection.quantity < 1 || selection.quantity > MAX_QUANTITY {
                warnings.push(LineWarning::InvalidQuantity {
                    service: selection.service.clone(),
                    quantity: selection.quantity,
                    max: MAX_QUANTITY,
                });
                continue;
            }

            let Some(base_cost) = catalog.base_cost(&selection.service) else {
                warnings.push(LineWarning::UnknownService {
                    service: selection.service.clone(),
                });
                continue;
            };

            let unit_in_base = schedule.apply(base_cost);
            let unit_price = convert_amount(unit_in_base, rate, CONVERSION_DECIMALS);
            items.push(PricedItem {
                description: selection.service.clone(),
                quantity: selection.quantity,
                unit_price,
            });
        }

        Ok(PricedSelection { items, warnings })
    }

    /// Totals a set of priced items.
    ///
    /// A `tax_rate` of `None` yields no tax line at all; `Some(0)` yields an
    /// explicit zero line - the two are distinguishable in the output. The
    /// additional tax is an independent charge on the same subtotal, never
    /// cascaded through the primary tax.
    #[must_use]
    pub fn compute_totals(
        items: &[PricedItem],
        tax_rate: Option<Decimal>,
        additional_tax_rate: Decimal,
    ) -> TotalsBreakdown {
        let subtotal = round_money(items.iter().map(PricedItem::amount).sum(), 2);

        let tax = tax_rate.map(|rate| TaxLine {
            rate,
            amount: round_money(subtotal * rate / Decimal::ONE_HUNDRED, 2),
        });

        let additional_tax = (additional_tax_rate > Decimal::ZERO).then(|| TaxLine {
            rate: additional_tax_rate,
            amount: round_money(subtotal * additional_tax_rate / Decimal::ONE_HUNDRED, 2),
        });

        let total = subtotal
            + tax.map_or(Decimal::ZERO, |line| line.amount)
            + additional_tax.map_or(Decimal::ZERO, |line| line.amount);

        TotalsBreakdown {
            subtotal,
            tax,
            additional_tax,
            total,
        }
    }
}
