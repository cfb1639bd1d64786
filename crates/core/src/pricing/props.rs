//! Property-based tests for the pricing engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::{Catalog, CatalogEntry};
use crate::currency::{CurrencySpec, CurrencyTable};

use super::service::PricingService;
use super::types::{LineSelection, MarginSchedule, NamedMargin, PricedItem};

/// Strategy to generate non-negative base costs (0.00 to 100,000.00).
fn base_cost() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate margin percentages in [0, 100] with 2 decimals.
fn margin_percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy to generate valid quantities.
fn quantity() -> impl Strategy<Value = u32> {
    1u32..=1000
}

fn single_service_catalog(base: Decimal) -> Catalog {
    Catalog::new([CatalogEntry {
        name: "Service".to_string(),
        base_cost: base,
    }])
}

fn base_only_table() -> CurrencyTable {
    CurrencyTable::new(
        "INR",
        [CurrencySpec {
            code: "INR".to_string(),
            symbol: "Rs.".to_string(),
            rate: dec!(1),
        }],
    )
    .expect("valid table")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The line-total formula holds exactly: b * (1 + (m1 + m2)/100) * q.
    #[test]
    fn prop_line_total_formula(
        base in base_cost(),
        qty in quantity(),
        m1 in margin_percent(),
        m2 in margin_percent(),
    ) {
        let margins = vec![
            NamedMargin::new("first", m1).unwrap(),
            NamedMargin::new("second", m2).unwrap(),
        ];
        let expected =
            base * (Decimal::ONE + (m1 + m2) / Decimal::ONE_HUNDRED) * Decimal::from(qty);
        prop_assert_eq!(PricingService::compute_line_total(base, qty, &margins), expected);
    }

    /// Pricing is deterministic: same inputs, same quotation.
    #[test]
    fn prop_pricing_is_deterministic(
        base in base_cost(),
        qty in quantity(),
        percent in margin_percent(),
    ) {
        let catalog = single_service_catalog(base);
        let table = base_only_table();
        let schedule = MarginSchedule::Direct(vec![NamedMargin::new("m", percent).unwrap()]);
        let selections = [LineSelection { service: "Service".to_string(), quantity: qty }];

        let first =
            PricingService::price_selection(&catalog, &selections, &schedule, &table, "INR")
                .unwrap();
        let second =
            PricingService::price_selection(&catalog, &selections, &schedule, &table, "INR")
                .unwrap();

        prop_assert_eq!(first.items.len(), second.items.len());
        prop_assert_eq!(first.items[0].unit_price, second.items[0].unit_price);
    }

    /// Skipping an invalid line never changes what the valid lines contribute,
    /// and each skipped line costs exactly one warning.
    #[test]
    fn prop_skipped_lines_leave_valid_totals_alone(
        base in base_cost(),
        qty in quantity(),
        bad_qty in prop_oneof![Just(0u32), 1001u32..10_000],
    ) {
        let catalog = single_service_catalog(base);
        let table = base_only_table();
        let schedule = MarginSchedule::Direct(vec![]);

        let clean = [LineSelection { service: "Service".to_string(), quantity: qty }];
        let dirty = [
            LineSelection { service: "Service".to_string(), quantity: qty },
            LineSelection { service: "Service".to_string(), quantity: bad_qty },
            LineSelection { service: "Missing".to_string(), quantity: 1 },
        ];

        let clean_priced =
            PricingService::price_selection(&catalog, &clean, &schedule, &table, "INR").unwrap();
        let dirty_priced =
            PricingService::price_selection(&catalog, &dirty, &schedule, &table, "INR").unwrap();

        let clean_subtotal: Decimal = clean_priced.items.iter().map(PricedItem::amount).sum();
        let dirty_subtotal: Decimal = dirty_priced.items.iter().map(PricedItem::amount).sum();
        prop_assert_eq!(clean_subtotal, dirty_subtotal);
        prop_assert_eq!(dirty_priced.warnings.len(), 2);
    }

    /// Totals always satisfy total = subtotal + present tax lines.
    #[test]
    fn prop_total_is_sum_of_parts(
        unit in base_cost(),
        qty in quantity(),
        tax in proptest::option::of(margin_percent()),
        additional in margin_percent(),
    ) {
        let items = [PricedItem {
            description: "Service".to_string(),
            quantity: qty,
            unit_price: unit,
        }];
        let totals = PricingService::compute_totals(&items, tax, additional);

        let tax_amount = totals.tax.map_or(Decimal::ZERO, |line| line.amount);
        let additional_amount = totals.additional_tax.map_or(Decimal::ZERO, |line| line.amount);
        prop_assert_eq!(totals.total, totals.subtotal + tax_amount + additional_amount);

        // The None-vs-zero distinction mirrors the input exactly.
        prop_assert_eq!(totals.tax.is_some(), tax.is_some());
        prop_assert_eq!(totals.additional_tax.is_some(), additional > Decimal::ZERO);
    }
}
