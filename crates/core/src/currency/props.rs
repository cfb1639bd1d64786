//! Property-based tests for currency operations.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::conversion::{CONVERSION_DECIMALS, convert_amount};
use super::table::{CurrencySpec, CurrencyTable};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick one of the shipped non-base currencies.
fn shipped_currency() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USD"), Just("EUR"), Just("GBP")]
}

fn shipped_table() -> CurrencyTable {
    CurrencyTable::new(
        "INR",
        [
            CurrencySpec {
                code: "INR".to_string(),
                symbol: "Rs.".to_string(),
                rate: dec!(1),
            },
            CurrencySpec {
                code: "USD".to_string(),
                symbol: "$".to_string(),
                rate: dec!(0.0115),
            },
            CurrencySpec {
                code: "EUR".to_string(),
                symbol: "EUR ".to_string(),
                rate: dec!(0.0105),
            },
            CurrencySpec {
                code: "GBP".to_string(),
                symbol: "GBP ".to_string(),
                rate: dec!(0.0090),
            },
        ],
    )
    .expect("shipped table is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion output never carries more than 4 decimal places.
    #[test]
    fn prop_convert_rounds_to_4_decimals(
        amount in positive_amount(),
        code in shipped_currency(),
    ) {
        let table = shipped_table();
        let result = table.convert_from_base(amount, code).unwrap();
        let scaled = result * Decimal::from(10_000);
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "Result {} should have at most 4 decimal places",
            result
        );
    }

    /// Converting the same inputs twice gives the same output.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        code in shipped_currency(),
    ) {
        let table = shipped_table();
        let first = table.convert_from_base(amount, code).unwrap();
        let second = table.convert_from_base(amount, code).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Round trip through any shipped currency lands within one cent of the
    /// original base amount.
    #[test]
    fn prop_round_trip_within_one_cent(
        amount in positive_amount(),
        code in shipped_currency(),
    ) {
        let table = shipped_table();
        let converted = table.convert_from_base(amount, code).unwrap();
        let back = table.to_base(converted, code).unwrap();
        prop_assert!(
            (back - amount).abs() <= dec!(0.01),
            "{} -> {} -> {} drifted more than a cent",
            amount,
            converted,
            back
        );
    }

    /// Base currency conversion is the identity (rate 1).
    #[test]
    fn prop_base_currency_is_identity(amount in positive_amount()) {
        let table = shipped_table();
        let result = table.convert_from_base(amount, "INR").unwrap();
        prop_assert_eq!(result, convert_amount(amount, Decimal::ONE, CONVERSION_DECIMALS));
    }
}
