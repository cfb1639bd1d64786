//! Money formatting for invoice output.

use rust_decimal::Decimal;

use super::conversion::round_money;

/// Formats a money amount as `{symbol}{grouped}.{cents}`.
///
/// The amount is rounded to two decimal places with banker's rounding and
/// the integer part gets thousands separators: `format_amount(dec!(11.5), "$")`
/// is `"$11.50"`, `format_amount(dec!(1234567.891), "Rs.")` is
/// `"Rs.1,234,567.89"`.
#[must_use]
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = round_money(amount, 2);
    let text = format!("{rounded:.2}");
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{sign}{symbol}{}.{cents}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(11.5), "$", "$11.50")]
    #[case(dec!(0), "$", "$0.00")]
    #[case(dec!(660), "Rs.", "Rs.660.00")]
    #[case(dec!(1230), "Rs.", "Rs.1,230.00")]
    #[case(dec!(1234567.891), "Rs.", "Rs.1,234,567.89")]
    #[case(dec!(999.995), "$", "$1,000.00")]
    fn test_format_amount(#[case] amount: Decimal, #[case] symbol: &str, #[case] expected: &str) {
        assert_eq!(format_amount(amount, symbol), expected);
    }

    #[test]
    fn test_negative_amount_keeps_sign_before_symbol() {
        assert_eq!(format_amount(dec!(-42.5), "$"), "-$42.50");
    }

    #[test]
    fn test_display_rounding_is_bankers() {
        // Half to even at two places: 2.125 -> 2.12, 2.135 -> 2.14
        assert_eq!(format_amount(dec!(2.125), "$"), "$2.12");
        assert_eq!(format_amount(dec!(2.135), "$"), "$2.14");
    }
}
