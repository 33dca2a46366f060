//! Conversion between submitted decimal strings and pence
//!
//! Amounts cross the HTTP boundary as decimal strings ("15000.00") and live
//! in the core as whole pence. Parsing is exact: the string is read as a
//! decimal, scaled by 100 and truncated toward zero.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::AmountParseError;

/// Parse a decimal pounds string into pence
///
/// Sign is preserved so the core can reject non-positive amounts itself.
pub fn parse_minor_units(input: &str) -> Result<i64, AmountParseError> {
    let trimmed = input.trim();
    let value = Decimal::from_str(trimmed)
        .map_err(|_| AmountParseError::Format(input.to_string()))?;

    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|pence| pence.trunc())
        .and_then(|pence| pence.to_i64())
        .ok_or_else(|| AmountParseError::OutOfRange(input.to_string()))
}

/// Render pence as a pounds string with two decimals
pub fn format_minor_units(amount: i64) -> String {
    Decimal::new(amount, 2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_pounds() {
        assert_eq!(parse_minor_units("15000.00"), Ok(1_500_000));
        assert_eq!(parse_minor_units("25000"), Ok(2_500_000));
        assert_eq!(parse_minor_units("0.01"), Ok(1));
        assert_eq!(parse_minor_units(" 12.5 "), Ok(1_250));
    }

    #[test]
    fn truncates_sub_penny_digits() {
        assert_eq!(parse_minor_units("10.999"), Ok(1_099));
        assert_eq!(parse_minor_units("0.009"), Ok(0));
        assert_eq!(parse_minor_units("-1.555"), Ok(-155));
    }

    #[test]
    fn keeps_sign_and_zero_for_core_validation() {
        assert_eq!(parse_minor_units("0"), Ok(0));
        assert_eq!(parse_minor_units("-50.00"), Ok(-5_000));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "abc", "12,000.00", "£100", "1.2.3"] {
            assert!(
                matches!(parse_minor_units(bad), Err(AmountParseError::Format(_))),
                "expected format error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn rejects_values_beyond_i64_pence() {
        let err = parse_minor_units("100000000000000000000").unwrap_err();
        assert!(matches!(err, AmountParseError::OutOfRange(_)));
    }

    #[test]
    fn formats_pence_as_pounds() {
        assert_eq!(format_minor_units(1_500_000), "15000.00");
        assert_eq!(format_minor_units(1), "0.01");
        assert_eq!(format_minor_units(0), "0.00");
        assert_eq!(format_minor_units(-250), "-2.50");
    }
}
