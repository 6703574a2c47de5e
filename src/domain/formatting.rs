use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// `$1,234,567` — whole dollars with thousands separators, sign in front of
/// the currency symbol.
pub fn format_currency(amount: Decimal) -> String {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or(0);
    if whole < 0 {
        format!("-${}", group_thousands(whole.unsigned_abs()))
    } else {
        format!("${}", group_thousands(whole.unsigned_abs()))
    }
}

/// `1,234` — plain count with thousands separators.
pub fn format_count(value: i64) -> String {
    if value < 0 {
        format!("-{}", group_thousands(value.unsigned_abs() as u128))
    } else {
        format!("{}", group_thousands(value as u128))
    }
}

/// Month quantities print without a trailing `.0` when whole.
pub fn format_months(value: Decimal) -> String {
    if value.fract().is_zero() {
        value.trunc().to_string()
    } else {
        value.normalize().to_string()
    }
}

fn group_thousands(mut value: u128) -> String {
    let mut groups = Vec::new();
    loop {
        let chunk = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{:03}", chunk));
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(75000)), "$75,000");
        assert_eq!(format_currency(dec!(3000000)), "$3,000,000");
        assert_eq!(format_currency(dec!(23437500)), "$23,437,500");
    }

    #[test]
    fn test_currency_negative_and_rounded() {
        assert_eq!(format_currency(dec!(-1250)), "-$1,250");
        assert_eq!(format_currency(dec!(999.5)), "$1,000");
        assert_eq!(format_currency(dec!(999.4)), "$999");
    }

    #[test]
    fn test_count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(500), "500");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(-12345), "-12,345");
    }

    #[test]
    fn test_months_trim_trailing_zeroes() {
        assert_eq!(format_months(dec!(6)), "6");
        assert_eq!(format_months(dec!(6.0)), "6");
        assert_eq!(format_months(dec!(4.5)), "4.5");
    }
}
