use thousands::{digits, Separable, SeparatorPolicy};

/// Indian digit grouping: the last three digits, then groups of two (`12,34,567`).
pub const INDIAN_GROUPING: SeparatorPolicy<'static> = SeparatorPolicy {
    separator: ",",
    groups: &[3, 2],
    digits: digits::ASCII_DECIMAL,
};

pub const DEFAULT_CURRENCY: &str = "₹";

/// Cart totals. Wide enough that the sum of any cart's `u64` unit prices never overflows.
pub type Amount = u128;

/// Formats an amount with Indian digit grouping and no currency symbol.
pub fn group_amount(amount: Amount) -> String {
    amount.separate_by_policy(INDIAN_GROUPING)
}

/// Formats an amount prefixed with the given currency symbol.
pub fn format_amount(currency: &str, amount: Amount) -> String {
    format!("{currency}{}", group_amount(amount))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(4_000, "4,000")]
    #[case(12_345, "12,345")]
    #[case(123_456, "1,23,456")]
    #[case(1_234_567, "12,34,567")]
    #[case(123_456_789, "12,34,56,789")]
    fn test_group_amount(#[case] amount: Amount, #[case] expected: &str) {
        assert_eq!(group_amount(amount), expected);
    }

    #[test]
    fn test_format_amount_with_symbol() {
        assert_eq!(format_amount(DEFAULT_CURRENCY, 4_000), "₹4,000");
        assert_eq!(format_amount("Rs. ", 150_000), "Rs. 1,50,000");
    }
}
