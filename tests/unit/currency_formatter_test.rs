// Default currency formatter
//
// Properties tested:
// 1. Symbol style groups thousands and uses the currency's minor-unit scale
// 2. Code style keeps the plain "CODE 0.00" rendering
// 3. Provider codes are accepted in any case
// 4. Rendering never loses the minor units

use invoice_lines::core::{Currency, CurrencyFormatter, CurrencyStyle, MinorUnitFormatter};
use proptest::prelude::*;
use rust_decimal::Decimal;

#[test]
fn test_symbol_style_examples() {
    let formatter = MinorUnitFormatter::new(CurrencyStyle::Symbol);

    assert_eq!(formatter.format_amount(1099, "usd"), "$10.99");
    assert_eq!(formatter.format_amount(100_000, "usd"), "$1,000.00");
    assert_eq!(formatter.format_amount(5, "gbp"), "£0.05");
    assert_eq!(formatter.format_amount(1_000_000, "jpy"), "¥1,000,000");
    assert_eq!(formatter.format_amount(-2_500, "eur"), "-€25.00");
}

#[test]
fn test_code_style_examples() {
    let formatter = MinorUnitFormatter::new(CurrencyStyle::Code);

    assert_eq!(formatter.format_amount(1099, "usd"), "USD 10.99");
    assert_eq!(formatter.format_amount(150_000, "IDR"), "IDR 150000");
}

#[test]
fn test_provider_codes_are_case_insensitive() {
    let formatter = MinorUnitFormatter::default();
    assert_eq!(
        formatter.format_amount(1099, "usd"),
        formatter.format_amount(1099, "USD")
    );
}

proptest! {
    /// Property: stripping the decoration gives back the exact major-unit value
    #[test]
    fn test_symbol_style_preserves_value(amount in 0i64..10_000_000_000i64) {
        let formatter = MinorUnitFormatter::default();
        let rendered = formatter.format_amount(amount, "usd");

        prop_assert!(rendered.starts_with('$'));
        let digits: String = rendered
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        let parsed: Decimal = digits.parse().unwrap();

        prop_assert_eq!(parsed, Currency::USD.minor_to_major(amount));
    }

    /// Property: code style always carries exactly the currency's scale
    #[test]
    fn test_code_style_uses_currency_scale(amount in 0i64..1_000_000_000i64) {
        let formatter = MinorUnitFormatter::new(CurrencyStyle::Code);

        let usd = formatter.format_amount(amount, "usd");
        let fraction = usd.rsplit_once('.').map(|(_, f)| f.len());
        prop_assert_eq!(fraction, Some(2));

        let jpy = formatter.format_amount(amount, "jpy");
        prop_assert!(!jpy.contains('.'));
    }
}
