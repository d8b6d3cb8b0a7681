//! Property-based tests for quote normalization.
//!
//! These tests verify that the derived-field invariants hold across random
//! prices, using the `proptest` crate for test case generation.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use stockdesk_core::quotes::normalize_at;
use stockdesk_market_data::QuoteInfo;

// =============================================================================
// Generators
// =============================================================================

fn arb_price() -> impl Strategy<Value = f64> {
    0.0001f64..100_000.0
}

fn arb_symbol() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,5}(\\.[A-Z]{1,2})?"
}

fn normalize(symbol: &str, price: f64, previous_close: Option<f64>) -> stockdesk_core::Quote {
    let mut info = QuoteInfo::new();
    info.previous_close = previous_close;
    normalize_at(
        symbol,
        &info,
        price,
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
    )
    .unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn change_is_price_minus_previous_close(price in arb_price(), prev in arb_price()) {
        let quote = normalize("AAPL", price, Some(prev));

        prop_assert_eq!(quote.change, quote.current_price - quote.previous_close);
        let change = quote.change.to_f64().unwrap();
        prop_assert!((change - (price - prev)).abs() < 1e-6);
    }

    #[test]
    fn change_percent_is_relative_to_previous_close(price in arb_price(), prev in arb_price()) {
        let quote = normalize("AAPL", price, Some(prev));

        let expected = (price - prev) / prev * 100.0;
        let actual = quote.change_percent.to_f64().unwrap();
        prop_assert!((actual - expected).abs() <= 1e-6 * expected.abs().max(1.0));
    }

    #[test]
    fn zero_previous_close_means_zero_percent(price in arb_price()) {
        let quote = normalize("AAPL", price, Some(0.0));

        prop_assert_eq!(quote.change_percent, Decimal::ZERO);
        prop_assert_eq!(quote.change, quote.current_price);
    }

    #[test]
    fn missing_previous_close_means_no_change(price in arb_price()) {
        let quote = normalize("AAPL", price, None);

        prop_assert_eq!(quote.previous_close, quote.current_price);
        prop_assert_eq!(quote.change, Decimal::ZERO);
        prop_assert_eq!(quote.change_percent, Decimal::ZERO);
    }

    #[test]
    fn symbol_is_uppercased(symbol in arb_symbol(), price in arb_price()) {
        let quote = normalize(&symbol, price, None);

        prop_assert_eq!(quote.symbol, symbol.to_uppercase());
        prop_assert_eq!(quote.company_name, symbol);
    }

    #[test]
    fn serialized_prices_have_two_decimals(price in 0.01f64..10_000.0, prev in 0.01f64..10_000.0) {
        let quote = normalize("AAPL", price, Some(prev));
        let value = serde_json::to_value(&quote).unwrap();

        for field in ["currentPrice", "previousClose", "change", "changePercent"] {
            let text = value[field].to_string();
            let decimals = text.split('.').nth(1).map_or(0, str::len);
            prop_assert!(
                decimals <= 2 && !text.contains('e'),
                "{} = {} has more than two decimals",
                field,
                text
            );
        }
    }
}
