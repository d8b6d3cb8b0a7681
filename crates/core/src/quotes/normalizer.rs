//! Quote Normalizer: raw provider data for one symbol to a canonical [`Quote`].

use chrono::{DateTime, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use stockdesk_market_data::QuoteInfo;

use super::constants::{DEFAULT_CURRENCY, NOT_AVAILABLE};
use super::errors::{QuoteError, Result};
use super::model::Quote;

/// Build a quote stamped with the current time.
pub fn normalize(symbol: &str, info: &QuoteInfo, current_price: f64) -> Result<Quote> {
    normalize_at(symbol, info, current_price, Utc::now())
}

/// Build a quote from provider metadata and a resolved price.
///
/// Missing descriptive fields get fixed defaults and a missing previous close
/// falls back to the current price. Non-finite numbers are rejected.
pub fn normalize_at(
    symbol: &str,
    info: &QuoteInfo,
    current_price: f64,
    timestamp: DateTime<Utc>,
) -> Result<Quote> {
    let current = to_decimal("current price", current_price)?;
    let previous = match info.previous_close {
        Some(value) => to_decimal("previous close", value)?,
        None => current,
    };

    let change = current
        .checked_sub(previous)
        .ok_or_else(|| overflow("change"))?;
    let change_percent = if previous.is_zero() {
        Decimal::ZERO
    } else {
        change
            .checked_div(previous)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| overflow("change percent"))?
    };

    Ok(Quote {
        symbol: symbol.to_uppercase(),
        company_name: info
            .long_name
            .clone()
            .unwrap_or_else(|| symbol.to_string()),
        current_price: current,
        previous_close: previous,
        change,
        change_percent,
        volume: info.volume.unwrap_or(0),
        market_cap: info.market_cap.unwrap_or(0),
        currency: or_default(&info.currency, DEFAULT_CURRENCY),
        exchange: or_default(&info.exchange, NOT_AVAILABLE),
        sector: or_default(&info.sector, NOT_AVAILABLE),
        industry: or_default(&info.industry, NOT_AVAILABLE),
        website: or_default(&info.website, NOT_AVAILABLE),
        logo: info.logo_url.clone().unwrap_or_default(),
        fifty_two_week_high: optional_decimal("52-week high", info.fifty_two_week_high)?,
        fifty_two_week_low: optional_decimal("52-week low", info.fifty_two_week_low)?,
        timestamp,
    })
}

pub(crate) fn to_decimal(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(QuoteError::Computation(format!(
            "{field} is not a finite number: {value}"
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| QuoteError::Computation(format!("{field} out of range: {value}")))
}

fn optional_decimal(field: &str, value: Option<f64>) -> Result<Decimal> {
    value.map_or(Ok(Decimal::ZERO), |v| to_decimal(field, v))
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

fn overflow(field: &str) -> QuoteError {
    QuoteError::Computation(format!("{field} overflowed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_change_and_percent() {
        let info = QuoteInfo::with_name("AAPL", "Apple Inc.").previous_close(148.0);
        let quote = normalize_at("aapl", &info, 150.0, at()).unwrap();

        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.company_name, "Apple Inc.");
        assert_eq!(quote.current_price, dec!(150));
        assert_eq!(quote.previous_close, dec!(148));
        assert_eq!(quote.change, dec!(2));
        assert_eq!(quote.change_percent.round_dp(2), dec!(1.35));
        assert_eq!(quote.change, quote.current_price - quote.previous_close);
    }

    #[test]
    fn test_missing_previous_close_defaults_to_price() {
        let quote = normalize_at("MSFT", &QuoteInfo::new(), 410.5, at()).unwrap();

        assert_eq!(quote.previous_close, quote.current_price);
        assert_eq!(quote.change, Decimal::ZERO);
        assert_eq!(quote.change_percent, Decimal::ZERO);
    }

    #[test]
    fn test_zero_previous_close_gives_zero_percent() {
        let info = QuoteInfo::new().previous_close(0.0);
        let quote = normalize_at("NEWCO", &info, 12.0, at()).unwrap();

        assert_eq!(quote.change, dec!(12));
        assert_eq!(quote.change_percent, Decimal::ZERO);
    }

    #[test]
    fn test_descriptive_defaults() {
        let quote = normalize_at("shop.to", &QuoteInfo::new(), 100.0, at()).unwrap();

        assert_eq!(quote.symbol, "SHOP.TO");
        // Company name falls back to the symbol as given
        assert_eq!(quote.company_name, "shop.to");
        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.exchange, "N/A");
        assert_eq!(quote.sector, "N/A");
        assert_eq!(quote.industry, "N/A");
        assert_eq!(quote.website, "N/A");
        assert_eq!(quote.logo, "");
        assert_eq!(quote.volume, 0);
        assert_eq!(quote.market_cap, 0);
        assert_eq!(quote.fifty_two_week_high, Decimal::ZERO);
        assert_eq!(quote.fifty_two_week_low, Decimal::ZERO);
        assert_eq!(quote.timestamp, at());
    }

    #[test]
    fn test_non_finite_input_is_computation_error() {
        let err = normalize_at("AAPL", &QuoteInfo::new(), f64::NAN, at()).unwrap_err();
        assert!(matches!(err, QuoteError::Computation(_)));

        let info = QuoteInfo::new().previous_close(f64::INFINITY);
        let err = normalize_at("AAPL", &info, 150.0, at()).unwrap_err();
        assert!(matches!(err, QuoteError::Computation(_)));
    }

    #[test]
    fn test_change_identity_holds_for_awkward_values() {
        let cases = [(0.1, 0.3), (99.99, 100.01), (1e-6, 3.0), (12345.678, 0.5)];
        for (price, prev) in cases {
            let info = QuoteInfo::new().previous_close(prev);
            let quote = normalize_at("X", &info, price, at()).unwrap();
            assert_eq!(quote.change, quote.current_price - quote.previous_close);
            let diff = (price - prev) - num_traits::ToPrimitive::to_f64(&quote.change).unwrap();
            assert!(diff.abs() < 1e-9, "change drifted for {price} / {prev}");
        }
    }
}
