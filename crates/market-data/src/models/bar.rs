use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar as returned by a provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Start of the bar
    pub timestamp: DateTime<Utc>,

    /// Opening price
    pub open: f64,

    /// High price
    pub high: f64,

    /// Low price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Trading volume
    pub volume: u64,
}

impl Bar {
    /// Create a full OHLCV bar
    pub fn ohlcv(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Create a bar where every price equals `close`
    pub fn flat(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self::ohlcv(timestamp, close, close, close, close, 0)
    }
}

/// Result of a bulk (multi-symbol) history fetch.
///
/// Bulk endpoints change shape with request cardinality: asking for several
/// symbols yields a table keyed by symbol, asking for exactly one yields a
/// flat series with no key. Both shapes are read through
/// [`closing_price`](Self::closing_price).
#[derive(Clone, Debug, PartialEq)]
pub enum BulkHistory {
    /// Multi-symbol table keyed by the requested symbol.
    Keyed(HashMap<String, Vec<Bar>>),

    /// Flat table for a single-symbol request.
    Single(Vec<Bar>),
}

impl BulkHistory {
    /// Bars for `symbol`, if the table has a series for it.
    ///
    /// A [`Single`](Self::Single) table belongs to the one symbol that was
    /// requested, so it answers for any symbol.
    pub fn series(&self, symbol: &str) -> Option<&[Bar]> {
        match self {
            Self::Keyed(table) => table
                .get(symbol)
                .or_else(|| {
                    table
                        .iter()
                        .find(|(key, _)| key.eq_ignore_ascii_case(symbol))
                        .map(|(_, bars)| bars)
                })
                .map(Vec::as_slice),
            Self::Single(bars) => Some(bars.as_slice()),
        }
    }

    /// Last closing price for `symbol`; `None` when the series is missing or empty.
    pub fn closing_price(&self, symbol: &str) -> Option<f64> {
        self.series(symbol)
            .and_then(|bars| bars.last())
            .map(|bar| bar.close)
    }

    /// Returns true for the flat single-symbol shape.
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_keyed_closing_price_uses_last_bar() {
        let mut table = HashMap::new();
        table.insert(
            "AAPL".to_string(),
            vec![Bar::flat(day(1), 148.0), Bar::flat(day(2), 150.25)],
        );
        table.insert("MSFT".to_string(), vec![Bar::flat(day(2), 410.0)]);
        let bulk = BulkHistory::Keyed(table);

        assert_eq!(bulk.closing_price("AAPL"), Some(150.25));
        assert_eq!(bulk.closing_price("MSFT"), Some(410.0));
        assert!(!bulk.is_single());
    }

    #[test]
    fn test_keyed_lookup_ignores_case() {
        let mut table = HashMap::new();
        table.insert("aapl".to_string(), vec![Bar::flat(day(1), 150.0)]);
        let bulk = BulkHistory::Keyed(table);

        assert_eq!(bulk.closing_price("AAPL"), Some(150.0));
    }

    #[test]
    fn test_keyed_missing_or_empty_series() {
        let mut table = HashMap::new();
        table.insert("EMPTY".to_string(), Vec::new());
        let bulk = BulkHistory::Keyed(table);

        assert_eq!(bulk.closing_price("EMPTY"), None);
        assert_eq!(bulk.closing_price("ABSENT"), None);
        assert!(bulk.series("ABSENT").is_none());
    }

    #[test]
    fn test_single_answers_for_requested_symbol() {
        let bulk = BulkHistory::Single(vec![Bar::flat(day(1), 99.5)]);

        assert!(bulk.is_single());
        assert_eq!(bulk.closing_price("AAPL"), Some(99.5));
        assert_eq!(BulkHistory::Single(Vec::new()).closing_price("AAPL"), None);
    }

    #[test]
    fn test_bar_ohlcv() {
        let bar = Bar::ohlcv(day(1), 148.0, 152.0, 147.5, 150.25, 1_000_000);
        assert_eq!(bar.open, 148.0);
        assert_eq!(bar.high, 152.0);
        assert_eq!(bar.low, 147.5);
        assert_eq!(bar.close, 150.25);
        assert_eq!(bar.volume, 1_000_000);
    }
}
