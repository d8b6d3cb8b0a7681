//! Quote domain models.
//!
//! These are the canonical shapes returned to clients. Prices are kept as
//! unrounded [`Decimal`] values internally and rounded to two decimal places
//! only when serialized.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Serializes a decimal as a JSON number rounded to two places.
mod round2 {
    use rust_decimal::Decimal;
    use serde::{ser::Error, Serializer};

    // Parsing the decimal text yields the nearest f64, so the JSON number
    // prints with at most two fractional digits.
    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let rounded: f64 = value
            .round_dp(2)
            .to_string()
            .parse()
            .map_err(S::Error::custom)?;
        serializer.serialize_f64(rounded)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// Canonical quote for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Uppercased ticker
    pub symbol: String,
    pub company_name: String,
    #[serde(with = "round2")]
    pub current_price: Decimal,
    #[serde(with = "round2")]
    pub previous_close: Decimal,
    /// `current_price - previous_close`
    #[serde(with = "round2")]
    pub change: Decimal,
    /// Percent change against the previous close, zero when that close is zero
    #[serde(with = "round2")]
    pub change_percent: Decimal,
    pub volume: u64,
    pub market_cap: u64,
    pub currency: String,
    pub exchange: String,
    pub sector: String,
    pub industry: String,
    pub website: String,
    pub logo: String,
    #[serde(with = "round2")]
    pub fifty_two_week_high: Decimal,
    #[serde(with = "round2")]
    pub fifty_two_week_low: Decimal,
    /// When the quote was assembled
    pub timestamp: DateTime<Utc>,
}

/// Error-tagged element of a batch response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartialBatchError {
    pub symbol: String,
    pub error: String,
}

/// One element of a batch response: a quote or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuoteResult {
    Quote(Box<Quote>),
    Error(PartialBatchError),
}

impl QuoteResult {
    pub fn error(symbol: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Error(PartialBatchError {
            symbol: symbol.into(),
            error: error.into(),
        })
    }

    /// Symbol this element answers for.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Quote(quote) => &quote.symbol,
            Self::Error(err) => &err.symbol,
        }
    }

    pub fn as_quote(&self) -> Option<&Quote> {
        match self {
            Self::Quote(quote) => Some(quote),
            Self::Error(_) => None,
        }
    }
}

impl From<Quote> for QuoteResult {
    fn from(quote: Quote) -> Self {
        Self::Quote(Box::new(quote))
    }
}

// =============================================================================
// History
// =============================================================================

/// One normalized history bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub date: DateTime<Utc>,
    #[serde(with = "round2")]
    pub open: Decimal,
    #[serde(with = "round2")]
    pub high: Decimal,
    #[serde(with = "round2")]
    pub low: Decimal,
    #[serde(with = "round2")]
    pub close: Decimal,
    pub volume: u64,
}

// =============================================================================
// Search
// =============================================================================

/// Instrument matched by a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub symbol: String,
    pub company_name: String,
    pub exchange: String,
    pub sector: String,
    pub industry: String,
}

/// Search response: zero or one hit, plus a diagnostic when the lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub data: Vec<SearchHit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchOutcome {
    pub fn hit(hit: SearchHit) -> Self {
        Self {
            data: vec![hit],
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            error: Some(message.into()),
        }
    }
}
