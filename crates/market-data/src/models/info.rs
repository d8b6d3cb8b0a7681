use serde::{Deserialize, Serialize};

/// Symbol metadata from market data providers.
///
/// Providers fill whatever they know; every field may be absent and callers
/// apply their own defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteInfo {
    /// Symbol as reported by the provider (e.g., "AAPL")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// Full company name (e.g., "Apple Inc.")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Short display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Previous session's closing price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,

    /// Session volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,

    /// Market capitalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<u64>,

    /// Quote currency (ISO 4217)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Exchange code (e.g., "NMS")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// Business sector (e.g., "Technology")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Industry within sector (e.g., "Consumer Electronics")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Company website URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// 52-week high price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_high: Option<f64>,

    /// 52-week low price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_low: Option<f64>,
}

impl QuoteInfo {
    /// Create a new empty info record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with the symbol and long name set
    pub fn with_name(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            long_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the previous close
    pub fn previous_close(mut self, previous_close: f64) -> Self {
        self.previous_close = Some(previous_close);
        self
    }

    /// Set the sector
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Set the industry
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Set the exchange
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }
}
