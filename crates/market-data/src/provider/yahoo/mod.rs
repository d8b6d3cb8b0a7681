//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance API to fetch market data for:
//! - Equities/ETFs (e.g., AAPL, SHOP.TO)
//! - Cryptocurrencies (e.g., BTC-USD)
//! - Foreign exchange rates (e.g., EURUSD=X)
//!
//! Bars come from the chart endpoint through `yahoo_finance_api`; prices and
//! metadata come from the crumb-authenticated quoteSummary endpoint.

mod models;

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use futures::future::try_join_all;
use lazy_static::lazy_static;
use reqwest::{header, StatusCode};
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{Bar, BulkHistory, Interval, Period, QuoteInfo};
use crate::provider::MarketDataProvider;

use models::{raw, YahooQuoteSummaryResponse, YahooQuoteSummaryResult};

const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const PRICE_MODULES: &str = "price";
const INFO_MODULES: &str = "price,summaryProfile,summaryDetail";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub async fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to initialize Yahoo connector: {}", e),
            )
        })?;
        Ok(Self {
            connector,
            client: reqwest::Client::new(),
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        if let Ok(guard) = YAHOO_CRUMB.read() {
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to get cookie: {}", e)))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::provider(PROVIDER_ID, "Failed to parse Yahoo cookie"))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to get crumb: {}", e)))?
            .text()
            .await
            .map_err(|e| MarketDataError::provider(PROVIDER_ID, format!("Failed to read crumb: {}", e)))?;

        let crumb_data = CrumbData { cookie, crumb };

        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = Some(crumb_data.clone());
        }

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // quoteSummary
    // ========================================================================

    /// Fetch the given quoteSummary modules for a symbol.
    async fn fetch_quote_summary(
        &self,
        symbol: &str,
        modules: &str,
    ) -> Result<YahooQuoteSummaryResult, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            encode(symbol),
            modules,
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                self.clear_crumb();
                return Err(MarketDataError::provider(
                    PROVIDER_ID,
                    "Yahoo authentication expired",
                ));
            }
            StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            status if !status.is_success() => {
                return Err(MarketDataError::provider(
                    PROVIDER_ID,
                    format!("quoteSummary request for {} returned {}", symbol, status),
                ));
            }
            _ => {}
        }

        let data: YahooQuoteSummaryResponse = response.json().await.map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to parse quoteSummary response: {}", e),
            )
        })?;

        if let Some(error) = data.quote_summary.error.as_ref() {
            debug!(
                "quoteSummary error for {}: {:?} {:?}",
                symbol, error.code, error.description
            );
        }

        data.quote_summary
            .into_first()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fast_quote(&self, symbol: &str) -> Result<Option<f64>, MarketDataError> {
        debug!("Fetching fast quote for {} from Yahoo", symbol);

        match self.fetch_quote_summary(symbol, PRICE_MODULES).await {
            Ok(result) => Ok(result
                .price
                .as_ref()
                .and_then(|p| raw(&p.regular_market_price))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<Bar>, MarketDataError> {
        debug!(
            "Fetching {} history at {} for {} from Yahoo",
            period, interval, symbol
        );

        let response = match self
            .connector
            .get_quote_range(symbol, interval.as_str(), period.as_str())
            .await
        {
            Ok(response) => response,
            Err(yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => {
                return Ok(Vec::new())
            }
            Err(e) => return Err(MarketDataError::provider(PROVIDER_ID, e.to_string())),
        };

        match response.quotes() {
            Ok(quotes) => Ok(to_bars(symbol, quotes)),
            Err(yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) => {
                warn!("No {} history returned for '{}'", period, symbol);
                Ok(Vec::new())
            }
            Err(e) => Err(MarketDataError::provider(PROVIDER_ID, e.to_string())),
        }
    }

    async fn bulk_history(
        &self,
        symbols: &[String],
        period: Period,
        interval: Interval,
    ) -> Result<BulkHistory, MarketDataError> {
        let unique = unique_symbols(symbols);

        debug!("Fetching bulk history for {} symbols from Yahoo", unique.len());

        let series = try_join_all(
            unique
                .iter()
                .map(|symbol| self.history(symbol, period, interval)),
        )
        .await?;

        if unique.len() == 1 {
            return Ok(BulkHistory::Single(
                series.into_iter().next().unwrap_or_default(),
            ));
        }

        let table: HashMap<String, Vec<Bar>> = unique
            .into_iter()
            .map(str::to_string)
            .zip(series)
            .collect();
        Ok(BulkHistory::Keyed(table))
    }

    async fn info(&self, symbol: &str) -> Result<QuoteInfo, MarketDataError> {
        debug!("Fetching info for {} from Yahoo", symbol);

        let result = self.fetch_quote_summary(symbol, INFO_MODULES).await?;
        Ok(map_quote_summary_to_info(&result))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Symbols in first-seen order with duplicates removed.
fn unique_symbols(symbols: &[String]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(symbols.len());
    symbols
        .iter()
        .map(String::as_str)
        .filter(|symbol| seen.insert(*symbol))
        .collect()
}

/// Convert chart rows to bars, skipping rows with an unusable timestamp.
fn to_bars(symbol: &str, quotes: Vec<yahoo::Quote>) -> Vec<Bar> {
    quotes
        .into_iter()
        .filter_map(|q| {
            let timestamp: Option<DateTime<Utc>> =
                Utc.timestamp_opt(q.timestamp as i64, 0).single();
            match timestamp {
                Some(timestamp) => Some(Bar::ohlcv(
                    timestamp, q.open, q.high, q.low, q.close, q.volume,
                )),
                None => {
                    warn!(
                        "Skipping {} bar with invalid timestamp {}",
                        symbol, q.timestamp
                    );
                    None
                }
            }
        })
        .collect()
}

/// Map a quoteSummary result to provider metadata.
fn map_quote_summary_to_info(result: &YahooQuoteSummaryResult) -> QuoteInfo {
    let price = result.price.as_ref();
    let summary = result.summary_profile.as_ref();
    let detail = result.summary_detail.as_ref();

    QuoteInfo {
        symbol: price.and_then(|p| p.symbol.clone()),
        long_name: price.and_then(|p| p.long_name.as_deref()).and_then(clean_name),
        short_name: price.and_then(|p| p.short_name.as_deref()).and_then(clean_name),
        previous_close: detail
            .and_then(|d| raw(&d.previous_close))
            .or_else(|| price.and_then(|p| raw(&p.regular_market_previous_close))),
        volume: detail
            .and_then(|d| raw(&d.volume))
            .or_else(|| price.and_then(|p| raw(&p.regular_market_volume)))
            .and_then(to_whole),
        market_cap: detail
            .and_then(|d| raw(&d.market_cap))
            .or_else(|| price.and_then(|p| raw(&p.market_cap)))
            .and_then(to_whole),
        currency: price
            .and_then(|p| p.currency.clone())
            .or_else(|| detail.and_then(|d| d.currency.clone())),
        exchange: price.and_then(|p| p.exchange.clone().or_else(|| p.exchange_name.clone())),
        sector: summary
            .and_then(|s| s.sector.as_ref())
            .map(|s| format_sector(s)),
        industry: summary.and_then(|s| s.industry.clone()),
        website: summary.and_then(|s| s.website.clone()),
        logo_url: None,
        fifty_two_week_high: detail.and_then(|d| raw(&d.fifty_two_week_high)),
        fifty_two_week_low: detail.and_then(|d| raw(&d.fifty_two_week_low)),
    }
}

/// Decode HTML entities Yahoo leaves in names; blank names become `None`.
fn clean_name(name: &str) -> Option<String> {
    let name = name.replace("&amp;", "&");
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn to_whole(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as u64)
}

/// Convert snake_case sector to Title Case.
fn format_sector(sector: &str) -> String {
    sector
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name() {
        assert_eq!(
            clean_name("Apple Inc &amp; Co"),
            Some("Apple Inc & Co".to_string())
        );
        assert_eq!(clean_name("  "), None);
    }

    #[test]
    fn test_format_sector() {
        assert_eq!(format_sector("technology"), "Technology");
        assert_eq!(format_sector("basic_materials"), "Basic Materials");
        assert_eq!(format_sector("real_estate"), "Real Estate");
        assert_eq!(format_sector("Technology"), "Technology");
    }

    #[test]
    fn test_unique_symbols_keeps_first_seen_order() {
        let symbols: Vec<String> = ["MSFT", "AAPL", "MSFT", "TSLA", "AAPL"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(unique_symbols(&symbols), vec!["MSFT", "AAPL", "TSLA"]);
        assert!(unique_symbols(&[]).is_empty());
    }

    #[test]
    fn test_to_whole() {
        assert_eq!(to_whole(52_000_000.0), Some(52_000_000));
        assert_eq!(to_whole(-1.0), None);
        assert_eq!(to_whole(f64::NAN), None);
    }

    #[test]
    fn test_to_bars_keeps_valid_rows() {
        let quotes = vec![
            yahoo::Quote {
                timestamp: 1_709_251_200,
                open: 148.0,
                high: 152.0,
                low: 147.5,
                volume: 1_000,
                close: 150.25,
                adjclose: 150.25,
            },
            yahoo::Quote {
                timestamp: 1_709_337_600,
                open: 150.0,
                high: 151.0,
                low: 149.0,
                volume: 2_000,
                close: 150.5,
                adjclose: 150.5,
            },
        ];

        let bars = to_bars("AAPL", quotes);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 150.25);
        assert_eq!(bars[0].timestamp.format("%Y-%m-%d").to_string(), "2024-03-01");
        assert_eq!(bars[1].volume, 2_000);
    }

    #[test]
    fn test_map_quote_summary_to_info() {
        let json = r#"{
            "price": {
                "symbol": "AAPL",
                "currency": "USD",
                "longName": "Apple Inc.",
                "shortName": "Apple",
                "exchangeName": "NasdaqGS",
                "regularMarketPrice": {"raw": 150.25},
                "regularMarketPreviousClose": {"raw": 147.0}
            },
            "summaryProfile": {
                "sector": "consumer_cyclical",
                "industry": "Consumer Electronics"
            },
            "summaryDetail": {
                "previousClose": {"raw": 148.0},
                "volume": {"raw": 52000000},
                "marketCap": {"raw": 2800000000000},
                "fiftyTwoWeekHigh": {"raw": 199.62},
                "fiftyTwoWeekLow": {"raw": 124.17}
            }
        }"#;
        let result: YahooQuoteSummaryResult = serde_json::from_str(json).unwrap();
        let info = map_quote_summary_to_info(&result);

        assert_eq!(info.symbol.as_deref(), Some("AAPL"));
        assert_eq!(info.long_name.as_deref(), Some("Apple Inc."));
        assert_eq!(info.exchange.as_deref(), Some("NasdaqGS"));
        // summaryDetail wins over the price module
        assert_eq!(info.previous_close, Some(148.0));
        assert_eq!(info.volume, Some(52_000_000));
        assert_eq!(info.market_cap, Some(2_800_000_000_000));
        assert_eq!(info.sector.as_deref(), Some("Consumer Cyclical"));
        assert_eq!(info.industry.as_deref(), Some("Consumer Electronics"));
        assert_eq!(info.website, None);
        assert_eq!(info.fifty_two_week_low, Some(124.17));
    }

    #[test]
    fn test_map_quote_summary_price_only() {
        let json = r#"{
            "price": {
                "symbol": "BTC-USD",
                "regularMarketPrice": {"raw": 64000.0},
                "regularMarketPreviousClose": {"raw": 63000.0}
            }
        }"#;
        let result: YahooQuoteSummaryResult = serde_json::from_str(json).unwrap();
        let info = map_quote_summary_to_info(&result);

        assert_eq!(info.previous_close, Some(63000.0));
        assert_eq!(info.sector, None);
        assert_eq!(info.market_cap, None);
    }
}
