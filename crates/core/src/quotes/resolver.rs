//! Single-Symbol Resolver.
//!
//! A price is resolved through an ordered cascade of tiers:
//!
//! 1. [`PriceTier::FastQuote`] - the provider's cheap latest-price lookup.
//!    A failure here is logged and the cascade moves on.
//! 2. [`PriceTier::DailyBar`] - the last close of a one-day daily bar.
//!    A failure here is final and surfaces as [`QuoteError::Upstream`].
//!
//! "Not found" is reported only when every tier answered without a usable
//! price. If an earlier tier failed and the daily bar is empty, that
//! earlier failure is returned as [`QuoteError::Upstream`].
//!
//! Callers that already tried some tiers resume the cascade with
//! [`resolve_price_from`] so no provider call is repeated.

use log::{debug, warn};
use stockdesk_market_data::{MarketDataError, QuoteInfo};

use super::client::MarketDataClient;
use super::constants::{LATEST_INTERVAL, LATEST_PERIOD};
use super::errors::{QuoteError, Result};
use super::model::Quote;
use super::normalizer::normalize;

/// Price sources in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceTier {
    FastQuote,
    DailyBar,
}

impl PriceTier {
    pub const CASCADE: [PriceTier; 2] = [PriceTier::FastQuote, PriceTier::DailyBar];

    /// Tiers from `self` to the end of the cascade.
    pub fn remaining(self) -> impl Iterator<Item = PriceTier> {
        Self::CASCADE.into_iter().filter(move |tier| *tier >= self)
    }
}

/// A price a quote can be built on: finite and non-zero.
pub(crate) fn usable_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| p.is_finite() && *p != 0.0)
}

fn not_found(symbol: &str) -> QuoteError {
    QuoteError::NotFound(format!("No data found for symbol: {symbol}"))
}

/// Resolve a price for `symbol`, starting the cascade at `start`.
pub async fn resolve_price_from(
    client: &MarketDataClient,
    symbol: &str,
    start: PriceTier,
) -> Result<f64> {
    // First failure of an earlier tier; an empty later tier must not mask it.
    let mut failure: Option<MarketDataError> = None;

    for tier in start.remaining() {
        match tier {
            PriceTier::FastQuote => match client.fast_quote(symbol).await {
                Ok(price) => {
                    if let Some(price) = usable_price(price) {
                        return Ok(price);
                    }
                    debug!("No fast quote for {}, trying daily bar", symbol);
                }
                Err(e) => {
                    debug!("Fast quote failed for {}: {}, trying daily bar", symbol, e);
                    failure = Some(e);
                }
            },
            PriceTier::DailyBar => {
                let bars = client
                    .history(symbol, LATEST_PERIOD, LATEST_INTERVAL)
                    .await?;
                if let Some(price) = usable_price(bars.last().map(|bar| bar.close)) {
                    return Ok(price);
                }
            }
        }
    }

    match failure {
        Some(e) => {
            warn!("No daily bar for {} after fast quote failed: {}", symbol, e);
            Err(QuoteError::Upstream(e))
        }
        None => Err(not_found(symbol)),
    }
}

/// Provider metadata for `symbol`, or an empty record when it can't be fetched.
pub async fn fetch_info(client: &MarketDataClient, symbol: &str) -> QuoteInfo {
    match client.info(symbol).await {
        Ok(info) => info,
        Err(MarketDataError::SymbolNotFound(_)) => {
            debug!("No metadata for {}, using defaults", symbol);
            QuoteInfo::default()
        }
        Err(e) => {
            warn!("Failed to fetch metadata for {}: {}", symbol, e);
            QuoteInfo::default()
        }
    }
}

/// Build the quote for an already resolved price.
pub async fn quote_for(client: &MarketDataClient, symbol: &str, price: f64) -> Result<Quote> {
    let info = fetch_info(client, symbol).await;
    normalize(symbol, &info, price)
}

/// Resolve the full quote for one symbol.
pub async fn resolve_one(client: &MarketDataClient, symbol: &str) -> Result<Quote> {
    let price = resolve_price_from(client, symbol, PriceTier::FastQuote).await?;
    quote_for(client, symbol, price).await
}
