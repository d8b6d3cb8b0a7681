//! Quote Service.
//!
//! Entry point used by the HTTP layer. Combines the resolvers behind one
//! trait so the server (and its tests) depend on an interface rather than
//! on a concrete provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use stockdesk_market_data::{Interval, MarketDataProvider, Period};

use super::batch::resolve_many;
use super::client::MarketDataClient;
use super::constants::DEFAULT_PROVIDER_TIMEOUT;
use super::errors::{QuoteError, Result};
use super::history::format_history;
use super::model::{HistoryPoint, Quote, QuoteResult, SearchOutcome};
use super::resolver::resolve_one;
use super::search::search;

/// Unified trait for all quote operations.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Get the current quote for one symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Quote>;

    /// Get one result per symbol, in input order. Failures are embedded.
    async fn get_quotes(&self, symbols: &[String]) -> Vec<QuoteResult>;

    /// Get normalized history. `period` and `interval` are validated here.
    async fn get_history(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<HistoryPoint>>;

    /// Resolve a free-text query to at most one instrument.
    async fn search(&self, query: &str) -> SearchOutcome;
}

/// Quote service backed by a single market data provider.
pub struct QuoteService {
    client: MarketDataClient,
}

impl QuoteService {
    /// Create a service whose provider calls are bounded by `provider_timeout`.
    pub fn new(provider: Arc<dyn MarketDataProvider>, provider_timeout: Duration) -> Self {
        debug!(
            "Quote service using provider {} with {:?} timeout",
            provider.id(),
            provider_timeout
        );
        Self {
            client: MarketDataClient::new(provider, provider_timeout),
        }
    }

    /// Create a service with the default provider timeout.
    pub fn with_default_timeout(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::new(provider, DEFAULT_PROVIDER_TIMEOUT)
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        resolve_one(&self.client, symbol).await
    }

    async fn get_quotes(&self, symbols: &[String]) -> Vec<QuoteResult> {
        resolve_many(&self.client, symbols).await
    }

    async fn get_history(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<HistoryPoint>> {
        let period: Period = period.parse().map_err(QuoteError::history)?;
        let interval: Interval = interval.parse().map_err(QuoteError::history)?;
        format_history(&self.client, symbol, period, interval).await
    }

    async fn search(&self, query: &str) -> SearchOutcome {
        search(&self.client, query).await
    }
}
