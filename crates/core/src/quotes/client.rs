//! Market Data Client - Facade for the market-data crate.
//!
//! Every provider call made by the quote service goes through this client,
//! which bounds it with a timeout. An elapsed call is reported as
//! [`MarketDataError::Timeout`] so the resolvers treat it like any other
//! upstream failure.
//!
//! ```text
//! resolvers ──▶ MarketDataClient ──▶ tokio::time::timeout ──▶ dyn MarketDataProvider
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use stockdesk_market_data::{
    Bar, BulkHistory, Interval, MarketDataError, MarketDataProvider, Period, QuoteInfo,
};

/// Timeout-bounded access to a market data provider.
#[derive(Clone)]
pub struct MarketDataClient {
    provider: Arc<dyn MarketDataProvider>,
    timeout: Duration,
}

impl MarketDataClient {
    pub fn new(provider: Arc<dyn MarketDataProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    async fn bounded<T, F>(&self, operation: &str, call: F) -> Result<T, MarketDataError>
    where
        F: Future<Output = Result<T, MarketDataError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                debug!(
                    "{} call to {} exceeded {:?}",
                    operation,
                    self.provider.id(),
                    self.timeout
                );
                Err(MarketDataError::Timeout {
                    provider: self.provider.id().to_string(),
                })
            }
        }
    }

    pub async fn fast_quote(&self, symbol: &str) -> Result<Option<f64>, MarketDataError> {
        self.bounded("fast_quote", self.provider.fast_quote(symbol))
            .await
    }

    pub async fn history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<Bar>, MarketDataError> {
        self.bounded("history", self.provider.history(symbol, period, interval))
            .await
    }

    pub async fn bulk_history(
        &self,
        symbols: &[String],
        period: Period,
        interval: Interval,
    ) -> Result<BulkHistory, MarketDataError> {
        self.bounded(
            "bulk_history",
            self.provider.bulk_history(symbols, period, interval),
        )
        .await
    }

    pub async fn info(&self, symbol: &str) -> Result<QuoteInfo, MarketDataError> {
        self.bounded("info", self.provider.info(symbol)).await
    }

    pub async fn lookup(&self, query: &str) -> Result<Option<QuoteInfo>, MarketDataError> {
        self.bounded("lookup", self.provider.lookup(query)).await
    }
}
