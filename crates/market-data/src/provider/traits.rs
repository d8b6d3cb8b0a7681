//! Market data provider trait definitions.
//!
//! This module defines the `MarketDataProvider` trait that the quote
//! service talks to. Everything above this trait is provider-agnostic.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Bar, BulkHistory, Interval, Period, QuoteInfo};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
/// Every method is fallible; "the provider answered but had nothing" is
/// expressed through empty results or `Ok(None)` where possible, and through
/// [`MarketDataError::SymbolNotFound`] otherwise.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockdesk_market_data::provider::MarketDataProvider;
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement the fetch methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// timeout errors.
    fn id(&self) -> &'static str;

    /// Cheap latest-price lookup.
    ///
    /// Returns `Ok(None)` when the provider has no price for the symbol.
    async fn fast_quote(&self, symbol: &str) -> Result<Option<f64>, MarketDataError>;

    /// Historical bars for one symbol, ordered by timestamp ascending.
    ///
    /// An unknown symbol yields an empty vector.
    async fn history(
        &self,
        symbol: &str,
        period: Period,
        interval: Interval,
    ) -> Result<Vec<Bar>, MarketDataError>;

    /// Historical bars for many symbols in one call.
    ///
    /// Returns [`BulkHistory::Single`] when exactly one distinct symbol was
    /// requested and [`BulkHistory::Keyed`] otherwise.
    async fn bulk_history(
        &self,
        symbols: &[String],
        period: Period,
        interval: Interval,
    ) -> Result<BulkHistory, MarketDataError>;

    /// Metadata for a symbol.
    async fn info(&self, symbol: &str) -> Result<QuoteInfo, MarketDataError>;

    /// Resolve a free-text query to a single instrument.
    ///
    /// Default implementation treats the query as a symbol and fetches its
    /// metadata; a symbol the provider does not know yields `Ok(None)`.
    async fn lookup(&self, query: &str) -> Result<Option<QuoteInfo>, MarketDataError> {
        match self.info(query).await {
            Ok(info) if info.symbol.is_some() => Ok(Some(info)),
            Ok(_) => Ok(None),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
