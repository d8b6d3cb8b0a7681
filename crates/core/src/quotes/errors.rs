//! Quote-related error types.

use thiserror::Error;

use stockdesk_market_data::MarketDataError;

/// Type alias for Result using [`QuoteError`].
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Errors raised while resolving quotes, history or search results.
///
/// Keeps "the provider had nothing" apart from "the provider failed" so the
/// HTTP layer can answer 404 or 500 without inspecting messages.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The provider answered but had no usable data.
    #[error("{0}")]
    NotFound(String),

    /// A provider call failed or timed out.
    #[error("Error fetching stock data: {0}")]
    Upstream(#[from] MarketDataError),

    /// A history request was rejected or its provider call failed.
    #[error("Error fetching historical data: {0}")]
    HistoryUpstream(MarketDataError),

    /// Derived values could not be computed from the provider data.
    #[error("Computation failed: {0}")]
    Computation(String),
}

impl QuoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Wraps a provider error raised while serving history.
    pub(crate) fn history(error: MarketDataError) -> Self {
        Self::HistoryUpstream(error)
    }
}
