//! Error types for the market data crate.
//!
//! [`MarketDataError`] is returned by every provider operation. Callers use
//! [`MarketDataError::is_not_found`] to tell a reachable-but-empty provider
//! apart from one that failed.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A request parameter (period, interval, ...) was rejected.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that could not be interpreted.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the provider answered but had nothing for the key.
    ///
    /// Every other variant means the provider call itself failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use stockdesk_market_data::errors::MarketDataError;
    ///
    /// let error = MarketDataError::SymbolNotFound("INVALID".to_string());
    /// assert!(error.is_not_found());
    ///
    /// let error = MarketDataError::Timeout { provider: "YAHOO".to_string() };
    /// assert!(!error.is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_))
    }

    /// Convenience constructor for provider failures.
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}
