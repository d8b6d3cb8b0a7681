//! Stockdesk Core - quote resolution, normalization and the quote service.
//!
//! This crate turns raw provider data into the canonical quote, history and
//! search shapes served over HTTP. It is provider-agnostic: everything it
//! needs from upstream goes through
//! [`stockdesk_market_data::MarketDataProvider`].

pub mod quotes;

pub use quotes::{Quote, QuoteError, QuoteResult, QuoteService, QuoteServiceTrait, Result};
