//! Stockdesk Market Data Crate
//!
//! This crate provides provider-agnostic market data fetching capabilities
//! for the Stockdesk quote service.
//!
//! # Overview
//!
//! The market data crate supports:
//! - A provider abstraction ([`MarketDataProvider`]) with five capabilities:
//!   fast quote, historical bars, bulk historical bars, metadata and lookup
//! - A Yahoo Finance implementation ([`YahooProvider`])
//! - Typed errors that separate "no data" from "provider broken"
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Quote Service  |  (stockdesk-core: resolvers, normalizer)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Provider      |  (Yahoo, test doubles, ...)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  Bar / QuoteInfo | and |   BulkHistory    |  (raw market data)
//! +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Bar`] - One OHLCV bar as returned by a provider
//! - [`BulkHistory`] - Result of a multi-symbol history fetch
//! - [`QuoteInfo`] - Provider metadata for a symbol, every field optional
//! - [`Period`] / [`Interval`] - Recognized history range and bar size values

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

pub use models::{Bar, BulkHistory, Interval, Period, QuoteInfo};

pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
