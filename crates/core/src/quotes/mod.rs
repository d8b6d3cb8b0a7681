//! Quote module.
//!
//! - [`normalizer`] - Raw provider data to the canonical [`Quote`]
//! - [`resolver`] - Single-symbol price cascade
//! - [`batch`] - Multi-symbol resolution with a bulk fast path
//! - [`history`] - History formatting
//! - [`search`] - Query to instrument lookup
//! - [`service`] - [`QuoteServiceTrait`] and its provider-backed implementation
//! - [`client`] - Timeout-bounded facade over the market-data provider
//!
//! # Architecture
//!
//! ```text
//! QuoteService ─▶ resolver / batch / history / search ─▶ MarketDataClient ─▶ provider
//!                          │
//!                          ▼
//!                      normalizer
//! ```

pub mod batch;
pub mod client;
pub mod constants;
pub mod errors;
pub mod history;
pub mod model;
pub mod normalizer;
pub mod resolver;
pub mod search;
pub mod service;


pub use client::MarketDataClient;
pub use errors::{QuoteError, Result};
pub use model::{HistoryPoint, PartialBatchError, Quote, QuoteResult, SearchHit, SearchOutcome};
pub use normalizer::{normalize, normalize_at};
pub use resolver::PriceTier;
pub use service::{QuoteService, QuoteServiceTrait};
