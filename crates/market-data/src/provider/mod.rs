//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance implementation
//!
//! The quote service only depends on the trait, so tests substitute their
//! own providers and a second vendor can be added without touching the
//! resolvers.

mod traits;

pub mod yahoo;

pub use traits::MarketDataProvider;
