//! Market data models
//!
//! This module contains the raw data types providers hand back:
//! - `bar` - OHLCV bars (Bar) and the bulk-fetch result (BulkHistory)
//! - `info` - Provider metadata for a symbol (QuoteInfo)
//! - `params` - Recognized history ranges and bar sizes (Period, Interval)

mod bar;
mod info;
mod params;

pub use bar::{Bar, BulkHistory};
pub use info::QuoteInfo;
pub use params::{Interval, Period};
