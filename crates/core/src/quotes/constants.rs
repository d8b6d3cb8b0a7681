use std::time::Duration;

use stockdesk_market_data::{Interval, Period};

/// Error text carried by batch elements that could not be priced.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// Placeholder for missing descriptive fields.
pub const NOT_AVAILABLE: &str = "N/A";

pub const DEFAULT_CURRENCY: &str = "USD";

/// Range and bar size used for "latest price" lookups.
pub const LATEST_PERIOD: Period = Period::D1;
pub const LATEST_INTERVAL: Interval = Interval::D1;

/// Defaults for the history endpoint.
pub const DEFAULT_HISTORY_PERIOD: &str = "1mo";
pub const DEFAULT_HISTORY_INTERVAL: &str = "1d";

/// Upper bound for a single provider call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);
