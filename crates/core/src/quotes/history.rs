//! History Formatter: provider bars to ordered [`HistoryPoint`]s.

use log::warn;
use stockdesk_market_data::{Bar, Interval, Period};

use super::client::MarketDataClient;
use super::errors::{QuoteError, Result};
use super::model::HistoryPoint;
use super::normalizer::to_decimal;

/// Fetch and normalize the history of `symbol`. No fallback is attempted.
///
/// Provider failures are reported as [`QuoteError::HistoryUpstream`].
pub async fn format_history(
    client: &MarketDataClient,
    symbol: &str,
    period: Period,
    interval: Interval,
) -> Result<Vec<HistoryPoint>> {
    let bars = client
        .history(symbol, period, interval)
        .await
        .map_err(QuoteError::history)?;
    let points = to_points(symbol, bars);

    if points.is_empty() {
        return Err(QuoteError::NotFound(format!(
            "No historical data found for symbol: {symbol}"
        )));
    }
    Ok(points)
}

/// Convert bars, skipping ones with non-finite prices, sorted by date.
fn to_points(symbol: &str, bars: Vec<Bar>) -> Vec<HistoryPoint> {
    let mut points: Vec<HistoryPoint> = bars
        .into_iter()
        .filter_map(|bar| match to_point(&bar) {
            Ok(point) => Some(point),
            Err(e) => {
                warn!("Skipping {} bar at {}: {}", symbol, bar.timestamp, e);
                None
            }
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}

fn to_point(bar: &Bar) -> Result<HistoryPoint> {
    Ok(HistoryPoint {
        date: bar.timestamp,
        open: to_decimal("open", bar.open)?,
        high: to_decimal("high", bar.high)?,
        low: to_decimal("low", bar.low)?,
        close: to_decimal("close", bar.close)?,
        volume: bar.volume,
    })
}
