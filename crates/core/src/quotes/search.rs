//! Search Resolver: free-text query to at most one [`SearchHit`].

use log::warn;
use stockdesk_market_data::QuoteInfo;

use super::client::MarketDataClient;
use super::constants::NOT_AVAILABLE;
use super::model::{SearchHit, SearchOutcome};

/// Look up `query`. Lookup failures are reported in the outcome, never raised.
pub async fn search(client: &MarketDataClient, query: &str) -> SearchOutcome {
    match client.lookup(query).await {
        Ok(Some(info)) => SearchOutcome::hit(to_hit(query, info)),
        Ok(None) => SearchOutcome::empty(),
        Err(e) => {
            warn!("Search for '{}' failed: {}", query, e);
            SearchOutcome::failed(e.to_string())
        }
    }
}

fn to_hit(query: &str, info: QuoteInfo) -> SearchHit {
    let na = || NOT_AVAILABLE.to_string();
    SearchHit {
        symbol: info.symbol.unwrap_or_else(|| query.to_uppercase()),
        company_name: info
            .long_name
            .or(info.short_name)
            .unwrap_or_else(|| query.to_string()),
        exchange: info.exchange.unwrap_or_else(na),
        sector: info.sector.unwrap_or_else(na),
        industry: info.industry.unwrap_or_else(na),
    }
}
