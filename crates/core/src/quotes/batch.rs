//! Batch Resolver.
//!
//! Prices many symbols at once. One bulk history fetch is tried first; its
//! closing prices are used where present and the per-symbol cascade fills
//! the gaps. If the bulk fetch itself fails, it is abandoned for every
//! symbol and each one runs the full cascade.

use std::collections::HashSet;

use futures::future::join_all;
use log::{debug, warn};
use stockdesk_market_data::BulkHistory;

use super::client::MarketDataClient;
use super::constants::{LATEST_INTERVAL, LATEST_PERIOD, NO_DATA_MESSAGE};
use super::model::QuoteResult;
use super::resolver::{quote_for, resolve_price_from, usable_price, PriceTier};

/// Resolve one [`QuoteResult`] per input symbol, in input order.
///
/// Never fails as a whole: a symbol that can't be priced becomes an
/// error-tagged element and its siblings are unaffected.
pub async fn resolve_many(client: &MarketDataClient, symbols: &[String]) -> Vec<QuoteResult> {
    if symbols.is_empty() {
        return Vec::new();
    }

    let bulk = fetch_bulk(client, symbols).await;

    join_all(
        symbols
            .iter()
            .map(|symbol| resolve_member(client, symbol, bulk.as_ref())),
    )
    .await
}

async fn fetch_bulk(client: &MarketDataClient, symbols: &[String]) -> Option<BulkHistory> {
    let bulk = match client
        .bulk_history(symbols, LATEST_PERIOD, LATEST_INTERVAL)
        .await
    {
        Ok(bulk) => bulk,
        Err(e) => {
            warn!(
                "Bulk fetch for {} symbols failed, resolving each symbol individually: {}",
                symbols.len(),
                e
            );
            return None;
        }
    };

    // A flat table can only be attributed when one distinct symbol was asked for.
    if bulk.is_single() && distinct_count(symbols) > 1 {
        warn!(
            "Bulk fetch returned a single-symbol table for {} symbols, ignoring it",
            symbols.len()
        );
        return None;
    }

    Some(bulk)
}

fn distinct_count(symbols: &[String]) -> usize {
    symbols.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

async fn resolve_member(
    client: &MarketDataClient,
    symbol: &str,
    bulk: Option<&BulkHistory>,
) -> QuoteResult {
    let from_bulk = bulk.and_then(|b| usable_price(b.closing_price(symbol)));

    let price = match from_bulk {
        Some(price) => Ok(price),
        None => {
            if bulk.is_some() {
                debug!("No bulk close for {}, falling back to fast quote", symbol);
            }
            resolve_price_from(client, symbol, PriceTier::FastQuote).await
        }
    };

    let quote = match price {
        Ok(price) => quote_for(client, symbol, price).await,
        Err(e) => Err(e),
    };

    match quote {
        Ok(quote) => quote.into(),
        Err(e) => {
            warn!("No price for {} in batch: {}", symbol, e);
            QuoteResult::error(symbol, NO_DATA_MESSAGE)
        }
    }
}
