use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use stockdesk_core::quotes::constants::{DEFAULT_HISTORY_INTERVAL, DEFAULT_HISTORY_PERIOD};
use stockdesk_core::quotes::{HistoryPoint, Quote, QuoteResult, SearchOutcome};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct QuoteQuery {
    symbol: String,
}

#[derive(Deserialize)]
struct QuotesQuery {
    symbols: String,
}

#[derive(Deserialize)]
struct SearchQuery {
    query: String,
}

fn default_period() -> String {
    DEFAULT_HISTORY_PERIOD.to_string()
}

fn default_interval() -> String {
    DEFAULT_HISTORY_INTERVAL.to_string()
}

#[derive(Deserialize)]
struct HistoryQuery {
    symbol: String,
    #[serde(default = "default_period")]
    period: String,
    #[serde(default = "default_interval")]
    interval: String,
}

#[derive(Serialize)]
struct QuotesResponse {
    data: Vec<QuoteResult>,
}

#[derive(Serialize)]
struct HistoryResponse {
    symbol: String,
    period: String,
    interval: String,
    data: Vec<HistoryPoint>,
}

/// Split a comma-separated symbol list, trimming and uppercasing each entry.
fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuoteQuery>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.get_quote(&params.symbol).await?;
    Ok(Json(quote))
}

async fn get_quotes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuotesQuery>,
) -> Json<QuotesResponse> {
    let symbols = parse_symbols(&params.symbols);
    let data = state.quote_service.get_quotes(&symbols).await;
    Json(QuotesResponse { data })
}

async fn search_stocks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchOutcome> {
    Json(state.quote_service.search(&params.query).await)
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> ApiResult<Json<HistoryResponse>> {
    let data = state
        .quote_service
        .get_history(&params.symbol, &params.period, &params.interval)
        .await?;
    Ok(Json(HistoryResponse {
        symbol: params.symbol.to_uppercase(),
        period: params.period,
        interval: params.interval,
        data,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks/quote", get(get_quote))
        .route("/stocks/quotes", get(get_quotes))
        .route("/stocks/search", get(search_stocks))
        .route("/stocks/history", get(get_history))
}
