#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use stockdesk_market_data::{
    Bar, BulkHistory, Interval, MarketDataError, MarketDataProvider, Period, QuoteInfo,
};
use stockdesk_server::{api::app_router, build_state_with_provider, config::Config};
use tower::ServiceExt;

/// Canned provider keyed by uppercased symbol; unknown symbols are empty.
#[derive(Default)]
pub struct StubProvider {
    pub prices: HashMap<String, f64>,
    pub bars: HashMap<String, Vec<Bar>>,
    pub infos: HashMap<String, QuoteInfo>,
    pub bulk_fails: bool,
    pub history_fails: bool,
    pub fast_quote_fails: bool,
    pub fast_quote_delay: Option<Duration>,
}

impl StubProvider {
    pub fn with_price(mut self, symbol: &str, price: f64, info: QuoteInfo) -> Self {
        self.prices.insert(symbol.to_uppercase(), price);
        self.infos.insert(symbol.to_uppercase(), info);
        self
    }

    pub fn with_bars(mut self, symbol: &str, closes: &[f64]) -> Self {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, close)| {
                Bar::ohlcv(
                    Utc.with_ymd_and_hms(2024, 3, 1 + i as u32, 0, 0, 0).unwrap(),
                    *close,
                    close + 1.0,
                    close - 1.0,
                    *close,
                    1_000,
                )
            })
            .collect();
        self.bars.insert(symbol.to_uppercase(), bars);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn fast_quote(&self, symbol: &str) -> Result<Option<f64>, MarketDataError> {
        if let Some(delay) = self.fast_quote_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fast_quote_fails {
            return Err(MarketDataError::provider("STUB", "connection reset"));
        }
        Ok(self.prices.get(&symbol.to_uppercase()).copied())
    }

    async fn history(
        &self,
        symbol: &str,
        _period: Period,
        _interval: Interval,
    ) -> Result<Vec<Bar>, MarketDataError> {
        if self.history_fails {
            return Err(MarketDataError::provider("STUB", "chart endpoint down"));
        }
        Ok(self
            .bars
            .get(&symbol.to_uppercase())
            .cloned()
            .unwrap_or_default())
    }

    async fn bulk_history(
        &self,
        symbols: &[String],
        _period: Period,
        _interval: Interval,
    ) -> Result<BulkHistory, MarketDataError> {
        if self.bulk_fails {
            return Err(MarketDataError::provider("STUB", "bulk endpoint down"));
        }
        Ok(BulkHistory::Keyed(
            symbols
                .iter()
                .filter_map(|s| self.bars.get(s).map(|b| (s.clone(), b.clone())))
                .collect(),
        ))
    }

    async fn info(&self, symbol: &str) -> Result<QuoteInfo, MarketDataError> {
        self.infos
            .get(&symbol.to_uppercase())
            .cloned()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

pub fn apple_info() -> QuoteInfo {
    QuoteInfo::with_name("AAPL", "Apple Inc.")
        .previous_close(148.0)
        .exchange("NMS")
        .sector("Technology")
        .industry("Consumer Electronics")
}

pub fn router(provider: StubProvider) -> Router {
    router_with_config(provider, Config::default())
}

pub fn router_with_config(provider: StubProvider, config: Config) -> Router {
    let state = build_state_with_provider(Arc::new(provider), &config);
    app_router(state, &config)
}

/// Issue a GET and decode the body as JSON (or a JSON string for text bodies).
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}
