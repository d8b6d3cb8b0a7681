use std::sync::Arc;

use crate::config::Config;
use stockdesk_core::{QuoteService, QuoteServiceTrait};
use stockdesk_market_data::{MarketDataProvider, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Build the application state on the Yahoo Finance provider.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = YahooProvider::new().await?;
    tracing::info!(
        "Market data provider {} ready, call timeout {:?}",
        provider.id(),
        config.provider_timeout
    );
    Ok(build_state_with_provider(Arc::new(provider), config))
}

/// Build the application state on an arbitrary provider.
pub fn build_state_with_provider(
    provider: Arc<dyn MarketDataProvider>,
    config: &Config,
) -> Arc<AppState> {
    let quote_service: Arc<dyn QuoteServiceTrait + Send + Sync> =
        Arc::new(QuoteService::new(provider, config.provider_timeout));
    Arc::new(AppState { quote_service })
}
