use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};

use crate::config::FetchConfig;
use crate::error::Context;

use super::FetchResult;

/// Build the chart endpoint URL for one symbol with the configured window.
pub fn chart_url(config: &FetchConfig, symbol: &str) -> String {
    format!(
        "{endpoint}/{symbol}?range={range}&interval={interval}&includePrePost=false",
        endpoint = config.endpoint.trim_end_matches('/'),
        symbol = symbol,
        range = config.range,
        interval = config.interval,
    )
}

pub fn build_client(config: &FetchConfig) -> FetchResult<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .context("Failed to construct chart HTTP client")?;
    Ok(client)
}

/// Statuses worth another attempt when retries are enabled.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Exponential backoff: `base`, `2 * base`, `4 * base`, ...
pub fn backoff_delay(base_delay_ms: u64, attempt: u32) -> Duration {
    let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_millis(base_delay_ms.saturating_mul(factor))
}
