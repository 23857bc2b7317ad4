use chrono::{FixedOffset, TimeZone, Utc};
use serde::Deserialize;

use crate::error::AppError;

use super::{FetchResult, PriceBar};

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    meta: ChartMeta,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize, Default)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i32,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
    adjclose: Option<Vec<AdjCloseData>>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    adjclose: Vec<Option<f64>>,
}

/// Decode a chart payload into bars stamped in the exchange's UTC offset.
///
/// Bars with no values at all are dropped. Intraday payloads carry no
/// adjusted close, so `adj_close` falls back to `close`.
pub fn parse_chart(symbol: &str, body: &str) -> FetchResult<Vec<PriceBar>> {
    let response: ChartResponse = serde_json::from_str(body).map_err(|err| {
        AppError::provider(symbol, format!("failed to parse chart response: {err}"))
    })?;

    let result = match (response.chart.result, response.chart.error) {
        (_, Some(err)) => {
            return Err(AppError::provider(
                symbol,
                format!("{}: {}", err.code, err.description),
            ))
        }
        (Some(result), None) => result,
        (None, None) => {
            return Err(AppError::provider(symbol, "empty result with no error"));
        }
    };

    let data = result
        .into_iter()
        .next()
        .ok_or_else(|| AppError::provider(symbol, "result array is empty"))?;

    let timestamps = data
        .timestamp
        .ok_or_else(|| AppError::provider(symbol, "no timestamps in chart response"))?;

    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| AppError::provider(symbol, "no quote data in chart response"))?;

    let adj_closes = data
        .indicators
        .adjclose
        .and_then(|v| v.into_iter().next())
        .map(|a| a.adjclose);

    let offset = FixedOffset::east_opt(data.meta.gmtoffset).ok_or_else(|| {
        AppError::provider(
            symbol,
            format!("invalid gmtoffset {}", data.meta.gmtoffset),
        )
    })?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let timestamp = Utc
            .timestamp_opt(ts, 0)
            .single()
            .map(|dt| dt.with_timezone(&offset))
            .ok_or_else(|| AppError::provider(symbol, format!("invalid timestamp: {ts}")))?;

        let close = quote.close.get(i).copied().flatten();
        let adj_close = adj_closes
            .as_ref()
            .and_then(|v| v.get(i).copied().flatten())
            .or(close);

        let bar = PriceBar {
            timestamp,
            open: quote.open.get(i).copied().flatten(),
            high: quote.high.get(i).copied().flatten(),
            low: quote.low.get(i).copied().flatten(),
            close,
            adj_close,
            volume: quote.volume.get(i).copied().flatten(),
        };

        if bar.is_empty() {
            continue;
        }
        bars.push(bar);
    }

    bars.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    Ok(bars)
}
