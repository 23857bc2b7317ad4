use std::thread;

use log::{debug, info, warn};
use reqwest::blocking::Client;

use crate::config::FetchConfig;
use crate::error::{AppError, Context};

use super::decode::parse_chart;
use super::request::{backoff_delay, build_client, chart_url, is_retryable_status};
use super::{FetchResult, PriceBar, PriceSource};

/// Blocking client for the chart endpoint.
///
/// Requests are issued one at a time. With `max_retries == 0` the first
/// failure is returned as-is; otherwise throttling, server errors and
/// connect/timeout failures are retried with exponential backoff.
pub struct ChartClient {
    client: Client,
    config: FetchConfig,
}

impl ChartClient {
    pub fn new(config: &FetchConfig) -> FetchResult<Self> {
        Ok(Self {
            client: build_client(config)?,
            config: config.clone(),
        })
    }

    fn fetch_once(&self, symbol: &str, url: &str) -> Result<String, Attempt> {
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(err) if err.is_connect() || err.is_timeout() => {
                return Err(Attempt::Retry(AppError::from(err)))
            }
            Err(err) => return Err(Attempt::Fatal(AppError::from(err))),
        };

        let status = response.status();
        if !status.is_success() {
            let err = AppError::provider(symbol, format!("HTTP {status}"));
            return Err(if is_retryable_status(status) {
                Attempt::Retry(err)
            } else {
                Attempt::Fatal(err)
            });
        }

        response
            .text()
            .with_context(|| format!("Failed to read chart body for {}", symbol))
            .map_err(|err| Attempt::Fatal(err.into()))
    }
}

enum Attempt {
    Retry(AppError),
    Fatal(AppError),
}

impl PriceSource for ChartClient {
    fn fetch_intraday(&self, symbol: &str) -> FetchResult<Vec<PriceBar>> {
        let url = chart_url(&self.config, symbol);
        info!("Requesting {}", url);

        let mut attempt = 0;
        let body = loop {
            match self.fetch_once(symbol, &url) {
                Ok(body) => break body,
                Err(Attempt::Retry(err)) if attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = backoff_delay(self.config.base_delay_ms, attempt);
                    warn!(
                        "Chart request for {} failed ({}); retry {}/{} in {:?}",
                        symbol, err, attempt, self.config.max_retries, delay
                    );
                    thread::sleep(delay);
                }
                Err(Attempt::Retry(err)) | Err(Attempt::Fatal(err)) => return Err(err),
            }
        };

        let bars = parse_chart(symbol, &body)?;
        debug!("Decoded {} bars for {}", bars.len(), symbol);
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const CHART_BODY: &str = r#"{"chart":{"result":[{"meta":{"gmtoffset":-14400},"timestamp":[1718890200],"indicators":{"quote":[{"open":[210.0],"high":[210.6],"low":[209.9],"close":[210.4],"volume":[35000]}]}}],"error":null}}"#;

    /// Serve one scripted status per connection and count the requests seen.
    fn scripted_server(statuses: Vec<u16>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/v8/finance/chart", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        thread::spawn(move || {
            for status in statuses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let (reason, body) = match status {
                    200 => ("OK", CHART_BODY),
                    404 => ("Not Found", ""),
                    _ => ("Service Unavailable", ""),
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        (endpoint, hits)
    }

    fn client_for(endpoint: String, max_retries: u32) -> ChartClient {
        let mut config = FetchConfig::builtin();
        config.endpoint = endpoint;
        config.max_retries = max_retries;
        config.base_delay_ms = 1;
        config.timeout_secs = 5;
        let client = Client::builder()
            .no_proxy()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap();
        ChartClient { client, config }
    }

    #[test]
    fn retries_server_errors_until_success() {
        let (endpoint, hits) = scripted_server(vec![503, 503, 200]);
        let client = client_for(endpoint, 2);

        let bars = client.fetch_intraday("AAPL").unwrap();

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].close, Some(210.4));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn fails_fast_without_retries() {
        let (endpoint, hits) = scripted_server(vec![503, 200]);
        let client = client_for(endpoint, 0);

        let err = client.fetch_intraday("AAPL").unwrap_err();

        assert!(matches!(err, AppError::Provider { .. }));
        assert!(err.to_string().contains("503"), "unexpected error: {err}");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn client_errors_are_never_retried() {
        let (endpoint, hits) = scripted_server(vec![404, 200]);
        let client = client_for(endpoint, 2);

        let err = client.fetch_intraday("ZZZZ").unwrap_err();

        assert!(err.to_string().contains("404"), "unexpected error: {err}");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn retries_stop_at_the_configured_limit() {
        let (endpoint, hits) = scripted_server(vec![503, 503, 503, 200]);
        let client = client_for(endpoint, 1);

        let err = client.fetch_intraday("MSFT").unwrap_err();

        assert!(err.to_string().contains("503"), "unexpected error: {err}");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
