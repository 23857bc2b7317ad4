use chrono::{DateTime, FixedOffset};

use crate::error::Result;

pub mod decode;
pub mod history;
pub mod request;

pub use history::ChartClient;

pub type FetchResult<T> = Result<T>;

/// One intraday sample. Every value may be absent when the provider reports `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub timestamp: DateTime<FixedOffset>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<u64>,
}

impl PriceBar {
    pub fn is_empty(&self) -> bool {
        self.open.is_none()
            && self.high.is_none()
            && self.low.is_none()
            && self.close.is_none()
            && self.volume.is_none()
    }
}

/// Anything able to hand back an intraday price history for a symbol.
pub trait PriceSource {
    fn fetch_intraday(&self, symbol: &str) -> FetchResult<Vec<PriceBar>>;
}
