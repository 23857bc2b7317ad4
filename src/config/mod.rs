use std::path::PathBuf;

pub mod loader;
pub mod validator;

pub use loader::load_config;
pub use validator::validate_config;

pub const DEFAULT_SYMBOLS: &[&str] = &["AAPL", "MSFT", "GOOG", "TSLA"];
pub const CHART_ENDPOINT: &str = "https://query2.finance.yahoo.com/v8/finance/chart";
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings for the intraday price downloader.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub symbols: Vec<String>,
    pub output_dir: PathBuf,
    pub endpoint: String,
    /// Lookback window in the provider's notation, e.g. `5d`.
    pub range: String,
    /// Sampling resolution in the provider's notation, e.g. `1m`.
    pub interval: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Extra attempts after the first failure. Zero means fail fast.
    pub max_retries: u32,
    pub base_delay_ms: u64,
}

/// Labels and layout knobs for the latency figures.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub bins: usize,
    pub histogram_title: String,
    pub boxplot_title: String,
    pub x_label: String,
    pub y_label: String,
    pub frequency_label: String,
    pub grid: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub fetch: FetchConfig,
    pub plot: PlotConfig,
}

impl Config {
    pub fn builtin() -> Self {
        Config {
            fetch: FetchConfig::builtin(),
            plot: PlotConfig::builtin(),
        }
    }
}

impl FetchConfig {
    pub fn builtin() -> Self {
        FetchConfig {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            output_dir: project_root().join("data"),
            endpoint: CHART_ENDPOINT.to_string(),
            range: "5d".to_string(),
            interval: "1m".to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout_secs: 30,
            max_retries: 0,
            base_delay_ms: 500,
        }
    }
}

impl PlotConfig {
    pub fn builtin() -> Self {
        PlotConfig {
            bins: 50,
            histogram_title: "Cache Latency Distribution: LocalLRU vs LockCache".to_string(),
            boxplot_title: "Latency Boxplot Comparison".to_string(),
            x_label: "Latency (µs)".to_string(),
            y_label: "Latency (µs)".to_string(),
            frequency_label: "Frequency".to_string(),
            grid: true,
        }
    }
}

/// Directory holding the crate manifest; `data/` is created beneath it.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
