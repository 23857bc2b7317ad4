use std::io::Write;
use std::path::PathBuf;

use log::{debug, warn};

use crate::config::FetchConfig;
use crate::error::Result;
use crate::fetch::PriceSource;
use crate::records::Records;

/// Download every configured symbol in order and persist one CSV per symbol.
///
/// The first error aborts the run; files saved before it stay on disk.
pub fn run_fetch<S, W>(source: &S, config: &FetchConfig, out: &mut W) -> Result<Vec<PathBuf>>
where
    S: PriceSource,
    W: Write,
{
    let records = Records::new(config.output_dir.clone());
    records.prepare()?;

    let mut saved = Vec::with_capacity(config.symbols.len());
    for symbol in &config.symbols {
        let bars = source.fetch_intraday(symbol)?;
        if bars.is_empty() {
            warn!("No bars returned for {}; writing header only", symbol);
        }
        debug!("Writing {} bars for {}", bars.len(), symbol);

        let path = records.save_history(symbol, &bars)?;
        writeln!(out, "Saved {}", path.display())?;
        saved.push(path);
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::fetch::{FetchResult, PriceBar};
    use chrono::{FixedOffset, TimeZone};
    use std::cell::RefCell;

    struct StubSource {
        failing: Option<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl StubSource {
        fn new(failing: Option<&'static str>) -> Self {
            Self {
                failing,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PriceSource for StubSource {
        fn fetch_intraday(&self, symbol: &str) -> FetchResult<Vec<PriceBar>> {
            self.calls.borrow_mut().push(symbol.to_string());
            if self.failing == Some(symbol) {
                return Err(AppError::provider(symbol, "HTTP 404 Not Found"));
            }
            let offset = FixedOffset::west_opt(4 * 3600).unwrap();
            Ok(vec![PriceBar {
                timestamp: offset.with_ymd_and_hms(2024, 6, 20, 9, 30, 0).unwrap(),
                open: Some(100.0),
                high: Some(101.0),
                low: Some(99.5),
                close: Some(100.5),
                adj_close: Some(100.5),
                volume: Some(42),
            }])
        }
    }

    fn config_in(dir: &std::path::Path) -> FetchConfig {
        let mut config = FetchConfig::builtin();
        config.output_dir = dir.join("data");
        config
    }

    #[test]
    fn saves_one_file_per_symbol_and_reports_it() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let source = StubSource::new(None);
        let mut out = Vec::new();

        let saved = run_fetch(&source, &config, &mut out).unwrap();

        assert_eq!(saved.len(), 4);
        for symbol in ["AAPL", "MSFT", "GOOG", "TSLA"] {
            assert!(config.output_dir.join(format!("{symbol}.csv")).is_file());
        }
        let console = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            format!("Saved {}", config.output_dir.join("AAPL.csv").display())
        );
        assert_eq!(*source.calls.borrow(), vec!["AAPL", "MSFT", "GOOG", "TSLA"]);
    }

    #[test]
    fn provider_error_aborts_and_keeps_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let source = StubSource::new(Some("GOOG"));
        let mut out = Vec::new();

        let err = run_fetch(&source, &config, &mut out).unwrap_err();

        assert!(err.to_string().contains("GOOG"));
        assert!(config.output_dir.join("AAPL.csv").is_file());
        assert!(config.output_dir.join("MSFT.csv").is_file());
        assert!(!config.output_dir.join("GOOG.csv").exists());
        assert!(!config.output_dir.join("TSLA.csv").exists());
        assert_eq!(source.calls.borrow().len(), 3);
    }

    #[test]
    fn existing_output_directory_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::create_dir_all(&config.output_dir).unwrap();
        std::fs::write(config.output_dir.join("AAPL.csv"), "old").unwrap();

        run_fetch(&StubSource::new(None), &config, &mut Vec::new()).unwrap();

        let contents = std::fs::read_to_string(config.output_dir.join("AAPL.csv")).unwrap();
        assert!(contents.starts_with("Datetime,Open,High,Low,Close,Adj Close,Volume"));
    }
}
