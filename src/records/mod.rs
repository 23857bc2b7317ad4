use std::fs;
use std::path::PathBuf;

use crate::error::{Context, Result};
use crate::fetch::PriceBar;

pub mod price_history;

pub use price_history::{write_price_history, PRICE_HISTORY_HEADER};

/// Facade that owns the on-disk layout of downloaded price histories.
pub struct Records {
    output_dir: PathBuf,
}

impl Records {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory; succeeds when it already exists.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;
        Ok(())
    }

    pub fn history_path(&self, symbol: &str) -> PathBuf {
        self.output_dir.join(format!("{symbol}.csv"))
    }

    /// Write `<output_dir>/<SYMBOL>.csv`, replacing any previous file.
    pub fn save_history(&self, symbol: &str, bars: &[PriceBar]) -> Result<PathBuf> {
        let path = self.history_path(symbol);
        write_price_history(&path, bars)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output_dir = dir.path().join("nested").join("data");
        let records = Records::new(&output_dir);

        records.prepare().expect("first prepare");
        records.prepare().expect("second prepare");
        assert!(output_dir.is_dir());
    }

    #[test]
    fn history_path_uses_symbol_name() {
        let records = Records::new("data");
        assert_eq!(records.history_path("TSLA"), PathBuf::from("data/TSLA.csv"));
    }
}
