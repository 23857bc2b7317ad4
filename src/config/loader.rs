use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::error::{Context, Result};

use super::{validator, Config, FetchConfig, PlotConfig};

/// Load a JSON override file on top of the builtin defaults and validate the result.
pub fn load_config(path: &Path) -> Result<Config> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config JSON at {}", path.display()))?;

    let raw: RawConfig = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse config JSON at {}", path.display()))?;

    let config = raw.into_config(Config::builtin());
    validator::validate_config(&config)?;
    Ok(config)
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    fetch: RawFetchConfig,
    #[serde(default)]
    plot: RawPlotConfig,
}

impl RawConfig {
    fn into_config(self, base: Config) -> Config {
        Config {
            fetch: self.fetch.merge(base.fetch),
            plot: self.plot.merge(base.plot),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawFetchConfig {
    symbols: Option<Vec<String>>,
    output_dir: Option<PathBuf>,
    endpoint: Option<String>,
    range: Option<String>,
    interval: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
    max_retries: Option<u32>,
    base_delay_ms: Option<u64>,
}

impl RawFetchConfig {
    fn merge(self, base: FetchConfig) -> FetchConfig {
        FetchConfig {
            symbols: self.symbols.unwrap_or(base.symbols),
            output_dir: self.output_dir.unwrap_or(base.output_dir),
            endpoint: self.endpoint.unwrap_or(base.endpoint),
            range: self.range.unwrap_or(base.range),
            interval: self.interval.unwrap_or(base.interval),
            user_agent: self.user_agent.unwrap_or(base.user_agent),
            timeout_secs: self.timeout_secs.unwrap_or(base.timeout_secs),
            max_retries: self.max_retries.unwrap_or(base.max_retries),
            base_delay_ms: self.base_delay_ms.unwrap_or(base.base_delay_ms),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawPlotConfig {
    bins: Option<usize>,
    histogram_title: Option<String>,
    boxplot_title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    frequency_label: Option<String>,
    grid: Option<bool>,
}

impl RawPlotConfig {
    fn merge(self, base: PlotConfig) -> PlotConfig {
        PlotConfig {
            bins: self.bins.unwrap_or(base.bins),
            histogram_title: self.histogram_title.unwrap_or(base.histogram_title),
            boxplot_title: self.boxplot_title.unwrap_or(base.boxplot_title),
            x_label: self.x_label.unwrap_or(base.x_label),
            y_label: self.y_label.unwrap_or(base.y_label),
            frequency_label: self.frequency_label.unwrap_or(base.frequency_label),
            grid: self.grid.unwrap_or(base.grid),
        }
    }
}
