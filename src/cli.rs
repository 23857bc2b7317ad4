use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::{self, Config, FetchConfig};
use crate::error::Result;

pub const PLOT_USAGE: &str = "Usage: plot_results <results.csv>";

#[derive(Parser, Debug)]
#[command(name = "fetch_data")]
#[command(about = "Download recent 1-minute price history into per-symbol CSV files")]
pub struct FetchCli {
    /// Directory receiving <SYMBOL>.csv files [default: <project root>/data]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Symbols to download (e.g., AAPL MSFT)
    #[arg(short, long, num_args = 1..)]
    pub symbols: Vec<String>,

    /// Retry throttled or failed requests this many times with backoff
    #[arg(short, long)]
    pub retries: Option<u32>,

    /// JSON file overriding the builtin configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl FetchCli {
    /// Builtin defaults, then the config file, then command-line flags.
    pub fn resolve(&self) -> Result<FetchConfig> {
        let mut config = base_config(self.config.as_ref())?;

        if let Some(dir) = &self.output_dir {
            config.fetch.output_dir = dir.clone();
        }
        if !self.symbols.is_empty() {
            config.fetch.symbols = self.symbols.clone();
        }
        if let Some(retries) = self.retries {
            config.fetch.max_retries = retries;
        }

        config::validate_config(&config)?;
        Ok(config.fetch)
    }
}

#[derive(Parser, Debug)]
#[command(name = "plot_results")]
#[command(about = "Plot and summarise cache latency benchmark results")]
pub struct PlotCli {
    /// CSV with `cache_type` and `latency_us` columns
    pub csv_file: PathBuf,

    /// Skip the terminal figures and only print statistics
    #[arg(long)]
    pub no_display: bool,

    /// JSON file overriding the builtin configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl PlotCli {
    pub fn resolve(&self) -> Result<Config> {
        let config = base_config(self.config.as_ref())?;
        config::validate_config(&config)?;
        Ok(config)
    }
}

/// Outcome of parsing the plotter's command line.
#[derive(Debug)]
pub enum PlotInvocation {
    Run(PlotCli),
    /// Missing or malformed arguments; the caller prints [`PLOT_USAGE`] and exits 1.
    Usage,
    /// `--help` or `--version`, rendered by clap.
    Info(clap::Error),
}

pub fn parse_plot_args<I, T>(args: I) -> PlotInvocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match PlotCli::try_parse_from(args) {
        Ok(cli) => PlotInvocation::Run(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            PlotInvocation::Info(err)
        }
        Err(_) => PlotInvocation::Usage,
    }
}

fn base_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => config::load_config(path),
        None => Ok(Config::builtin()),
    }
}
