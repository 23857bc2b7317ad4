use std::path::PathBuf;

use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("CSV file {} not found.", .0.display())]
    MissingFile(PathBuf),
    #[error("CSV missing required columns: cache_type, latency_us")]
    MissingColumns,
    #[error("provider error for {symbol}: {reason}")]
    Provider { symbol: String, reason: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn message<T: Into<String>>(msg: T) -> Self {
        AppError::Message(msg.into())
    }

    pub fn provider<S: Into<String>, R: Into<String>>(symbol: S, reason: R) -> Self {
        AppError::Provider {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Process exit status reported by the binaries for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
