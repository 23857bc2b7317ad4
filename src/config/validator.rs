use crate::error::{AppError, Result};

use super::{Config, FetchConfig, PlotConfig};

/// Validate a merged configuration, reporting every problem at once.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    validate_fetch(&config.fetch, &mut issues);
    validate_plot(&config.plot, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidConfig(format!(
            "\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_fetch(fetch: &FetchConfig, issues: &mut Vec<String>) {
    if fetch.symbols.is_empty() {
        issues.push("fetch.symbols must list at least one symbol".to_string());
    }

    for symbol in &fetch.symbols {
        if !is_valid_symbol(symbol) {
            issues.push(format!("fetch.symbols contains invalid symbol `{symbol}`"));
        }
    }

    if fetch.endpoint.trim().is_empty() {
        issues.push("fetch.endpoint must not be empty".to_string());
    }
    if fetch.range.trim().is_empty() {
        issues.push("fetch.range must not be empty".to_string());
    }
    if fetch.interval.trim().is_empty() {
        issues.push("fetch.interval must not be empty".to_string());
    }
    if fetch.timeout_secs == 0 {
        issues.push("fetch.timeout_secs must be positive".to_string());
    }
}

fn validate_plot(plot: &PlotConfig, issues: &mut Vec<String>) {
    if plot.bins == 0 {
        issues.push("plot.bins must be positive".to_string());
    }
}

/// Ticker symbols as accepted by the chart endpoint: letters, digits and `.^=-`.
pub fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.trim().is_empty()
        && symbol
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '^' | '=' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_valid() {
        validate_config(&Config::builtin()).expect("builtin config should be valid");
    }

    #[test]
    fn accepts_index_and_share_class_symbols() {
        for symbol in ["^GSPC", "BRK-B", "EURUSD=X", "RDS.A"] {
            assert!(is_valid_symbol(symbol), "{symbol} should be accepted");
        }
    }

    #[test]
    fn collects_every_issue() {
        let mut config = Config::builtin();
        config.fetch.symbols = vec!["AAPL".to_string(), "BAD SYMBOL".to_string(), " ".to_string()];
        config.fetch.timeout_secs = 0;
        config.plot.bins = 0;

        let err = validate_config(&config).expect_err("validation should fail");
        let message = err.to_string();
        assert!(message.contains("`BAD SYMBOL`"), "unexpected error message: {message}");
        assert!(message.contains("timeout_secs"), "unexpected error message: {message}");
        assert!(message.contains("plot.bins"), "unexpected error message: {message}");
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_empty_symbol_list() {
        let mut config = Config::builtin();
        config.fetch.symbols.clear();

        let err = validate_config(&config).expect_err("validation should fail");
        assert!(
            err.to_string().contains("at least one symbol"),
            "unexpected error message: {err}"
        );
    }
}
