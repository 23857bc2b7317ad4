use std::io::{self, IsTerminal, Write};
use std::path::Path;

use log::info;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::latency::summary::describe_groups;
use crate::latency::{render_summary, LatencyDataset, SUMMARY_BANNER};
use crate::ui::{show_figures, BoxplotFigure, Figure, HistogramFigure};

/// Figures are only drawn when requested and stdout is an interactive terminal.
pub fn should_display(no_display: bool) -> bool {
    !no_display && io::stdout().is_terminal()
}

/// Load `csv_file`, show the histogram then the boxplot, then print grouped statistics.
///
/// Missing files and missing columns are reported before anything is drawn.
pub fn run_plot<W: Write>(
    csv_file: &Path,
    plot: &PlotConfig,
    display: bool,
    out: &mut W,
) -> Result<()> {
    let dataset = LatencyDataset::load(csv_file)?;

    let figures = [
        Figure::Histogram(HistogramFigure::from_dataset(&dataset, plot)),
        Figure::Boxplot(BoxplotFigure::from_dataset(&dataset, plot)),
    ];

    if display {
        show_figures(&figures)?;
    } else {
        for figure in &figures {
            info!("Display disabled; skipping figure \"{}\"", figure.title());
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", SUMMARY_BANNER)?;
    write!(out, "{}", render_summary(&describe_groups(dataset.groups())))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn write_csv(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("results.csv");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn prints_banner_and_group_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "cache_type,latency_us\nLocalLRU,12.5\nLocalLRU,13.0\nLockCache,50.0\n",
        );
        let mut out = Vec::new();

        run_plot(&path, &PlotConfig::builtin(), false, &mut out).unwrap();

        let console = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=== Summary Statistics ===");
        assert_eq!(lines[3], "cache_type");
        assert!(lines[4].starts_with("LocalLRU"));
        assert!(lines[5].starts_with("LockCache"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn missing_file_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let err = run_plot(
            &dir.path().join("absent.csv"),
            &PlotConfig::builtin(),
            false,
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::MissingFile(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_columns_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "cache,latency\nLocalLRU,1.0\n");
        let mut out = Vec::new();

        let err = run_plot(&path, &PlotConfig::builtin(), false, &mut out).unwrap_err();

        assert!(matches!(err, AppError::MissingColumns));
        assert!(out.is_empty());
    }

    #[test]
    fn explicit_opt_out_disables_display() {
        assert!(!should_display(true));
    }
}
