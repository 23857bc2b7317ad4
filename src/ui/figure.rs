use ratatui::Frame;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::latency::{BoxSummary, Histogram, LatencyDataset, CATEGORY_COLUMN};

use super::{boxplot::render_boxplot, histogram::render_histogram, FigureScreen};

pub const CONTINUE_HINT: &str = "Press any key to continue";

/// Overlaid per-group latency histograms on shared axes.
#[derive(Debug, Clone)]
pub struct HistogramFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub series: Vec<Histogram>,
}

/// One box per group, ordered like the dataset.
#[derive(Debug, Clone)]
pub struct BoxplotFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub boxes: Vec<BoxSummary>,
}

#[derive(Debug, Clone)]
pub enum Figure {
    Histogram(HistogramFigure),
    Boxplot(BoxplotFigure),
}

impl HistogramFigure {
    pub fn from_dataset(dataset: &LatencyDataset, plot: &PlotConfig) -> Self {
        let series = dataset
            .groups()
            .iter()
            .filter_map(|group| Histogram::from_values(&group.name, &group.values, plot.bins))
            .collect();

        Self {
            title: plot.histogram_title.clone(),
            x_label: plot.x_label.clone(),
            y_label: plot.frequency_label.clone(),
            grid: plot.grid,
            series,
        }
    }
}

impl BoxplotFigure {
    pub fn from_dataset(dataset: &LatencyDataset, plot: &PlotConfig) -> Self {
        let boxes = dataset
            .groups()
            .iter()
            .filter_map(|group| BoxSummary::from_values(&group.name, &group.values))
            .collect();

        Self {
            title: plot.boxplot_title.clone(),
            x_label: CATEGORY_COLUMN.to_string(),
            y_label: plot.y_label.clone(),
            grid: plot.grid,
            boxes,
        }
    }
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Histogram(figure) => &figure.title,
            Figure::Boxplot(figure) => &figure.title,
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let area = f.size();
        match self {
            Figure::Histogram(figure) => render_histogram(f, area, figure),
            Figure::Boxplot(figure) => render_boxplot(f, area, figure),
        }
    }
}

/// Show `figures` full-screen one after another, each until a key is pressed.
pub fn show_figures(figures: &[Figure]) -> Result<()> {
    let mut screen = FigureScreen::open()?;
    for figure in figures {
        screen.show_until_key(|f| figure.render(f))?;
    }
    screen.close()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::io::Cursor;

    pub(crate) fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn draw(figure: &Figure, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| figure.render(f)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    pub(crate) fn sample_dataset() -> LatencyDataset {
        let csv = "cache_type,latency_us\n\
                   LocalLRU,12.5\nLocalLRU,13.0\nLocalLRU,12.8\nLocalLRU,14.1\n\
                   LockCache,50.0\nLockCache,47.5\nLockCache,61.0\nLockCache,120.0\n";
        LatencyDataset::from_reader(Cursor::new(csv)).unwrap()
    }

    #[test]
    fn builds_one_series_per_group() {
        let plot = PlotConfig::builtin();
        let dataset = sample_dataset();

        let histogram = HistogramFigure::from_dataset(&dataset, &plot);
        assert_eq!(histogram.series.len(), 2);
        assert!(histogram.series.iter().all(|h| h.bins() == 50));
        assert_eq!(histogram.y_label, "Frequency");

        let boxplot = BoxplotFigure::from_dataset(&dataset, &plot);
        let names: Vec<&str> = boxplot.boxes.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["LocalLRU", "LockCache"]);
        assert_eq!(boxplot.x_label, "cache_type");
    }

    #[test]
    fn titles_come_from_config() {
        let mut plot = PlotConfig::builtin();
        plot.boxplot_title = "Boxes".to_string();
        let figure = Figure::Boxplot(BoxplotFigure::from_dataset(&sample_dataset(), &plot));
        assert_eq!(figure.title(), "Boxes");
    }
}
