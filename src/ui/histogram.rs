use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::ui::components::axis::{
    draw_grid, format_tick, horizontal_tick_row, linear_ticks, vertical_tick_column,
};
use crate::ui::figure::{HistogramFigure, CONTINUE_HINT};
use crate::ui::styles::{hint_style, series_color, title_style};

const X_TICKS: usize = 5;
const Y_TICKS: usize = 4;
const HEADROOM: f64 = 1.05;

pub fn render_histogram(f: &mut Frame, area: Rect, figure: &HistogramFigure) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(figure.title.clone(), title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if figure.series.is_empty() {
        f.render_widget(
            Paragraph::new("No latency measurements to plot").alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let x_lo = figure
        .series
        .iter()
        .map(|h| h.range().0)
        .fold(f64::INFINITY, f64::min);
    let x_hi = figure
        .series
        .iter()
        .map(|h| h.range().1)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_count = figure.series.iter().map(|h| h.max_count()).max().unwrap_or(0);
    let y_hi = (max_count as f64 * HEADROOM).max(1.0);

    let x_ticks = linear_ticks(x_lo, x_hi, X_TICKS);
    let y_ticks = linear_ticks(0.0, y_hi, Y_TICKS);
    let y_labels: Vec<(f64, String)> = y_ticks
        .iter()
        .map(|v| (v / y_hi, format_tick(*v, y_hi)))
        .collect();
    let label_width = y_labels
        .iter()
        .map(|(_, label)| label.chars().count())
        .max()
        .unwrap_or(1);

    let chart = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label_width as u16 + 1), Constraint::Min(1)])
        .split(rows[1]);
    let plot_area = chart[1];

    f.render_widget(Paragraph::new(figure.y_label.as_str()), rows[0]);

    let tick_lines: Vec<Line> = vertical_tick_column(&y_labels, chart[0].height as usize, label_width)
        .into_iter()
        .map(Line::from)
        .collect();
    f.render_widget(Paragraph::new(tick_lines), chart[0]);

    let grid = figure.grid;
    let series = &figure.series;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([x_lo, x_hi])
        .y_bounds([0.0, y_hi])
        .paint(|ctx| {
            if grid {
                draw_grid(ctx, [x_lo, x_hi], [0.0, y_hi], &x_ticks, &y_ticks);
                ctx.layer();
            }
            for (idx, hist) in series.iter().enumerate() {
                let color = series_color(idx);
                for (bin, &count) in hist.counts.iter().enumerate() {
                    if count == 0 {
                        continue;
                    }
                    let (left, right) = (hist.edges[bin], hist.edges[bin + 1]);
                    let top = count as f64;
                    ctx.draw(&CanvasLine {
                        x1: left,
                        y1: 0.0,
                        x2: left,
                        y2: top,
                        color,
                    });
                    ctx.draw(&CanvasLine {
                        x1: left,
                        y1: top,
                        x2: right,
                        y2: top,
                        color,
                    });
                    ctx.draw(&CanvasLine {
                        x1: right,
                        y1: 0.0,
                        x2: right,
                        y2: top,
                        color,
                    });
                }
                ctx.layer();
            }
        });
    f.render_widget(canvas, plot_area);

    let span = x_hi - x_lo;
    let x_labels: Vec<(f64, String)> = x_ticks
        .iter()
        .map(|v| ((v - x_lo) / span, format_tick(*v, span)))
        .collect();
    let under_plot = |row: Rect| Rect {
        x: plot_area.x,
        y: row.y,
        width: plot_area.width,
        height: row.height,
    };
    f.render_widget(
        Paragraph::new(horizontal_tick_row(&x_labels, plot_area.width as usize)),
        under_plot(rows[2]),
    );
    f.render_widget(
        Paragraph::new(figure.x_label.as_str()).alignment(Alignment::Center),
        under_plot(rows[3]),
    );

    let mut legend = Vec::with_capacity(series.len() * 2);
    for (idx, hist) in series.iter().enumerate() {
        legend.push(Span::styled("■ ", Style::default().fg(series_color(idx))));
        legend.push(Span::raw(format!("{}   ", hist.name)));
    }
    f.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        rows[4],
    );

    f.render_widget(
        Paragraph::new(CONTINUE_HINT)
            .style(hint_style())
            .alignment(Alignment::Center),
        rows[5],
    );
}

#[cfg(test)]
mod tests {
    use crate::config::PlotConfig;
    use crate::ui::figure::tests::{draw, sample_dataset};
    use crate::ui::figure::{Figure, HistogramFigure};

    #[test]
    fn renders_title_axes_and_legend() {
        let figure = Figure::Histogram(HistogramFigure::from_dataset(
            &sample_dataset(),
            &PlotConfig::builtin(),
        ));
        let screen = draw(&figure, 120, 30);

        assert!(screen.contains("Cache Latency Distribution: LocalLRU vs LockCache"));
        assert!(screen.contains("Latency (µs)"));
        assert!(screen.contains("Frequency"));
        assert!(screen.contains("LocalLRU"));
        assert!(screen.contains("LockCache"));
        assert!(screen.contains("Press any key"));
    }

    #[test]
    fn empty_figure_shows_placeholder() {
        let figure = Figure::Histogram(HistogramFigure {
            title: "Empty".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            grid: true,
            series: Vec::new(),
        });
        let screen = draw(&figure, 60, 10);
        assert!(screen.contains("No latency measurements to plot"));
    }
}
