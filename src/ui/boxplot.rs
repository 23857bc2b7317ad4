use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::ui::components::axis::{
    draw_grid, format_tick, linear_ticks, vertical_tick_column,
};
use crate::ui::figure::{BoxplotFigure, CONTINUE_HINT};
use crate::ui::styles::{hint_style, series_color, title_style};

const Y_TICKS: usize = 5;
const BOX_HALF_WIDTH: f64 = 0.25;
const CAP_HALF_WIDTH: f64 = 0.12;
const PADDING: f64 = 0.05;

pub fn render_boxplot(f: &mut Frame, area: Rect, figure: &BoxplotFigure) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(figure.title.clone(), title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if figure.boxes.is_empty() {
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
        ])
        .split(inner);

    let (data_lo, data_hi) = figure
        .boxes
        .iter()
        .map(|b| b.extent())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (l, h)| {
            (lo.min(l), hi.max(h))
        });
    let pad = if data_hi > data_lo {
        (data_hi - data_lo) * PADDING
    } else {
        0.5
    };
    let (y_lo, y_hi) = (data_lo - pad, data_hi + pad);
    let n = figure.boxes.len() as f64;
    let x_bounds = [0.5, n + 0.5];

    let y_ticks = linear_ticks(y_lo, y_hi, Y_TICKS);
    let y_labels: Vec<(f64, String)> = y_ticks
        .iter()
        .map(|v| ((v - y_lo) / (y_hi - y_lo), format_tick(*v, y_hi - y_lo)))
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
    let boxes = &figure.boxes;
    let centres: Vec<f64> = (1..=boxes.len()).map(|i| i as f64).collect();
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds([y_lo, y_hi])
        .paint(|ctx| {
            if grid {
                draw_grid(ctx, x_bounds, [y_lo, y_hi], &centres, &y_ticks);
                ctx.layer();
            }
            for (idx, summary) in boxes.iter().enumerate() {
                let x = centres[idx];
                let color = series_color(idx);

                ctx.draw(&Rectangle {
                    x: x - BOX_HALF_WIDTH,
                    y: summary.q1,
                    width: BOX_HALF_WIDTH * 2.0,
                    height: summary.q3 - summary.q1,
                    color,
                });
                ctx.draw(&CanvasLine {
                    x1: x - BOX_HALF_WIDTH,
                    y1: summary.median,
                    x2: x + BOX_HALF_WIDTH,
                    y2: summary.median,
                    color,
                });

                for (from, to) in [
                    (summary.q1, summary.lower_whisker),
                    (summary.q3, summary.upper_whisker),
                ] {
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: from,
                        x2: x,
                        y2: to,
                        color,
                    });
                    ctx.draw(&CanvasLine {
                        x1: x - CAP_HALF_WIDTH,
                        y1: to,
                        x2: x + CAP_HALF_WIDTH,
                        y2: to,
                        color,
                    });
                }

                let outliers: Vec<(f64, f64)> =
                    summary.outliers.iter().map(|&v| (x, v)).collect();
                if !outliers.is_empty() {
                    ctx.draw(&Points {
                        coords: &outliers,
                        color,
                    });
                }
                ctx.layer();
            }
        });
    f.render_widget(canvas, plot_area);

    let under_plot = |row: Rect| Rect {
        x: plot_area.x,
        y: row.y,
        width: plot_area.width,
        height: row.height,
    };
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, boxes.len() as u32); boxes.len()])
        .split(under_plot(rows[2]));
    for (slot, summary) in slots.iter().zip(boxes.iter()) {
        f.render_widget(
            Paragraph::new(summary.name.as_str()).alignment(Alignment::Center),
            *slot,
        );
    }
    f.render_widget(
        Paragraph::new(figure.x_label.as_str()).alignment(Alignment::Center),
        under_plot(rows[3]),
    );

    f.render_widget(
        Paragraph::new(CONTINUE_HINT)
            .style(hint_style())
            .alignment(Alignment::Center),
        rows[4],
    );
}
