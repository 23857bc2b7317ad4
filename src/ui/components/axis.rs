use ratatui::{
    style::Color,
    widgets::canvas::{Context, Line as CanvasLine},
};

use crate::utils::pad_left;

pub const GRID_COLOR: Color = Color::DarkGray;

/// `count + 1` evenly spaced values from `lo` to `hi` inclusive.
pub fn linear_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    let step = (hi - lo) / count as f64;
    (0..=count).map(|i| lo + step * i as f64).collect()
}

/// Tick label with precision chosen from the axis span.
pub fn format_tick(value: f64, span: f64) -> String {
    let decimals = if span >= 100.0 {
        0
    } else if span >= 1.0 {
        1
    } else {
        3
    };
    format!("{:.*}", decimals, value)
}

/// Lay tick labels along a horizontal axis of `width` cells.
///
/// Each label is centred on its position and clamped inside the row; labels
/// that would overlap an earlier one are dropped.
pub fn horizontal_tick_row(ticks: &[(f64, String)], width: usize) -> String {
    let mut row = vec![' '; width];
    let mut next_free = 0usize;

    for (fraction, label) in ticks {
        let len = label.chars().count();
        if len == 0 || len > width {
            continue;
        }
        let centre = (fraction.clamp(0.0, 1.0) * (width.saturating_sub(1)) as f64).round() as usize;
        let start = centre.saturating_sub(len / 2).min(width - len);
        if start < next_free {
            continue;
        }
        for (offset, ch) in label.chars().enumerate() {
            row[start + offset] = ch;
        }
        next_free = start + len + 1;
    }

    row.into_iter().collect()
}

/// Right-aligned tick labels stacked over `height` rows, top row = highest value.
pub fn vertical_tick_column(ticks: &[(f64, String)], height: usize, width: usize) -> Vec<String> {
    let mut rows = vec![" ".repeat(width); height];
    if height == 0 {
        return rows;
    }
    for (fraction, label) in ticks {
        let row = ((1.0 - fraction.clamp(0.0, 1.0)) * (height - 1) as f64).round() as usize;
        rows[row] = pad_left(label, width);
    }
    rows
}

/// Dim horizontal and vertical rules at the given data coordinates.
pub fn draw_grid(ctx: &mut Context<'_>, x_bounds: [f64; 2], y_bounds: [f64; 2], xs: &[f64], ys: &[f64]) {
    for &x in xs {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: y_bounds[0],
            x2: x,
            y2: y_bounds[1],
            color: GRID_COLOR,
        });
    }
    for &y in ys {
        ctx.draw(&CanvasLine {
            x1: x_bounds[0],
            y1: y,
            x2: x_bounds[1],
            y2: y,
            color: GRID_COLOR,
        });
    }
}
