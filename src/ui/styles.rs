use ratatui::style::{Color, Modifier, Style};

/// Accent color used for titles and hints.
pub const ACCENT: Color = Color::Indexed(208);

const SERIES_COLORS: &[Color] = &[
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
    Color::Yellow,
    Color::LightMagenta,
    Color::LightBlue,
];

/// Stable colour for the `index`-th group, cycling through the palette.
pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(Color::Gray)
}
