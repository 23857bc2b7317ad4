pub mod boxplot;
pub mod components;
pub mod figure;
pub mod histogram;
pub mod styles;

pub use components::FigureScreen;
pub use figure::{show_figures, BoxplotFigure, Figure, HistogramFigure};
