pub mod axis;
pub mod terminal;

pub use terminal::FigureScreen;
