pub mod fetch;
pub mod plot;

pub use fetch::run_fetch;
pub use plot::{run_plot, should_display};
