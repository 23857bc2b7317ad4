pub mod text;

pub use text::{format_number, pad_left, pad_right};
