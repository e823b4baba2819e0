pub mod text;
pub mod tui;

pub use text::{display_width, pad_to_width, truncate_to_width};
pub use tui::{Charset, TextRenderer};
