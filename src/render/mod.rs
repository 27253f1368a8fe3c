//! Markdown rendering of a statistics snapshot

pub mod markdown;
mod table;

pub use markdown::{format_duration, format_rate, render_fragment, TITLE};
pub use table::Table;
