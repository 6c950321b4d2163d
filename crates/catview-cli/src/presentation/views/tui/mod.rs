//! TUI View Components
//!
//! Ratatui widgets for the interactive viewer. Each component wraps a
//! reference to its ViewModel and only maps it onto widgets.

pub mod filter_bar;
pub mod header;
pub mod product_table;
pub mod status_bar;

pub use filter_bar::FilterBarView;
pub use header::HeaderView;
pub use product_table::ProductTableView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
