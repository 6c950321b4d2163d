mod catalog;
pub mod tui;
