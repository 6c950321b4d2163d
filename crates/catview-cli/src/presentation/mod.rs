//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contract; the JSON output is exactly these structs.
//! * `presenters/`: pure conversion from the controller state into view models.
//! * `views/`: `Display` impls for plain output and ratatui widgets for the TUI.
//! * `renderers/`: console (plain/JSON) and the TUI event loop.
//! * `formatters/`: small string helpers shared by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandOutput, StatusBadge, StatusLevel, Suggestion};
