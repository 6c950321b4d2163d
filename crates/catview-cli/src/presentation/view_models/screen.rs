use catview_engine::TableBody;
use serde::Serialize;

use super::common::StatusBadge;

/// Everything the TUI draws for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub header: HeaderViewModel,
    pub filter_bar: FilterBarViewModel,
    pub table: TableViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub source: String,
    pub last_updated_label: String,
    pub last_updated: String,
    pub product_count_label: String,
    pub product_count: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterBarViewModel {
    pub query: String,
    pub category_label: String,
    /// 1-based position in the selector, sentinel included
    pub category_position: usize,
    pub category_options: usize,
    pub refresh_enabled: bool,
    /// Query and category changes are accepted (false while loading)
    pub editable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableViewModel {
    pub headers: Vec<String>,
    pub body: TableBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub status: StatusBadge,
    pub shown: usize,
    pub total: usize,
    pub categories: usize,
}
