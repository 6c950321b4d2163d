pub mod catalog;
pub mod common;
pub mod result;
pub mod screen;

pub use catalog::{
    CategoryEntryViewModel, CategoryListViewModel, FilterSummary, MetadataField,
    MetadataViewModel, ProductListViewModel,
};
pub use common::{StatusBadge, StatusLevel, Suggestion};
pub use result::CommandOutput;
pub use screen::{
    FilterBarViewModel, HeaderViewModel, StatusBarViewModel, TableViewModel, TuiScreenViewModel,
};
