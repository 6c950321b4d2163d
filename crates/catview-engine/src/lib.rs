// Engine module - pure catalog logic (parsing, indexing, filtering, rendering)
// This layer sits between raw resource text (runtime) and CLI presentation

pub mod catalog;
pub mod catalog_csv;
pub mod categories;
pub mod error;
pub mod filter;
pub mod labels;
pub mod metadata;
pub mod render;

pub use catalog::Catalog;
pub use catalog_csv::parse_catalog;
pub use categories::{CategoryCount, CategoryOptions, category_counts, distinct_categories};
pub use error::{Error, Result};
pub use filter::{FilterCriteria, filter_records, matches};
pub use labels::{Labels, Markers};
pub use metadata::parse_metadata;
pub use render::{
    Availability, COLUMN_COUNT, LinkView, RowView, TableBody, format_price, format_unit_price,
    render_table,
};

// Façade API - what the runtime uses to turn fetched text into a working set

/// Parse catalog text and validate its rows in one step.
pub fn load_catalog(text: &str) -> Result<Catalog> {
    let rows = parse_catalog(text)?;
    Ok(Catalog::from_rows(&rows))
}
