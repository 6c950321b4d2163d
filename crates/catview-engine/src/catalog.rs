use catview_types::{ProductRecord, RawRecord};
use serde::Serialize;

use crate::categories::distinct_categories;

/// A validated working set plus its derived category index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub records: Vec<ProductRecord>,
    pub categories: Vec<String>,
    /// Rows dropped for missing id, name or category
    pub rejected: usize,
}

impl Catalog {
    /// Validate raw rows once, preserving source order.
    pub fn from_rows(rows: &[RawRecord]) -> Self {
        let records: Vec<ProductRecord> = rows.iter().filter_map(ProductRecord::from_raw).collect();
        let rejected = rows.len() - records.len();
        let mut catalog = Self::from_records(records);
        catalog.rejected = rejected;
        catalog
    }

    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let categories = distinct_categories(&records);
        Self {
            records,
            categories,
            rejected: 0,
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_catalog;

    #[test]
    fn test_from_rows_drops_incomplete_rows_in_order() {
        let rows = parse_catalog(
            "id,nombre,categoria\n\
             1,Leche,Lácteos\n\
             ,Huérfano,Lácteos\n\
             2,Pan,Panadería\n\
             3,,Panadería\n\
             4,Yogur,\n\
             5,Queso,Lácteos\n",
        )
        .unwrap();

        let catalog = Catalog::from_rows(&rows);
        let ids: Vec<&str> = catalog.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
        assert_eq!(catalog.rejected, 3);
        assert_eq!(catalog.categories, vec!["Lácteos", "Panadería"]);
        assert_eq!(catalog.record_count(), 3);
        assert_eq!(catalog.category_count(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_rows(&[]);
        assert_eq!(catalog, Catalog::default());
    }
}
