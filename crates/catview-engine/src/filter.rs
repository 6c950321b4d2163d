use catview_types::ProductRecord;
use serde::{Deserialize, Serialize};

/// Active search text and category selection.
///
/// An empty query disables the text filter; `None` or an empty category
/// disables the category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.active_category().is_some()
    }
}

/// Does one record pass both predicates?
pub fn matches(record: &ProductRecord, criteria: &FilterCriteria) -> bool {
    let needle = criteria.query.to_lowercase();
    matches_lowered(record, &needle, criteria.active_category())
}

/// Ordered subsequence of `records` matching `criteria`. The input is not
/// touched.
pub fn filter_records(records: &[ProductRecord], criteria: &FilterCriteria) -> Vec<ProductRecord> {
    if !criteria.is_active() {
        return records.to_vec();
    }

    let needle = criteria.query.to_lowercase();
    let category = criteria.active_category();

    records
        .iter()
        .filter(|r| matches_lowered(r, &needle, category))
        .cloned()
        .collect()
}

fn matches_lowered(record: &ProductRecord, needle: &str, category: Option<&str>) -> bool {
    let text_ok = needle.is_empty()
        || contains_lowered(&record.nombre, needle)
        || contains_lowered(&record.categoria, needle);
    let category_ok = category.is_none_or(|c| record.categoria == c);
    text_ok && category_ok
}

fn contains_lowered(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("1", "Leche", "Lácteos").with_total_price(1.5),
            ProductRecord::new("2", "Pan", "Panadería"),
            ProductRecord::new("3", "Yogur natural", "Lácteos"),
            ProductRecord::new("4", "Agua", "Bebidas"),
        ]
    }

    fn ids(records: &[ProductRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = sample();
        assert_eq!(filter_records(&records, &FilterCriteria::new()), records);
        let sentinel = FilterCriteria::new().category("");
        assert_eq!(filter_records(&records, &sentinel), records);
    }

    #[test]
    fn test_query_matches_name_case_insensitively() {
        let result = filter_records(&sample(), &FilterCriteria::new().query("le"));
        assert_eq!(ids(&result), vec!["1"]);

        let result = filter_records(&sample(), &FilterCriteria::new().query("YOGUR"));
        assert_eq!(ids(&result), vec!["3"]);
    }

    #[test]
    fn test_query_also_matches_category() {
        let result = filter_records(&sample(), &FilterCriteria::new().query("lácteos"));
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let result = filter_records(&sample(), &FilterCriteria::new().query(" natural"));
        assert_eq!(ids(&result), vec!["3"]);
        let result = filter_records(&sample(), &FilterCriteria::new().query(" pan"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let result = filter_records(&sample(), &FilterCriteria::new().category("Lácteos"));
        assert_eq!(ids(&result), vec!["1", "3"]);
        let result = filter_records(&sample(), &FilterCriteria::new().category("lácteos"));
        assert!(result.is_empty());
        let result = filter_records(&sample(), &FilterCriteria::new().category("Lác"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let records = sample();
        for query in ["a", "le", "pan", "zzz", "LÁC"] {
            for category in ["Lácteos", "Panadería", "Bebidas", "Nada"] {
                let both = filter_records(&records, &FilterCriteria::new().query(query).category(category));
                let staged = filter_records(
                    &filter_records(&records, &FilterCriteria::new().query(query)),
                    &FilterCriteria::new().category(category),
                );
                assert_eq!(both, staged, "query={query:?} category={category:?}");
            }
        }
    }

    #[test]
    fn test_empty_name_does_not_match_but_category_still_can() {
        let mut record = ProductRecord::new("9", "x", "Congelados");
        record.nombre.clear();
        assert!(!matches(&record, &FilterCriteria::new().query("x")));
        assert!(matches(&record, &FilterCriteria::new().query("conge")));
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let records = sample();
        let before = records.clone();
        let _ = filter_records(&records, &FilterCriteria::new().query("pan").category("Panadería"));
        assert_eq!(records, before);
    }
}
