use catview_types::ProductRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Distinct `categoria` values, case-sensitive, ascending.
pub fn distinct_categories(records: &[ProductRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.categoria.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Records per category, largest first (ties by name).
pub fn category_counts(records: &[ProductRecord]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.categoria.as_str()).or_insert(0) += 1;
    }

    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
        })
        .collect();
    // Stable sort keeps the BTreeMap name order for equal counts
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// Options of the category selector.
///
/// Position zero is always the "all categories" sentinel; the remaining
/// options are replaced wholesale on every reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOptions {
    sentinel_label: String,
    categories: Vec<String>,
    selected: usize,
}

impl CategoryOptions {
    pub fn new(sentinel_label: impl Into<String>) -> Self {
        Self {
            sentinel_label: sentinel_label.into(),
            categories: Vec::new(),
            selected: 0,
        }
    }

    /// Swap every option except the sentinel and reset the selection to it.
    pub fn replace(&mut self, categories: Vec<String>) {
        self.categories = categories;
        self.selected = 0;
    }

    /// Number of options including the sentinel.
    pub fn len(&self) -> usize {
        self.categories.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Display labels in selector order, sentinel first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.sentinel_label.as_str())
            .chain(self.categories.iter().map(String::as_str))
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        self.selected_value().unwrap_or(&self.sentinel_label)
    }

    /// The selected category, or `None` for the sentinel.
    pub fn selected_value(&self) -> Option<&str> {
        match self.selected {
            0 => None,
            i => self.categories.get(i - 1).map(String::as_str),
        }
    }

    /// Select a category by exact value; `None` or `""` selects the sentinel.
    /// Returns `false` (selection unchanged) for unknown values.
    pub fn select(&mut self, value: Option<&str>) -> bool {
        match value.filter(|v| !v.is_empty()) {
            None => {
                self.selected = 0;
                true
            }
            Some(v) => match self.categories.iter().position(|c| c == v) {
                Some(pos) => {
                    self.selected = pos + 1;
                    true
                }
                None => false,
            },
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + self.len() - 1) % self.len();
    }
}
