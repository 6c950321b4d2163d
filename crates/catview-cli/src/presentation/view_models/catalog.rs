use catview_engine::TableBody;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductListViewModel {
    pub filter: FilterSummary,
    pub total: usize,
    pub shown: usize,
    pub headers: Vec<String>,
    pub body: TableBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListViewModel {
    pub total: usize,
    pub categories: Vec<CategoryEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CategoryEntryViewModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MetadataViewModel {
    pub source: String,
    pub fields: Vec<MetadataField>,
    /// Time since the catalog was built, when the timestamp parses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MetadataField {
    pub label: String,
    pub value: Option<String>,
}
