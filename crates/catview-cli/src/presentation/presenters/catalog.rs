use catview_engine::{Markers, category_counts};
use catview_runtime::Controller;
use catview_types::BuildMetadata;
use chrono::NaiveDateTime;

use crate::presentation::formatters::format_age;
use crate::presentation::view_models::{
    CategoryEntryViewModel, CategoryListViewModel, FilterSummary, MetadataField,
    MetadataViewModel, ProductListViewModel,
};

pub fn present_product_list(controller: &Controller) -> ProductListViewModel {
    let criteria = controller.criteria();
    ProductListViewModel {
        filter: FilterSummary {
            query: criteria.query,
            category: criteria.category,
        },
        total: controller.record_count(),
        shown: controller.visible_count(),
        headers: column_headers(controller),
        body: controller.view().clone(),
    }
}

/// All categories alphabetically, or the `top` largest with counts.
pub fn present_categories(controller: &Controller, top: Option<usize>) -> CategoryListViewModel {
    let categories = match top {
        Some(n) => category_counts(controller.records())
            .into_iter()
            .take(n)
            .map(|c| CategoryEntryViewModel {
                name: c.name,
                count: Some(c.count),
            })
            .collect(),
        None => controller
            .categories()
            .categories()
            .iter()
            .map(|name| CategoryEntryViewModel {
                name: name.clone(),
                count: None,
            })
            .collect(),
    };

    CategoryListViewModel {
        total: controller.category_count(),
        categories,
    }
}

pub fn present_metadata(
    metadata: &BuildMetadata,
    markers: &Markers,
    source: String,
    now: NaiveDateTime,
) -> MetadataViewModel {
    MetadataViewModel {
        source,
        fields: vec![
            MetadataField {
                label: markers.last_updated.clone(),
                value: metadata.last_updated.clone(),
            },
            MetadataField {
                label: markers.product_count.clone(),
                value: metadata.product_count.clone(),
            },
            MetadataField {
                label: markers.category_count.clone(),
                value: metadata.category_count.clone(),
            },
        ],
        age: metadata.updated_at().map(|then| format_age(then, now)),
    }
}

pub(crate) fn column_headers(controller: &Controller) -> Vec<String> {
    controller
        .labels()
        .column_headers()
        .iter()
        .map(|h| h.to_string())
        .collect()
}
