use std::time::Instant;

use catview_runtime::Controller;

use super::catalog::column_headers;
use super::status::phase_badge;
use crate::presentation::view_models::{
    FilterBarViewModel, HeaderViewModel, StatusBarViewModel, TableViewModel, TuiScreenViewModel,
};

const PLACEHOLDER_VALUE: &str = "-";

pub fn present_screen(controller: &Controller, source: &str, now: Instant) -> TuiScreenViewModel {
    let metadata = controller.metadata();
    let markers = controller.markers();
    let categories = controller.categories();

    TuiScreenViewModel {
        header: HeaderViewModel {
            source: source.to_string(),
            last_updated_label: markers.last_updated.clone(),
            last_updated: metadata
                .last_updated
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_VALUE.to_string()),
            product_count_label: markers.product_count.clone(),
            product_count: metadata
                .product_count
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_VALUE.to_string()),
        },
        filter_bar: FilterBarViewModel {
            query: controller.query().to_string(),
            category_label: categories.selected_label().to_string(),
            category_position: categories.selected_index() + 1,
            category_options: categories.len(),
            refresh_enabled: controller.can_refresh(now),
            editable: !controller.phase().is_loading(),
        },
        table: TableViewModel {
            headers: column_headers(controller),
            body: controller.view().clone(),
        },
        status_bar: StatusBarViewModel {
            status: phase_badge(controller.phase(), controller.labels()),
            shown: controller.visible_count(),
            total: controller.record_count(),
            categories: controller.category_count(),
        },
    }
}
