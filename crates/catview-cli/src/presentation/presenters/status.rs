//! Badges and follow-up suggestions derived from catalog state.

use catview_engine::Labels;
use catview_runtime::{Controller, Phase};
use catview_types::BuildMetadata;

use crate::presentation::view_models::{StatusBadge, StatusLevel, Suggestion};

/// Status bar text for the current load phase.
pub fn phase_badge(phase: &Phase, labels: &Labels) -> StatusBadge {
    match phase {
        Phase::Loading { .. } => StatusBadge::new(StatusLevel::Info, "Loading catalog..."),
        Phase::Error { message } => StatusBadge::new(
            StatusLevel::Error,
            format!("{}: {}", labels.load_error, message),
        ),
        Phase::Idle => StatusBadge::new(StatusLevel::Success, "Ready"),
    }
}

pub fn metadata_badge(metadata: &BuildMetadata) -> StatusBadge {
    if metadata.is_empty() {
        StatusBadge::new(StatusLevel::Warning, "No metadata lines found")
    } else {
        StatusBadge::new(StatusLevel::Success, "Catalog build")
    }
}

/// Next steps when `list` filtered a non-empty catalog down to nothing.
pub fn list_suggestions(controller: &Controller) -> Vec<Suggestion> {
    if controller.visible_count() > 0 || controller.record_count() == 0 {
        return Vec::new();
    }

    let criteria = controller.criteria();
    let mut suggestions = vec![Suggestion::new(
        "List the available categories",
        "catview categories",
    )];
    if criteria.category.is_some() && !criteria.query.is_empty() {
        suggestions.push(Suggestion::new(
            "Search every category",
            format!("catview list --query {:?}", criteria.query),
        ));
    }
    suggestions
}

pub fn metadata_suggestions(metadata: &BuildMetadata) -> Vec<Suggestion> {
    if !metadata.is_empty() {
        return Vec::new();
    }
    vec![Suggestion::new(
        "Point --metadata at the build_successful.txt file",
        "catview --metadata <path-or-url> meta",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use catview_engine::{Catalog, Markers};
    use catview_runtime::StartOutcome;
    use catview_types::ProductRecord;
    use std::time::Instant;

    fn loaded_controller() -> Controller {
        let mut controller = Controller::new(Labels::default(), Markers::default());
        let now = Instant::now();
        let catalog = Catalog::from_records(vec![
            ProductRecord::new("1", "Leche entera", "Lácteos"),
            ProductRecord::new("2", "Pan de molde", "Panadería"),
        ]);
        let StartOutcome::Started(ticket) = controller.start(now) else {
            panic!("load should start");
        };
        assert!(controller.finish_catalog(ticket, Ok(catalog), now));
        controller
    }

    #[test]
    fn test_metadata_badge_levels() {
        assert_eq!(
            metadata_badge(&BuildMetadata::default()).level,
            StatusLevel::Warning
        );
        let metadata = BuildMetadata {
            product_count: Some("2".to_string()),
            ..BuildMetadata::default()
        };
        assert_eq!(metadata_badge(&metadata).label, "Catalog build");
        assert!(metadata_suggestions(&metadata).is_empty());
        assert_eq!(metadata_suggestions(&BuildMetadata::default()).len(), 1);
    }

    #[test]
    fn test_no_suggestions_while_rows_are_shown() {
        let mut controller = loaded_controller();
        assert!(list_suggestions(&controller).is_empty());
        controller.set_query("leche");
        assert!(list_suggestions(&controller).is_empty());
    }

    #[test]
    fn test_empty_result_suggests_categories_then_wider_search() {
        let mut controller = loaded_controller();
        controller.set_query("zzz");
        let commands: Vec<String> = list_suggestions(&controller)
            .into_iter()
            .map(|s| s.command)
            .collect();
        assert_eq!(commands, vec!["catview categories"]);

        controller.select_category(Some("Panadería"));
        controller.set_query("leche");
        let commands: Vec<String> = list_suggestions(&controller)
            .into_iter()
            .map(|s| s.command)
            .collect();
        assert_eq!(
            commands,
            vec!["catview categories", "catview list --query \"leche\""]
        );
    }

    #[test]
    fn test_phase_badge_uses_load_error_label() {
        let badge = phase_badge(
            &Phase::Error {
                message: "HTTP error: timeout".to_string(),
            },
            &Labels::default(),
        );
        assert_eq!(badge.level, StatusLevel::Error);
        assert_eq!(badge.label, "Error al cargar: HTTP error: timeout");
    }
}
