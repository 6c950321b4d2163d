use catview_types::BuildMetadata;

use crate::Markers;

/// Scan build metadata text for the labelled lines.
///
/// For each marker the first line containing it wins; its value is what
/// follows the first colon, trimmed. A missing line (or a matching line
/// without a colon) leaves the field unset.
pub fn parse_metadata(text: &str, markers: &Markers) -> BuildMetadata {
    BuildMetadata {
        last_updated: find_labelled_value(text, &markers.last_updated),
        product_count: find_labelled_value(text, &markers.product_count),
        category_count: find_labelled_value(text, &markers.category_count),
    }
}

fn find_labelled_value(text: &str, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }

    let line = text.split('\n').find(|line| line.contains(marker))?;
    let (_, value) = line.split_once(':')?;
    Some(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILD_FILE: &str = "Última actualización: 2025-03-14 06:05:09\n\
                              Total de productos: 1873\n\
                              Categorías: 118\n";

    #[test]
    fn test_parse_all_fields() {
        let meta = parse_metadata(BUILD_FILE, &Markers::default());
        assert_eq!(meta.last_updated.as_deref(), Some("2025-03-14 06:05:09"));
        assert_eq!(meta.product_count.as_deref(), Some("1873"));
        assert_eq!(meta.category_count.as_deref(), Some("118"));
    }

    #[test]
    fn test_value_is_everything_after_first_colon() {
        let meta = parse_metadata("Última actualización:  10:30:00 \r\n", &Markers::default());
        assert_eq!(meta.last_updated.as_deref(), Some("10:30:00"));
    }

    #[test]
    fn test_first_matching_line_wins() {
        let text = "Total de productos: 10\nTotal de productos: 20\n";
        let meta = parse_metadata(text, &Markers::default());
        assert_eq!(meta.product_count.as_deref(), Some("10"));
    }

    #[test]
    fn test_missing_lines_leave_fields_unset() {
        let meta = parse_metadata("Total de productos: 5\n", &Markers::default());
        assert_eq!(meta.last_updated, None);
        assert_eq!(meta.product_count.as_deref(), Some("5"));
        assert!(parse_metadata("", &Markers::default()).is_empty());
    }

    #[test]
    fn test_matching_line_without_colon_is_unset() {
        let meta = parse_metadata("Total de productos desconocido\n", &Markers::default());
        assert_eq!(meta.product_count, None);
    }

    #[test]
    fn test_custom_markers() {
        let markers = Markers {
            last_updated: "last updated".to_string(),
            product_count: "total products".to_string(),
            ..Markers::default()
        };
        let meta = parse_metadata("last updated: yesterday\ntotal products: 3", &markers);
        assert_eq!(meta.last_updated.as_deref(), Some("yesterday"));
        assert_eq!(meta.product_count.as_deref(), Some("3"));
    }
}
