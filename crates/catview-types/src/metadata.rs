use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout written by the catalog build step.
pub const METADATA_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Informational fields scanned from the build metadata file.
///
/// Each field is independent and stays `None` when its line is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMetadata {
    pub last_updated: Option<String>,
    pub product_count: Option<String>,
    pub category_count: Option<String>,
}

impl BuildMetadata {
    pub fn is_empty(&self) -> bool {
        self.last_updated.is_none() && self.product_count.is_none() && self.category_count.is_none()
    }

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        let raw = self.last_updated.as_deref()?;
        NaiveDateTime::parse_from_str(raw, METADATA_TIMESTAMP_FORMAT).ok()
    }
}
