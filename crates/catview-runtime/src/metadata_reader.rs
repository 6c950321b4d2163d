use catview_engine::{Markers, parse_metadata};
use catview_types::BuildMetadata;
use tracing::debug;

use crate::source::{ResourceClient, ResourceLocation};
use crate::Result;

/// Fetches the build metadata file and scans it for the labelled lines.
#[derive(Debug, Clone)]
pub struct MetadataReader {
    client: ResourceClient,
    location: ResourceLocation,
    markers: Markers,
}

impl MetadataReader {
    pub fn new(client: ResourceClient, location: ResourceLocation, markers: Markers) -> Self {
        Self {
            client,
            location,
            markers,
        }
    }

    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    /// Retrieval failures are errors; missing lines are not.
    pub async fn fetch(&self) -> Result<BuildMetadata> {
        let text = self.client.fetch_text(&self.location).await?;
        let metadata = parse_metadata(&text, &self.markers);
        debug!(
            last_updated = ?metadata.last_updated,
            product_count = ?metadata.product_count,
            "metadata scanned"
        );
        Ok(metadata)
    }
}
