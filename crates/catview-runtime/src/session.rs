use std::sync::mpsc::Sender;
use std::time::Instant;

use catview_engine::Catalog;
use catview_types::BuildMetadata;
use tokio::runtime::Handle;
use tracing::warn;

use crate::catalog_loader::CatalogLoader;
use crate::config::Config;
use crate::controller::{Controller, LoadEvent, LoadTicket, StartOutcome};
use crate::metadata_reader::MetadataReader;
use crate::source::ResourceClient;
use crate::Result;

/// The pair of readers behind one viewer: metadata and catalog are fetched
/// independently and neither waits for the other.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    metadata: MetadataReader,
    catalog: CatalogLoader,
}

impl CatalogSession {
    pub fn new(metadata: MetadataReader, catalog: CatalogLoader) -> Self {
        Self { metadata, catalog }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ResourceClient::new()?;
        let metadata = MetadataReader::new(
            client.clone(),
            config.metadata_location()?,
            config.markers.clone(),
        );
        let catalog = CatalogLoader::new(client, config.catalog_location()?);
        Ok(Self::new(metadata, catalog))
    }

    pub fn metadata_reader(&self) -> &MetadataReader {
        &self.metadata
    }

    pub fn catalog_loader(&self) -> &CatalogLoader {
        &self.catalog
    }

    /// Fetch both resources concurrently.
    pub async fn load_once(&self) -> (Result<BuildMetadata>, Result<Catalog>) {
        tokio::join!(self.metadata.fetch(), self.catalog.fetch())
    }

    /// Drive one full load through `controller` and wait for both results.
    ///
    /// Returns `false` when the controller refused to start.
    pub async fn refresh(&self, controller: &mut Controller) -> bool {
        let ticket = match controller.start(Instant::now()) {
            StartOutcome::Started(ticket) => ticket,
            StartOutcome::Ignored(reason) => {
                warn!(?reason, "refresh ignored");
                return false;
            }
        };

        let (metadata, catalog) = self.load_once().await;
        controller.finish_metadata(log_failure("metadata", metadata));
        controller.finish_catalog(ticket, log_failure("catalog", catalog), Instant::now());
        true
    }

    /// Spawn both fetches on `handle`; each completion is sent on `tx` as
    /// soon as it arrives.
    pub fn spawn_load(&self, handle: &Handle, ticket: LoadTicket, tx: Sender<LoadEvent>) {
        let metadata = self.metadata.clone();
        let metadata_tx = tx.clone();
        handle.spawn(async move {
            let result = log_failure("metadata", metadata.fetch().await);
            let _ = metadata_tx.send(LoadEvent::Metadata(result));
        });

        let catalog = self.catalog.clone();
        handle.spawn(async move {
            let result = log_failure("catalog", catalog.fetch().await);
            let _ = tx.send(LoadEvent::Catalog(ticket, result));
        });
    }
}

fn log_failure<T>(resource: &str, result: Result<T>) -> std::result::Result<T, String> {
    result.map_err(|e| {
        warn!(resource, error = %e, "load failed");
        e.to_string()
    })
}
