use catview_engine::{Catalog, load_catalog};
use tracing::{debug, info};

use crate::source::{ResourceClient, ResourceLocation};
use crate::Result;

/// Fetches the catalog CSV and turns it into a validated working set.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: ResourceClient,
    location: ResourceLocation,
}

impl CatalogLoader {
    pub fn new(client: ResourceClient, location: ResourceLocation) -> Self {
        Self { client, location }
    }

    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    /// Single round trip. A malformed row fails the whole load.
    pub async fn fetch(&self) -> Result<Catalog> {
        let text = self.client.fetch_text(&self.location).await?;
        let catalog = load_catalog(&text)?;

        if catalog.rejected > 0 {
            debug!(
                rejected = catalog.rejected,
                "dropped rows without id, nombre or categoria"
            );
        }
        info!(
            records = catalog.record_count(),
            categories = catalog.category_count(),
            location = %self.location,
            "catalog loaded"
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    fn loader_for(temp_dir: &TempDir, body: &str) -> Result<CatalogLoader> {
        let path = temp_dir.path().join("catalogo.csv");
        std::fs::write(&path, body)?;
        Ok(CatalogLoader::new(
            ResourceClient::new()?,
            ResourceLocation::File(path),
        ))
    }

    #[tokio::test]
    async fn test_fetch_filters_and_indexes() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loader = loader_for(
            &temp_dir,
            "id,nombre,categoria,precio_total\n1,Leche,Lácteos,1.5\n2,Pan,Panadería,\n3,,Lácteos,2\n",
        )?;

        let catalog = loader.fetch().await?;
        assert_eq!(catalog.record_count(), 2);
        assert_eq!(catalog.rejected, 1);
        assert_eq!(catalog.categories, vec!["Lácteos", "Panadería"]);
        assert_eq!(catalog.records[0].precio_total, Some(1.5));
        assert_eq!(catalog.records[1].precio_total, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_parse_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loader = loader_for(&temp_dir, "id,nombre,categoria\n1,Leche\n")?;

        let err = loader.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        Ok(())
    }
}
