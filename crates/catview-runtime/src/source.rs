use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// Where a catalog or metadata resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    Http(Url),
    File(PathBuf),
}

impl ResourceLocation {
    /// `http(s)://` is fetched over the network, `file://` and bare paths
    /// are read from disk.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidLocation("empty location".to_string()));
        }

        if raw.starts_with("http://") || raw.starts_with("https://") {
            let url = Url::parse(raw).map_err(|e| Error::InvalidLocation(format!("{raw}: {e}")))?;
            return Ok(ResourceLocation::Http(url));
        }

        if raw.starts_with("file://") {
            let url = Url::parse(raw).map_err(|e| Error::InvalidLocation(format!("{raw}: {e}")))?;
            let path = url
                .to_file_path()
                .map_err(|_| Error::InvalidLocation(format!("{raw}: not a local path")))?;
            return Ok(ResourceLocation::File(path));
        }

        Ok(ResourceLocation::File(PathBuf::from(raw)))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ResourceLocation::Http(_))
    }
}

impl FromStr for ResourceLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocation::Http(url) => write!(f, "{}", url),
            ResourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Shared fetcher for both resources. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: Client,
}

impl ResourceClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("catview/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// One round trip; non-success HTTP statuses are errors.
    pub async fn fetch_text(&self, location: &ResourceLocation) -> Result<String> {
        debug!(%location, "fetching resource");

        match location {
            ResourceLocation::Http(url) => {
                let response = self.http.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(Error::Status {
                        location: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.text().await?)
            }
            ResourceLocation::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", path.display(), e),
                ))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_http_locations() {
        let loc = ResourceLocation::parse("https://example.org/catalogos/catalogo.csv").unwrap();
        assert!(loc.is_remote());
        assert_eq!(loc.to_string(), "https://example.org/catalogos/catalogo.csv");
    }

    #[test]
    fn test_parse_plain_path() {
        let loc = ResourceLocation::parse("catalogos/build_successful.txt").unwrap();
        assert_eq!(
            loc,
            ResourceLocation::File(PathBuf::from("catalogos/build_successful.txt"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_file_url() {
        let loc = ResourceLocation::parse("file:///tmp/catalogo.csv").unwrap();
        assert_eq!(loc, ResourceLocation::File(PathBuf::from("/tmp/catalogo.csv")));
    }

    #[test]
    fn test_parse_rejects_empty_and_broken_urls() {
        assert!(matches!(
            ResourceLocation::parse("  "),
            Err(Error::InvalidLocation(_))
        ));
        assert!(matches!(
            ResourceLocation::parse("http://"),
            Err(Error::InvalidLocation(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_local_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("meta.txt");
        std::fs::write(&path, "Total de productos: 2\n")?;

        let client = ResourceClient::new()?;
        let text = client.fetch_text(&ResourceLocation::File(path)).await?;
        assert_eq!(text, "Total de productos: 2\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_missing_file_names_the_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("missing.csv");

        let client = ResourceClient::new()?;
        let err = client
            .fetch_text(&ResourceLocation::File(path))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
        Ok(())
    }
}
