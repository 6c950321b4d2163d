use crate::source::ResourceLocation;
use crate::{Error, Result};
use catview_engine::{Labels, Markers};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the catalog build step publishes its outputs.
pub const DEFAULT_CATALOG: &str = "catalogos/catalogo_completo_actual.csv";
pub const DEFAULT_METADATA: &str = "catalogos/build_successful.txt";

/// Minimum time the refresh control stays disabled after a load completes.
pub const DEFAULT_REFRESH_COOLDOWN_MS: u64 = 1000;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. Platform config directory (`<config_dir>/catview/config.toml`)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("catview").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no platform config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog CSV location (URL or path)
    pub catalog: String,
    /// Build metadata location (URL or path)
    pub metadata: String,
    pub refresh_cooldown_ms: u64,
    pub markers: Markers,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: DEFAULT_CATALOG.to_string(),
            metadata: DEFAULT_METADATA.to_string(),
            refresh_cooldown_ms: DEFAULT_REFRESH_COOLDOWN_MS,
            markers: Markers::default(),
            labels: Labels::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override resource locations with command-line values.
    pub fn with_overrides(mut self, catalog: Option<String>, metadata: Option<String>) -> Self {
        if let Some(catalog) = catalog {
            self.catalog = catalog;
        }
        if let Some(metadata) = metadata {
            self.metadata = metadata;
        }
        self
    }

    pub fn catalog_location(&self) -> Result<ResourceLocation> {
        ResourceLocation::parse(&self.catalog)
    }

    pub fn metadata_location(&self) -> Result<ResourceLocation> {
        ResourceLocation::parse(&self.metadata)
    }

    pub fn refresh_cooldown(&self) -> Duration {
        Duration::from_millis(self.refresh_cooldown_ms)
    }
}
